// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie/donut slice layout.
//!
//! Slice layout turns a positive value series into per-slice start/end
//! angles; [`crate::polar::describe_arc`] turns those into wedge or ring
//! paths. Negative values are an explicit invalid-input condition — silently
//! zeroing them would misrepresent the proportions the chart claims to show.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use crate::path::PathData;
use crate::polar::{SEMICIRCLE_START_ANGLE, describe_arc};

/// How much of the circle a pie occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieKind {
    /// A full 360° disc, first slice starting at the top.
    Full,
    /// A 180° half disc, entered at the left so it crosses the top.
    Semi,
}

impl PieKind {
    /// Returns `(start angle, total sweep)` in degrees.
    pub fn arc(self) -> (f64, f64) {
        match self {
            Self::Full => (-90.0, 360.0),
            Self::Semi => (SEMICIRCLE_START_ANGLE, 180.0),
        }
    }
}

/// Why a slice layout was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum SliceError {
    /// A value was negative; a slice cannot represent it.
    NegativeValue {
        /// Index of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// A value was NaN or infinite.
    NonFiniteValue {
        /// Index of the offending value.
        index: usize,
    },
}

/// One laid-out slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    /// Index of the originating value.
    pub index: usize,
    /// The originating value.
    pub value: f64,
    /// This slice's share of the total, in `[0, 1]`.
    pub fraction: f64,
    /// Start angle in degrees.
    pub start_angle: f64,
    /// End angle in degrees.
    pub end_angle: f64,
}

impl Slice {
    /// Returns the angular sweep of this slice in degrees.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Builds the wedge (`inner_radius == 0`) or ring-segment path for this
    /// slice.
    pub fn path(&self, center: Point, outer_radius: f64, inner_radius: f64) -> PathData {
        describe_arc(
            center,
            outer_radius,
            inner_radius,
            self.start_angle,
            self.end_angle,
        )
    }
}

/// Lays out slices proportionally over the pie's sweep.
///
/// Values must be finite and non-negative. Zero values produce zero-sweep
/// slices (kept, so indices stay aligned with the input); an all-zero or
/// empty series produces no slices at all.
pub fn pie_slices(values: &[f64], kind: PieKind) -> Result<Vec<Slice>, SliceError> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(SliceError::NonFiniteValue { index });
        }
        if value < 0.0 {
            return Err(SliceError::NegativeValue { index, value });
        }
    }

    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Ok(Vec::new());
    }

    let (start, sweep) = kind.arc();
    let mut acc = 0.0;
    let slices = values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let fraction = value / total;
            let start_angle = start + acc / total * sweep;
            acc += value;
            let end_angle = start + acc / total * sweep;
            Slice {
                index,
                value,
                fraction,
                start_angle,
                end_angle,
            }
        })
        .collect();
    Ok(slices)
}
