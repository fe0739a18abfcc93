// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked-bar layout with a single global scale.
//!
//! Every bar shares one scale derived from the whole dataset, so bar heights
//! stay comparable across categories. Positive values accumulate outward
//! from the baseline in stack order, negative values accumulate the opposite
//! way from the same baseline. The baseline sits where value `0` lands given
//! the most negative bar sum in the dataset.
//!
//! This global-scale policy (rather than per-bar normalization) is part of
//! the chart's semantics, not an implementation detail.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use karta_data::{Dataset, DiagnosticCode, Diagnostics, coerce_number};

/// Which way stacks grow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Stacks grow along y; bars are laid out left to right.
    Vertical,
    /// Stacks grow along x; bars are laid out top to bottom.
    Horizontal,
}

/// One segment of one stacked bar.
///
/// Computed fresh on every layout pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StackSegment {
    /// Key of the series this segment belongs to.
    pub key: String,
    /// The segment's (signed) source value.
    pub value: f64,
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Position of this segment's key in the stacking order.
    pub stack_index: usize,
}

impl StackSegment {
    /// Returns the segment's rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Fraction of each bar slot used by the bar itself; the rest is gap.
const BAR_FILL_RATIO: f64 = 0.8;

/// A stacked-bar layout specification.
#[derive(Clone, Debug, PartialEq)]
pub struct StackLayoutSpec {
    /// Segment keys, in ascending stack order.
    pub keys: Vec<String>,
    /// Stacking direction.
    pub orientation: Orientation,
    /// The chart rectangle, in pixels.
    pub plot: Rect,
}

impl StackLayoutSpec {
    /// Creates a vertical stacked-bar layout over `plot`.
    pub fn new(keys: impl IntoIterator<Item = impl Into<String>>, plot: Rect) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            orientation: Orientation::Vertical,
            plot,
        }
    }

    /// Sets the stacking direction.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Lays out one bar per record, reading this spec's keys through value
    /// coercion.
    ///
    /// Returns one segment list per bar, in record order. Coercion failures
    /// degrade per-field (substituting `0`, reported to `diags`); a
    /// non-finite bar sum aborts the whole pass with an empty result and a
    /// [`DiagnosticCode::NonFiniteStackSum`] diagnostic.
    pub fn layout(&self, data: &Dataset, diags: &mut Diagnostics) -> Vec<Vec<StackSegment>> {
        let bars: Vec<Vec<f64>> = data
            .iter()
            .map(|record| {
                self.keys
                    .iter()
                    .map(|key| coerce_number(record, key, diags))
                    .collect()
            })
            .collect();
        self.layout_values(&bars, diags)
    }

    /// Lays out pre-extracted per-bar values (one inner slice per bar,
    /// aligned with this spec's keys).
    ///
    /// This is the numeric core of [`StackLayoutSpec::layout`]; it applies
    /// the same non-finite-sum abort to raw caller-supplied values.
    pub fn layout_values(
        &self,
        bars: &[Vec<f64>],
        diags: &mut Diagnostics,
    ) -> Vec<Vec<StackSegment>> {
        if bars.is_empty() || self.keys.is_empty() {
            return Vec::new();
        }

        // One pass over all bars for the global extremes.
        let mut global_max_positive = 0.0_f64;
        let mut global_max_negative = 0.0_f64;
        for (bar_index, values) in bars.iter().enumerate() {
            let mut positive_sum = 0.0;
            let mut negative_sum = 0.0;
            for &v in values {
                if v >= 0.0 {
                    positive_sum += v;
                } else {
                    negative_sum += v;
                }
            }
            let sum = positive_sum + negative_sum;
            if !sum.is_finite() {
                diags.report(
                    DiagnosticCode::NonFiniteStackSum,
                    format!("bar {bar_index}"),
                    format!("{sum}"),
                );
                return Vec::new();
            }
            global_max_positive = global_max_positive.max(positive_sum);
            global_max_negative = global_max_negative.min(negative_sum);
        }
        let global_max_abs = global_max_positive.max(-global_max_negative);

        let (axis_length, cross_length) = match self.orientation {
            Orientation::Vertical => (self.plot.height(), self.plot.width()),
            Orientation::Horizontal => (self.plot.width(), self.plot.height()),
        };

        // On-axis position of value 0, measured from the end stacks grow
        // away from (bottom edge for vertical, left edge for horizontal).
        let baseline = if global_max_abs > 0.0 {
            axis_length * (-global_max_negative) / global_max_abs
        } else {
            0.0
        };

        let bar_slot = cross_length / bars.len() as f64;
        let thickness = bar_slot * BAR_FILL_RATIO;
        let slot_inset = bar_slot * (1.0 - BAR_FILL_RATIO) * 0.5;

        bars.iter()
            .enumerate()
            .map(|(bar_index, values)| {
                let cross_start = bar_slot * bar_index as f64 + slot_inset;
                let mut positive_acc = 0.0;
                let mut negative_acc = 0.0;

                self.keys
                    .iter()
                    .zip(values)
                    .enumerate()
                    .map(|(stack_index, (key, &value))| {
                        // Extent can only exceed the axis through float
                        // division overshoot; clamp it to the chart bounds.
                        let extent = if global_max_abs > 0.0 {
                            (value.abs() / global_max_abs * axis_length).clamp(0.0, axis_length)
                        } else {
                            0.0
                        };
                        // Signed offset of the segment's near-zero edge from
                        // the baseline.
                        let offset = if value >= 0.0 {
                            let offset = positive_acc;
                            positive_acc += extent;
                            offset
                        } else {
                            negative_acc += extent;
                            -negative_acc
                        };
                        self.segment(
                            key.clone(),
                            value,
                            stack_index,
                            baseline + offset,
                            extent,
                            cross_start,
                            thickness,
                        )
                    })
                    .collect()
            })
            .collect()
    }

    // `along` is the segment's lower edge measured from the stack-growth
    // origin in the growth direction; transpose into screen x/y.
    fn segment(
        &self,
        key: String,
        value: f64,
        stack_index: usize,
        along: f64,
        extent: f64,
        cross_start: f64,
        thickness: f64,
    ) -> StackSegment {
        match self.orientation {
            Orientation::Vertical => StackSegment {
                key,
                value,
                x: self.plot.x0 + cross_start,
                // Growth runs upward from the bottom edge; flip into y-down
                // pixels, where the segment's top is its far edge.
                y: self.plot.y1 - along - extent,
                width: thickness,
                height: extent,
                stack_index,
            },
            Orientation::Horizontal => StackSegment {
                key,
                value,
                x: self.plot.x0 + along,
                y: self.plot.y0 + cross_start,
                width: extent,
                height: thickness,
                stack_index,
            },
        }
    }
}
