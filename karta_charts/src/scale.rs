// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scales, nice ticks and axis bounds.
//!
//! A [`Domain`] is the `[min, max]` extent of data values an axis represents;
//! a range is the pixel interval it is mapped onto. Everything here is
//! deterministic for degenerate inputs: a zero-width domain maps to the range
//! midpoint rather than dividing by zero.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A numeric domain with `max >= min` enforced by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    /// Smallest domain value.
    pub min: f64,
    /// Largest domain value.
    pub max: f64,
}

impl Domain {
    /// Creates a domain, ordering the endpoints if they arrive reversed.
    ///
    /// Equal endpoints are allowed (a degenerate, zero-width domain); a
    /// negative width is not representable.
    pub fn new(min: f64, max: f64) -> Self {
        if max < min {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// Returns the domain width (`>= 0`).
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Caller-supplied axis configuration: which field to read and optional
/// explicit bounds.
///
/// Created once per render and treated as immutable.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    /// Field key to read values from.
    pub key: String,
    /// Human-readable axis label.
    pub label: String,
    /// Optional explicit lower bound.
    pub min: Option<f64>,
    /// Optional explicit upper bound.
    pub max: Option<f64>,
}

impl AxisSpec {
    /// Creates an axis spec with inferred bounds.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            min: None,
            max: None,
        }
    }

    /// Pins the lower bound.
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Pins the upper bound.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Resolves this axis against a series of (already coerced) values.
    ///
    /// See [`axis_bounds`].
    pub fn bounds(&self, values: &[f64]) -> Domain {
        axis_bounds(self, values)
    }
}

/// A linear mapping from a [`Domain`] to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: Domain,
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    ///
    /// Ranges may be inverted (`range.0 > range.1`), which is the usual shape
    /// for a screen-space y axis.
    pub fn new(domain: Domain, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-width domain maps every value to the midpoint of the range, so
    /// the output stays deterministic instead of `NaN`.
    pub fn map(&self, x: f64) -> f64 {
        let (r0, r1) = self.range;
        let span = self.domain.span();
        if span == 0.0 {
            return (r0 + r1) * 0.5;
        }
        let t = (x - self.domain.min) / span;
        r0 + t * (r1 - r0)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns nice tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.min, self.domain.max, count)
    }
}

/// Normalizes `value` into `[0, 1]` over `[min, max]`.
///
/// Values outside the domain clamp to the interval ends; they are never
/// extrapolated. A zero-width (or non-finite) domain normalizes everything to
/// the midpoint `0.5`.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span == 0.0 || !span.is_finite() {
        return 0.5;
    }
    let t = (value - min) / span;
    if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) }
}

/// Returns "nice" tick values covering `[min, max]`.
///
/// The raw step `(max - min) / (count - 1)` is snapped up to the smallest of
/// `{1, 2, 5, 10} × 10^k` that covers it, then `min`/`max` are expanded
/// outward to multiples of that step and ticks are emitted inclusively.
/// Consequently `ticks[0] <= min`, `ticks[last] >= max`, and consecutive
/// ticks differ by a constant step.
///
/// `min == max` returns the single tick `[min]`.
pub fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    if count == 1 {
        return alloc::vec![min, max];
    }

    let raw = (max - min) / (count - 1) as f64;
    let step = snap_step(raw);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

/// Snaps a positive value up to the smallest of `{1, 2, 5, 10} × 10^k` that
/// covers it.
///
/// Non-finite or non-positive inputs snap to `0`.
pub fn nice_round_up(value: f64) -> f64 {
    snap_step(value)
}

fn snap_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let power = raw.log10().floor();
    let magnitude = 10_f64.powf(power);
    for multiple in [1.0, 2.0, 5.0, 10.0] {
        let snapped = multiple * magnitude;
        // Tolerate the rounding in `log10`/`powf` so exact multiples snap to
        // themselves instead of the next size up.
        if snapped >= raw * (1.0 - 1e-9) {
            return snapped;
        }
    }
    10.0 * magnitude
}

/// Resolves an axis domain from its spec and the series values it covers.
///
/// - Both bounds pinned: used verbatim.
/// - No (finite) values: `(min ?? 0, max ?? 1)`.
/// - Otherwise the lower bound defaults to `min(0, data min)` and the upper
///   bound to [`nice_round_up`] of `data max × 1.1` (10% headroom).
/// - A resulting `max <= min` is widened to `max = min + 1`.
pub fn axis_bounds(axis: &AxisSpec, values: &[f64]) -> Domain {
    if let (Some(min), Some(max)) = (axis.min, axis.max) {
        return Domain::new(min, max);
    }

    let mut data_min = f64::INFINITY;
    let mut data_max = f64::NEG_INFINITY;
    for &v in values {
        if !v.is_finite() {
            continue;
        }
        data_min = data_min.min(v);
        data_max = data_max.max(v);
    }
    if !data_min.is_finite() {
        let min = axis.min.unwrap_or(0.0);
        let max = axis.max.unwrap_or(1.0);
        return if max <= min {
            Domain { min, max: min + 1.0 }
        } else {
            Domain::new(min, max)
        };
    }

    let min = axis.min.unwrap_or_else(|| data_min.min(0.0));
    let max = axis.max.unwrap_or_else(|| nice_round_up(data_max * 1.1));
    if max <= min {
        Domain { min, max: min + 1.0 }
    } else {
        Domain::new(min, max)
    }
}
