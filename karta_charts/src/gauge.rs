// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gauge geometry: the 270° dial sweep and zone arcs.
//!
//! The dial spans 135° → 405°: a 270° sweep entered at the lower left,
//! crossing the top, ending at the lower right. Zones are caller-supplied
//! value intervals painted onto the dial; they are rendered exactly as given,
//! with no overlap or coverage checking.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;

use crate::path::PathData;
use crate::polar::describe_arc;
use crate::scale::{Domain, normalize};

/// Angle (degrees) where the dial sweep begins.
pub const GAUGE_START_ANGLE: f64 = 135.0;

/// Total angular extent of the dial in degrees.
pub const GAUGE_SWEEP: f64 = 270.0;

/// Angle (degrees) where the dial sweep ends.
pub const GAUGE_END_ANGLE: f64 = GAUGE_START_ANGLE + GAUGE_SWEEP;

/// A caller-supplied value interval painted onto the dial.
///
/// Zones are contiguous by convention but nothing enforces it; callers are
/// responsible for coverage.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    /// Interval start, in domain units.
    pub from: f64,
    /// Interval end, in domain units.
    pub to: f64,
    /// Paint for the zone band.
    pub color: Color,
    /// Optional zone label.
    pub label: Option<String>,
}

impl Zone {
    /// Creates an unlabeled zone.
    pub fn new(from: f64, to: f64, color: Color) -> Self {
        Self {
            from,
            to,
            color,
            label: None,
        }
    }

    /// Attaches a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A zone mapped onto the dial.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneArc {
    /// Start angle in degrees.
    pub start_angle: f64,
    /// End angle in degrees.
    pub end_angle: f64,
    /// Paint carried over from the zone.
    pub color: Color,
    /// Label carried over from the zone.
    pub label: Option<String>,
}

impl ZoneArc {
    /// Builds the ring-segment path for this zone band.
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

/// Maps a domain value onto its dial angle in degrees.
///
/// `135 + normalized(value) × 270`; values outside the domain pin to the dial
/// ends, and a zero-width domain reads as the dial midpoint (straight up).
pub fn value_angle(value: f64, domain: Domain) -> f64 {
    GAUGE_START_ANGLE + normalize(value, domain.min, domain.max) * GAUGE_SWEEP
}

/// Maps zones onto the dial, in input order.
///
/// Each zone's `[from, to]` goes through [`value_angle`] independently;
/// overlaps and gaps pass through untouched.
pub fn zone_arcs(zones: &[Zone], domain: Domain) -> Vec<ZoneArc> {
    zones
        .iter()
        .map(|zone| ZoneArc {
            start_angle: value_angle(zone.from, domain),
            end_angle: value_angle(zone.to, domain),
            color: zone.color,
            label: zone.label.clone(),
        })
        .collect()
}

/// Builds the dial's background track: the full 270° ring segment.
pub fn dial_track(center: Point, outer_radius: f64, inner_radius: f64) -> PathData {
    describe_arc(
        center,
        outer_radius,
        inner_radius,
        GAUGE_START_ANGLE,
        GAUGE_END_ANGLE,
    )
}
