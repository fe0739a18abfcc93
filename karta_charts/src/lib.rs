// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure chart geometry for the karta engine.
//!
//! This crate is the stateless numeric layer between data records and a
//! drawing surface:
//! - **Scales** map data domains into pixel ranges and generate nice ticks.
//! - **Polar/pie/gauge/radar** modules turn values into angles and path
//!   strings in the standard `M`/`L`/`A`/`Z` mini-language.
//! - **Stacks** lay out signed stacked bars under one global scale.
//! - **Regression** fits trend overlays by ordinary least squares.
//!
//! Every function is synchronous, side-effect-free and total over degenerate
//! inputs: empty series, zero-width domains, single points, and full-circle
//! arcs all produce explicit (possibly empty) geometry rather than `NaN`s or
//! panics. The only observable side channel is the caller-owned
//! [`karta_data::Diagnostics`] sink.

#![no_std]

extern crate alloc;

#[cfg(not(feature = "std"))]
mod float;
mod gauge;
mod path;
mod pie;
mod polar;
mod radar;
mod regression;
mod scale;
mod series;
mod stack;
#[cfg(test)]
mod stack_tests;

pub use gauge::{
    GAUGE_END_ANGLE, GAUGE_START_ANGLE, GAUGE_SWEEP, Zone, ZoneArc, dial_track, value_angle,
    zone_arcs,
};
pub use path::PathData;
pub use pie::{PieKind, Slice, SliceError, pie_slices};
pub use polar::{
    ARC_EPSILON_DEGREES, SEMICIRCLE_START_ANGLE, describe_arc, describe_semicircle,
    polar_to_cartesian,
};
pub use radar::{
    GridShape, LabelAnchor, RADAR_ANGLE_OFFSET, TextAnchor, TextBaseline, axis_angle, axis_point,
    grid_ring_path, label_anchor, polygon_path, radar_points,
};
pub use regression::{RegressionResult, linear_regression};
pub use scale::{
    AxisSpec, Domain, ScaleLinear, axis_bounds, nice_round_up, nice_ticks, normalize,
};
pub use series::{PlotPoint, Projection, Series, bubble_radii, polyline_path, project};
pub use stack::{Orientation, StackLayoutSpec, StackSegment};
