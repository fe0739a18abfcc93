// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar conversions and arc path generation.
//!
//! Angles are in degrees, measured from the positive x axis and increasing
//! clockwise in screen coordinates (y grows downward). Callers choose the
//! convention on top of that: pie slices start at the top (`-90°`), the gauge
//! dial spans `135°..405°`, the semicircle variant enters at `180°`.

extern crate alloc;

use kurbo::Point;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::path::PathData;

/// Angular epsilon, in degrees, shaved off a sweep that reaches the full
/// bound so the arc's start and end points never coincide.
pub const ARC_EPSILON_DEGREES: f64 = 1e-3;

/// The start angle of the semicircle variant: entering at the left so the
/// 180° sweep crosses the top of the circle.
pub const SEMICIRCLE_START_ANGLE: f64 = 180.0;

/// Converts polar coordinates (center, radius, angle in degrees) to
/// Cartesian.
pub fn polar_to_cartesian(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let rad = angle_degrees.to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Builds the path for a pie wedge or donut ring segment.
///
/// With `inner_radius == 0` this is a wedge anchored at the center; with a
/// positive inner radius it is a ring segment (outer arc, joined to the inner
/// arc traversed in reverse). The large-arc flag is set whenever the sweep
/// exceeds 180°.
///
/// A sweep within [`ARC_EPSILON_DEGREES`] of a full circle is shortened by
/// that epsilon and split into two half arcs through the midpoint angle; a
/// single arc command with coinciding endpoints would be degenerate and
/// render as nothing.
///
/// A non-positive sweep or outer radius yields the empty path.
pub fn describe_arc(
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> PathData {
    arc_path(
        center,
        outer_radius,
        inner_radius,
        start_angle,
        end_angle,
        360.0,
    )
}

/// Builds the gauge-style semicircle track: a fixed 180° sweep entered at
/// [`SEMICIRCLE_START_ANGLE`], split into two quarter arcs (the sweep sits
/// exactly on the splitting bound).
pub fn describe_semicircle(center: Point, outer_radius: f64, inner_radius: f64) -> PathData {
    arc_path(
        center,
        outer_radius,
        inner_radius,
        SEMICIRCLE_START_ANGLE,
        SEMICIRCLE_START_ANGLE + 180.0,
        180.0,
    )
}

fn arc_path(
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    start_angle: f64,
    mut end_angle: f64,
    full_bound: f64,
) -> PathData {
    let mut path = PathData::new();
    let mut sweep = end_angle - start_angle;
    if !(sweep > 0.0) || !(outer_radius > 0.0) {
        return path;
    }

    let split = sweep >= full_bound - ARC_EPSILON_DEGREES;
    if split {
        end_angle = start_angle + full_bound - ARC_EPSILON_DEGREES;
        sweep = end_angle - start_angle;
    }
    let mid_angle = start_angle + sweep * 0.5;
    let large = !split && sweep > 180.0;

    let outer_start = polar_to_cartesian(center, outer_radius, start_angle);
    let outer_end = polar_to_cartesian(center, outer_radius, end_angle);

    if inner_radius > 0.0 {
        let inner_start = polar_to_cartesian(center, inner_radius, start_angle);
        let inner_end = polar_to_cartesian(center, inner_radius, end_angle);

        path.move_to(outer_start);
        if split {
            let outer_mid = polar_to_cartesian(center, outer_radius, mid_angle);
            path.arc_to(outer_radius, outer_radius, 0.0, false, true, outer_mid);
            path.arc_to(outer_radius, outer_radius, 0.0, false, true, outer_end);
            path.line_to(inner_end);
            let inner_mid = polar_to_cartesian(center, inner_radius, mid_angle);
            path.arc_to(inner_radius, inner_radius, 0.0, false, false, inner_mid);
            path.arc_to(inner_radius, inner_radius, 0.0, false, false, inner_start);
        } else {
            path.arc_to(outer_radius, outer_radius, 0.0, large, true, outer_end);
            path.line_to(inner_end);
            path.arc_to(inner_radius, inner_radius, 0.0, large, false, inner_start);
        }
        path.close();
    } else {
        path.move_to(center);
        path.line_to(outer_start);
        if split {
            let outer_mid = polar_to_cartesian(center, outer_radius, mid_angle);
            path.arc_to(outer_radius, outer_radius, 0.0, false, true, outer_mid);
            path.arc_to(outer_radius, outer_radius, 0.0, false, true, outer_end);
        } else {
            path.arc_to(outer_radius, outer_radius, 0.0, large, true, outer_end);
        }
        path.close();
    }
    path
}
