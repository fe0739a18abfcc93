// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radar geometry: axis angles, polygons, grid rings and label anchors.
//!
//! A radar chart spreads N axes evenly around a center; index 0 sits at the
//! top (12 o'clock) and indices advance clockwise. Angles here are in
//! radians — the polygon/grid math never leaves trigonometric space, unlike
//! the degree-based arc builders in [`crate::polar`].

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use karta_data::{Diagnostics, Record, coerce_number};

use crate::path::PathData;
use crate::scale::{AxisSpec, Domain, normalize};

/// Rotation applied to every radar angle so index 0 points up.
pub const RADAR_ANGLE_OFFSET: f64 = -core::f64::consts::FRAC_PI_2;

/// Radius of the marker path substituted for a single-point "polygon".
const POINT_MARKER_RADIUS: f64 = 2.0;

/// Dead band (in units of sin/cos, ≈ radians near the cardinals) inside
/// which label anchors stay centered instead of flipping side to side.
const ANCHOR_DEAD_BAND: f64 = 0.1;

/// Returns the raw angle of axis `index` out of `total`, in radians.
///
/// The result is `2π·index/total`, unrotated; apply
/// [`RADAR_ANGLE_OFFSET`] (as [`axis_point`] does) to place index 0 at the
/// top. `total == 0` returns `0`.
pub fn axis_angle(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    core::f64::consts::TAU * index as f64 / total as f64
}

/// Returns the screen position of axis `index` at `radius` from `center`.
pub fn axis_point(center: Point, radius: f64, index: usize, total: usize) -> Point {
    let angle = axis_angle(index, total) + RADAR_ANGLE_OFFSET;
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Builds a closed polygon path through `points`.
///
/// Degenerate ladders:
/// - 0 points → the empty path (nothing to draw),
/// - 1 point → a small circular marker so the datum stays visible,
/// - 2 points → an open line segment (no close),
/// - 3+ points → moveto, linetos, closepath.
pub fn polygon_path(points: &[Point]) -> PathData {
    match points {
        [] => PathData::new(),
        [p] => circle_path(*p, POINT_MARKER_RADIUS),
        [a, b] => {
            let mut path = PathData::new();
            path.move_to(*a);
            path.line_to(*b);
            path
        }
        [first, rest @ ..] => {
            let mut path = PathData::new();
            path.move_to(*first);
            for p in rest {
                path.line_to(*p);
            }
            path.close();
            path
        }
    }
}

/// Shape of the concentric grid rings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridShape {
    /// A regular polygon with one vertex per axis.
    Polygon,
    /// A true circle.
    Circle,
}

/// Builds one concentric grid ring at `radius`.
///
/// `sides` is the axis count for the polygonal shape; the circular shape
/// ignores it. Fewer than three sides degrades to a circle (a 1- or 2-gon is
/// not drawable as a ring).
pub fn grid_ring_path(center: Point, radius: f64, sides: usize, shape: GridShape) -> PathData {
    if radius <= 0.0 {
        return PathData::new();
    }
    match shape {
        GridShape::Polygon if sides >= 3 => {
            let points: Vec<Point> = (0..sides)
                .map(|i| axis_point(center, radius, i, sides))
                .collect();
            polygon_path(&points)
        }
        _ => circle_path(center, radius),
    }
}

/// Horizontal text anchoring relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text begins at the point (label sits to the right).
    Start,
    /// Text is centered on the point.
    Middle,
    /// Text ends at the point (label sits to the left).
    End,
}

/// Vertical text baseline relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// Text hangs below the point.
    Hanging,
    /// Text is vertically centered on the point.
    Middle,
    /// The renderer's natural baseline (text sits above the point).
    Auto,
}

/// A positioned, anchored label slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelAnchor {
    /// Label position.
    pub pos: Point,
    /// Horizontal anchoring.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
}

/// Places an axis label at `radius + offset` along `angle` (radians, screen
/// convention — already rotated).
///
/// The anchor follows which side of vertical the angle falls on, the
/// baseline which side of horizontal, with a small dead band around the
/// cardinal directions so anchors don't flicker for labels sitting almost
/// exactly above, below or beside the center.
pub fn label_anchor(center: Point, radius: f64, offset: f64, angle: f64) -> LabelAnchor {
    let r = radius + offset;
    let (sin, cos) = (angle.sin(), angle.cos());
    let pos = Point::new(center.x + r * cos, center.y + r * sin);

    let anchor = if cos > ANCHOR_DEAD_BAND {
        TextAnchor::Start
    } else if cos < -ANCHOR_DEAD_BAND {
        TextAnchor::End
    } else {
        TextAnchor::Middle
    };
    let baseline = if sin > ANCHOR_DEAD_BAND {
        TextBaseline::Hanging
    } else if sin < -ANCHOR_DEAD_BAND {
        TextBaseline::Auto
    } else {
        TextBaseline::Middle
    };
    LabelAnchor {
        pos,
        anchor,
        baseline,
    }
}

/// Projects one record onto the radar axes.
///
/// Each axis value is coerced from the record, normalized over its domain
/// and placed along its axis direction at the proportional radius. `axes`
/// and `domains` are paired by index; the shorter length wins.
pub fn radar_points(
    record: &Record,
    axes: &[AxisSpec],
    domains: &[Domain],
    center: Point,
    radius: f64,
    diags: &mut Diagnostics,
) -> Vec<Point> {
    let total = axes.len().min(domains.len());
    (0..total)
        .map(|i| {
            let value = coerce_number(record, &axes[i].key, diags);
            let t = normalize(value, domains[i].min, domains[i].max);
            axis_point(center, radius * t, i, total)
        })
        .collect()
}

fn circle_path(center: Point, radius: f64) -> PathData {
    let mut path = PathData::new();
    let left = Point::new(center.x - radius, center.y);
    let right = Point::new(center.x + radius, center.y);
    path.move_to(left);
    path.arc_to(radius, radius, 0.0, true, false, right);
    path.arc_to(radius, radius, 0.0, true, false, left);
    path.close();
    path
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    const CENTER: Point = Point::new(0.0, 0.0);

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn axis_angles_divide_the_circle_evenly() {
        assert_eq!(axis_angle(0, 4), 0.0);
        assert_close(axis_angle(1, 4), core::f64::consts::FRAC_PI_2);
        assert_close(axis_angle(3, 6), core::f64::consts::PI);
        assert_eq!(axis_angle(0, 0), 0.0);
    }

    #[test]
    fn axis_zero_points_up() {
        let p = axis_point(CENTER, 10.0, 0, 5);
        assert_close(p.x, 0.0);
        assert_close(p.y, -10.0);
    }

    #[test]
    fn polygon_path_degenerate_ladder() {
        assert_eq!(polygon_path(&[]).as_str(), "");

        let marker = polygon_path(&[Point::new(5.0, 5.0)]).into_string();
        assert!(marker.starts_with('M'), "marker is a drawable path");
        assert!(marker.contains('A'), "marker is circular");

        let open = polygon_path(&[Point::new(0.0, 0.0), Point::new(4.0, 0.0)]).into_string();
        assert_eq!(open, "M 0 0 L 4 0");

        let closed = polygon_path(&[
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 3.0),
        ])
        .into_string();
        assert!(closed.starts_with('M'));
        assert!(closed.ends_with('Z'));
        assert_eq!(closed.matches('L').count(), 2);
    }

    #[test]
    fn grid_rings_are_polygons_or_circles() {
        let poly = grid_ring_path(CENTER, 10.0, 5, GridShape::Polygon).into_string();
        assert!(poly.ends_with('Z'));
        assert_eq!(poly.matches('L').count(), 4);

        let circle = grid_ring_path(CENTER, 10.0, 5, GridShape::Circle).into_string();
        assert_eq!(circle.matches('A').count(), 2);

        // Too few sides for a polygon degrades to a circle.
        let degenerate = grid_ring_path(CENTER, 10.0, 2, GridShape::Polygon).into_string();
        assert!(degenerate.contains('A'));

        assert!(grid_ring_path(CENTER, 0.0, 5, GridShape::Polygon).is_empty());
    }

    #[test]
    fn label_anchors_follow_the_quadrant() {
        // Right side: text starts at the point.
        let right = label_anchor(CENTER, 10.0, 2.0, 0.0);
        assert_eq!(right.anchor, TextAnchor::Start);
        assert_eq!(right.baseline, TextBaseline::Middle);
        assert_close(right.pos.x, 12.0);

        // Straight down (screen): hanging, centered.
        let below = label_anchor(CENTER, 10.0, 2.0, core::f64::consts::FRAC_PI_2);
        assert_eq!(below.anchor, TextAnchor::Middle);
        assert_eq!(below.baseline, TextBaseline::Hanging);

        // Straight up: natural baseline, centered.
        let above = label_anchor(CENTER, 10.0, 2.0, -core::f64::consts::FRAC_PI_2);
        assert_eq!(above.anchor, TextAnchor::Middle);
        assert_eq!(above.baseline, TextBaseline::Auto);

        // Left side: text ends at the point.
        let left = label_anchor(CENTER, 10.0, 2.0, core::f64::consts::PI);
        assert_eq!(left.anchor, TextAnchor::End);
    }

    #[test]
    fn anchors_hold_steady_inside_the_dead_band() {
        // 0.05 rad off vertical is inside the ±0.1 dead band.
        let nearly_down = label_anchor(CENTER, 10.0, 0.0, core::f64::consts::FRAC_PI_2 - 0.05);
        assert_eq!(nearly_down.anchor, TextAnchor::Middle);
        let other_side = label_anchor(CENTER, 10.0, 0.0, core::f64::consts::FRAC_PI_2 + 0.05);
        assert_eq!(other_side.anchor, TextAnchor::Middle);
    }

    #[test]
    fn radar_points_normalize_each_axis_independently() {
        let record = Record::new().with_field("a", 10.0).with_field("b", 50.0);
        let axes = vec![AxisSpec::new("a", "A"), AxisSpec::new("b", "B")];
        let domains = vec![Domain::new(0.0, 10.0), Domain::new(0.0, 100.0)];
        let mut diags = Diagnostics::new();

        let points = radar_points(&record, &axes, &domains, CENTER, 100.0, &mut diags);
        assert_eq!(points.len(), 2);
        // Axis 0 at full radius, straight up.
        assert_close(points[0].y, -100.0);
        // Axis 1 at half radius, rotated a half turn past up = straight down.
        assert_close(points[1].y, 50.0);
        assert!(diags.is_empty());
    }
}
