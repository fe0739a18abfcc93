// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cartesian series projection for scatter, bubble and line charts.
//!
//! Projection resolves both axis domains from the dataset, instantiates
//! pixel scales over the plot rectangle (y inverted for screen coordinates)
//! and maps every record to a [`PlotPoint`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;

use karta_data::{Dataset, Diagnostics, Record, coerce_values};

use crate::path::PathData;
use crate::scale::{AxisSpec, ScaleLinear, axis_bounds, normalize};

/// A computed 2D position plus the originating value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotPoint {
    /// Pixel x.
    pub x: f64,
    /// Pixel y.
    pub y: f64,
    /// The y-axis source value that produced this point.
    pub value: f64,
}

/// One data row rendered as one radar polygon or one scatter group.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Stable series id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The series' record.
    pub record: Record,
    /// Optional series paint.
    pub color: Option<Color>,
}

impl Series {
    /// Creates a series without a pinned color.
    pub fn new(id: impl Into<String>, name: impl Into<String>, record: Record) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            record,
            color: None,
        }
    }

    /// Pins the series paint.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// A projected dataset together with the scales that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    /// One point per record, in record order.
    pub points: Vec<PlotPoint>,
    /// The x pixel scale.
    pub x_scale: ScaleLinear,
    /// The y pixel scale (range inverted: domain min at the plot bottom).
    pub y_scale: ScaleLinear,
}

/// Projects a dataset through two axes onto a plot rectangle.
///
/// Axis domains resolve via [`axis_bounds`] over the coerced values;
/// coercion failures substitute `0` and report to `diags`.
pub fn project(
    data: &Dataset,
    x_axis: &AxisSpec,
    y_axis: &AxisSpec,
    plot: Rect,
    diags: &mut Diagnostics,
) -> Projection {
    let xs = coerce_values(data, &x_axis.key, diags);
    let ys = coerce_values(data, &y_axis.key, diags);

    let x_scale = ScaleLinear::new(axis_bounds(x_axis, &xs), (plot.x0, plot.x1));
    let y_scale = ScaleLinear::new(axis_bounds(y_axis, &ys), (plot.y1, plot.y0));

    let points = xs
        .iter()
        .zip(&ys)
        .map(|(&x, &y)| PlotPoint {
            x: x_scale.map(x),
            y: y_scale.map(y),
            value: y,
        })
        .collect();

    Projection {
        points,
        x_scale,
        y_scale,
    }
}

/// Builds an open polyline through `points`, in order.
///
/// Fewer than two points draw nothing (the empty path).
pub fn polyline_path(points: &[PlotPoint]) -> PathData {
    let mut path = PathData::new();
    if points.len() < 2 {
        return path;
    }
    path.move_to((points[0].x, points[0].y));
    for p in &points[1..] {
        path.line_to((p.x, p.y));
    }
    path
}

/// Maps a bubble-size field onto radii in `[min_radius, max_radius]`.
///
/// Each value normalizes over the field's own data extent; a constant field
/// reads as the midpoint radius. Radii align with records by index.
pub fn bubble_radii(
    data: &Dataset,
    key: &str,
    min_radius: f64,
    max_radius: f64,
    diags: &mut Diagnostics,
) -> Vec<f64> {
    let values = coerce_values(data, key, diags);
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in &values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    values
        .iter()
        .map(|&v| min_radius + normalize(v, lo, hi) * (max_radius - min_radius))
        .collect()
}
