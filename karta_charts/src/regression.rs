// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordinary least-squares linear regression.
//!
//! Used for scatter-chart trend overlays. The fit is recomputed whenever the
//! input point set changes; the result is plain derived data.

extern crate alloc;

use kurbo::Point;

use crate::path::PathData;
use crate::scale::{Domain, ScaleLinear};

/// A fitted regression line with its goodness of fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegressionResult {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
    /// Coefficient of determination in `[0, 1]`.
    pub r2: f64,
}

/// Fits `y = slope·x + intercept` to `points` by ordinary least squares.
///
/// Degenerate inputs fit flat lines instead of failing:
/// - fewer than two points → slope `0`, intercept at the single point's y
///   (or `0`), `r2 = 0`;
/// - all points sharing one x → slope `0`, intercept at the mean y, `r2 = 0`;
/// - all y equal (zero total variance) → `r2 = 1`: the fit is exact.
pub fn linear_regression(points: &[Point]) -> RegressionResult {
    if points.len() < 2 {
        return RegressionResult {
            slope: 0.0,
            intercept: points.first().map_or(0.0, |p| p.y),
            r2: 0.0,
        };
    }

    let n = points.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for p in points {
        sum_x += p.x;
        sum_y += p.y;
        sum_xy += p.x * p.y;
        sum_xx += p.x * p.x;
    }

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 || !denominator.is_finite() {
        return RegressionResult {
            slope: 0.0,
            intercept: sum_y / n,
            r2: 0.0,
        };
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let mean_y = sum_y / n;
    let mut ss_total = 0.0;
    let mut ss_residual = 0.0;
    for p in points {
        let predicted = slope * p.x + intercept;
        ss_total += (p.y - mean_y) * (p.y - mean_y);
        ss_residual += (p.y - predicted) * (p.y - predicted);
    }
    let r2 = if ss_total == 0.0 {
        1.0
    } else {
        1.0 - ss_residual / ss_total
    };

    RegressionResult {
        slope,
        intercept,
        r2,
    }
}

impl RegressionResult {
    /// Evaluates the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Builds the overlay line across `x_domain`, mapped through the chart's
    /// scales into pixel space.
    pub fn overlay_path(
        &self,
        x_domain: Domain,
        x_scale: &ScaleLinear,
        y_scale: &ScaleLinear,
    ) -> PathData {
        let mut path = PathData::new();
        path.move_to((
            x_scale.map(x_domain.min),
            y_scale.map(self.predict(x_domain.min)),
        ));
        path.line_to((
            x_scale.map(x_domain.max),
            y_scale.map(self.predict(x_domain.max)),
        ));
        path
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    fn pts(pairs: &[(f64, f64)]) -> Vec<Point> {
        pairs.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn collinear_points_fit_exactly() {
        let fit = linear_regression(&pts(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]));
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.r2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn noisy_points_fit_between_zero_and_one_r2() {
        let fit = linear_regression(&pts(&[(0.0, 0.0), (1.0, 2.5), (2.0, 3.5), (3.0, 6.5)]));
        assert!(fit.slope > 0.0);
        assert!(fit.r2 > 0.0 && fit.r2 < 1.0);
    }

    #[test]
    fn fewer_than_two_points_fit_a_flat_line() {
        let empty = linear_regression(&[]);
        assert_eq!(empty.slope, 0.0);
        assert_eq!(empty.intercept, 0.0);
        assert_eq!(empty.r2, 0.0);

        let single = linear_regression(&pts(&[(4.0, 9.0)]));
        assert_eq!(single.slope, 0.0);
        assert_eq!(single.intercept, 9.0);
        assert_eq!(single.r2, 0.0);
    }

    #[test]
    fn shared_x_fits_the_mean() {
        let fit = linear_regression(&pts(&[(2.0, 1.0), (2.0, 3.0), (2.0, 8.0)]));
        assert_eq!(fit.slope, 0.0);
        assert!((fit.intercept - 4.0).abs() < 1e-12);
        assert_eq!(fit.r2, 0.0);
    }

    #[test]
    fn constant_y_is_a_perfect_flat_fit() {
        let fit = linear_regression(&pts(&[(0.0, 5.0), (1.0, 5.0), (2.0, 5.0)]));
        assert!(fit.slope.abs() < 1e-12);
        assert!((fit.intercept - 5.0).abs() < 1e-12);
        assert_eq!(fit.r2, 1.0);
    }

    #[test]
    fn overlay_path_spans_the_domain_in_pixel_space() {
        let fit = RegressionResult {
            slope: 1.0,
            intercept: 0.0,
            r2: 1.0,
        };
        let x_domain = Domain::new(0.0, 10.0);
        let x_scale = ScaleLinear::new(x_domain, (0.0, 100.0));
        let y_scale = ScaleLinear::new(Domain::new(0.0, 10.0), (100.0, 0.0));
        let d = fit.overlay_path(x_domain, &x_scale, &y_scale).into_string();
        assert_eq!(d, "M 0 100 L 100 0");
    }
}
