// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The path mini-language writer.
//!
//! Geometry leaves the engine as strings in the standard path mini-language:
//! `M x y` (moveto), `L x y` (lineto),
//! `A rx ry rot large-arc sweep x y` (arcto) and `Z` (closepath). All path
//! strings in this crate are produced through [`PathData`] so command
//! formatting stays uniform and comparable.

extern crate alloc;

use alloc::string::String;
use core::fmt::Write as _;

use kurbo::Point;

/// An accumulating path-string builder.
///
/// An empty `PathData` renders as the empty string — the explicit
/// "nothing to draw" value for degenerate geometry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathData {
    d: String,
}

impl PathData {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a moveto command.
    pub fn move_to(&mut self, p: impl Into<Point>) {
        let p = p.into();
        self.sep();
        write!(self.d, "M {} {}", p.x, p.y).expect("writing to a String cannot fail");
    }

    /// Appends a lineto command.
    pub fn line_to(&mut self, p: impl Into<Point>) {
        let p = p.into();
        self.sep();
        write!(self.d, "L {} {}", p.x, p.y).expect("writing to a String cannot fail");
    }

    /// Appends an elliptical-arc command.
    ///
    /// `large_arc` selects the longer of the two candidate arcs between the
    /// current point and `end`; `sweep` selects the positive-angle direction.
    pub fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: impl Into<Point>,
    ) {
        let end = end.into();
        self.sep();
        write!(
            self.d,
            "A {} {} {} {} {} {} {}",
            rx,
            ry,
            x_rotation,
            u8::from(large_arc),
            u8::from(sweep),
            end.x,
            end.y
        )
        .expect("writing to a String cannot fail");
    }

    /// Appends a closepath command.
    pub fn close(&mut self) {
        self.sep();
        self.d.push('Z');
    }

    /// Returns whether no commands have been appended.
    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }

    /// Returns the accumulated path string.
    pub fn as_str(&self) -> &str {
        &self.d
    }

    /// Consumes the builder, returning the path string.
    pub fn into_string(self) -> String {
        self.d
    }

    fn sep(&mut self) {
        if !self.d.is_empty() {
            self.d.push(' ');
        }
    }
}

impl core::fmt::Display for PathData {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.d)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn commands_render_space_separated() {
        let mut p = PathData::new();
        p.move_to((10.0, 20.0));
        p.line_to((30.0, 40.0));
        p.close();
        assert_eq!(p.as_str(), "M 10 20 L 30 40 Z");
    }

    #[test]
    fn arc_renders_flags_as_integers() {
        let mut p = PathData::new();
        p.move_to((0.0, 0.0));
        p.arc_to(5.0, 5.0, 0.0, true, false, (10.0, 0.0));
        assert_eq!(p.as_str(), "M 0 0 A 5 5 0 1 0 10 0");
    }

    #[test]
    fn empty_path_renders_as_empty_string() {
        let p = PathData::new();
        assert!(p.is_empty());
        assert_eq!(p.as_str(), "");
    }
}
