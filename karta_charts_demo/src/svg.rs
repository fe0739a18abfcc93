// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `karta_charts_demo`.

use std::fmt::Write as _;

use kurbo::{Point, Rect};
use peniko::Color;

/// A growing SVG document with a fixed viewport.
#[derive(Debug)]
pub(crate) struct SvgDoc {
    width: f64,
    height: f64,
    body: String,
}

impl SvgDoc {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub(crate) fn path(&mut self, d: &str, fill: Option<Color>, stroke: Option<(Color, f64)>) {
        if d.is_empty() {
            return;
        }
        let _ = write!(self.body, r#"<path d="{d}""#);
        match fill {
            Some(color) => self.paint_attr("fill", color),
            None => self.body.push_str(r#" fill="none""#),
        }
        if let Some((color, width)) = stroke {
            self.paint_attr("stroke", color);
            let _ = write!(self.body, r#" stroke-width="{width}""#);
        }
        self.body.push_str("/>\n");
    }

    pub(crate) fn rect(&mut self, r: Rect, fill: Color) {
        let _ = write!(
            self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            r.x0,
            r.y0,
            r.width(),
            r.height()
        );
        self.paint_attr("fill", fill);
        self.body.push_str("/>\n");
    }

    pub(crate) fn circle(&mut self, center: Point, radius: f64, fill: Color) {
        let _ = write!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}""#,
            center.x, center.y, radius
        );
        self.paint_attr("fill", fill);
        self.body.push_str("/>\n");
    }

    pub(crate) fn text(
        &mut self,
        pos: Point,
        font_size: f64,
        anchor: &str,
        baseline: &str,
        content: &str,
    ) {
        let _ = write!(
            self.body,
            r##"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}" dominant-baseline="{baseline}" fill="#333">{}</text>"##,
            pos.x,
            pos.y,
            font_size,
            escape_xml(content)
        );
        self.body.push('\n');
    }

    pub(crate) fn finish(self) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
                r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
                "\n{body}</svg>\n"
            ),
            w = self.width,
            h = self.height,
            body = self.body
        )
    }

    fn paint_attr(&mut self, name: &str, color: Color) {
        let rgba = color.to_rgba8();
        let _ = write!(
            self.body,
            r##" {name}="#{:02x}{:02x}{:02x}""##,
            rgba.r, rgba.g, rgba.b
        );
        if rgba.a != 255 {
            let _ = write!(
                self.body,
                r#" {name}-opacity="{}""#,
                f64::from(rgba.a) / 255.0
            );
        }
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
