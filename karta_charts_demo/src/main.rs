// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart geometry demos for `karta_charts`.

mod html;
mod svg;

use kurbo::{Point, Rect};
use peniko::Color;
use peniko::color::palette::css;

use karta_charts::{
    AxisSpec, Domain, GridShape, Orientation, PieKind, StackLayoutSpec, TextAnchor, TextBaseline,
    Zone, axis_bounds, axis_point, bubble_radii, describe_semicircle, dial_track, grid_ring_path,
    label_anchor, linear_regression, pie_slices, polar_to_cartesian, polygon_path, project,
    radar_points, value_angle, zone_arcs,
};
use karta_data::{Dataset, Diagnostics, Record, coerce_values, format_number};

use crate::html::HtmlSection;
use crate::svg::SvgDoc;

const PALETTE: [Color; 8] = [
    css::CORNFLOWER_BLUE,
    css::ORANGE,
    css::MEDIUM_SEA_GREEN,
    css::CRIMSON,
    css::GOLDENROD,
    css::SLATE_BLUE,
    css::DARK_CYAN,
    css::HOT_PINK,
];

const GRID: Color = css::LIGHT_GRAY;

fn main() {
    let sections = vec![
        bar_demo(),
        stacked_bar_demo(),
        horizontal_stack_demo(),
        line_demo(),
        scatter_demo(),
        pie_demo(),
        donut_demo(),
        radar_demo(),
        gauge_demo(),
    ];

    let report = html::render_report("karta charts demo", &sections);
    std::fs::write("karta_charts_demo.html", report).expect("write karta_charts_demo.html");
    println!("wrote karta_charts_demo.html");
}

fn anchor_name(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn baseline_name(baseline: TextBaseline) -> &'static str {
    match baseline {
        TextBaseline::Hanging => "hanging",
        TextBaseline::Middle => "middle",
        TextBaseline::Auto => "auto",
    }
}

fn bar_demo() -> HtmlSection {
    // Monthly revenue, partly as messy currency strings: coercion cleans
    // them up and reports nothing for these.
    let data = Dataset::from_records(vec![
        Record::new().with_field("month", "Jan").with_field("revenue", "$1,200"),
        Record::new().with_field("month", "Feb").with_field("revenue", 1850.0),
        Record::new().with_field("month", "Mar").with_field("revenue", "$2,400"),
        Record::new().with_field("month", "Apr").with_field("revenue", 900.0),
    ]);
    let plot = Rect::new(40.0, 10.0, 300.0, 160.0);
    let mut diags = Diagnostics::new();

    let layout = StackLayoutSpec::new(["revenue"], plot).layout(&data, &mut diags);

    let mut doc = SvgDoc::new(320.0, 190.0);
    for (record, bar) in data.iter().zip(&layout) {
        for segment in bar {
            doc.rect(segment.rect(), PALETTE[0]);
        }
        if let (Some(label), Some(segment)) = (record.field("month").as_text(), bar.first()) {
            let center = Point::new(segment.x + segment.width * 0.5, plot.y1 + 4.0);
            doc.text(center, 10.0, "middle", "hanging", label);
        }
    }
    assert!(diags.is_empty(), "demo data coerces cleanly: {diags:?}");

    HtmlSection {
        title: "Bar".into(),
        svg: doc.finish(),
    }
}

fn stacked_bar_demo() -> HtmlSection {
    // Signed stacks: income above the baseline, costs below.
    let data = Dataset::from_records(vec![
        Record::new()
            .with_field("q", "Q1")
            .with_field("product", 40.0)
            .with_field("services", 25.0)
            .with_field("costs", -30.0),
        Record::new()
            .with_field("q", "Q2")
            .with_field("product", 55.0)
            .with_field("services", 30.0)
            .with_field("costs", -45.0),
        Record::new()
            .with_field("q", "Q3")
            .with_field("product", 35.0)
            .with_field("services", 20.0)
            .with_field("costs", -80.0),
    ]);
    let plot = Rect::new(40.0, 10.0, 300.0, 170.0);
    let mut diags = Diagnostics::new();

    let layout = StackLayoutSpec::new(["product", "services", "costs"], plot)
        .layout(&data, &mut diags);

    let mut doc = SvgDoc::new(320.0, 200.0);
    for bar in &layout {
        for segment in bar {
            doc.rect(segment.rect(), PALETTE[segment.stack_index % PALETTE.len()]);
        }
    }

    HtmlSection {
        title: "Stacked bar (signed, global scale)".into(),
        svg: doc.finish(),
    }
}

fn horizontal_stack_demo() -> HtmlSection {
    let data = Dataset::from_records(vec![
        Record::new().with_field("a", 10.0).with_field("b", 14.0),
        Record::new().with_field("a", 22.0).with_field("b", 6.0),
        Record::new().with_field("a", 16.0).with_field("b", 16.0),
    ]);
    let plot = Rect::new(10.0, 10.0, 300.0, 130.0);
    let mut diags = Diagnostics::new();

    let layout = StackLayoutSpec::new(["a", "b"], plot)
        .with_orientation(Orientation::Horizontal)
        .layout(&data, &mut diags);

    let mut doc = SvgDoc::new(320.0, 150.0);
    for bar in &layout {
        for segment in bar {
            doc.rect(segment.rect(), PALETTE[segment.stack_index % PALETTE.len()]);
        }
    }

    HtmlSection {
        title: "Stacked bar (horizontal)".into(),
        svg: doc.finish(),
    }
}

fn line_demo() -> HtmlSection {
    let data: Dataset = (0..10)
        .map(|day| {
            let wave = f64::from(day);
            Record::new()
                .with_field("day", f64::from(day))
                .with_field("value", 40.0 + 30.0 * (wave * 0.7).sin() + 4.0 * wave)
        })
        .collect();
    let plot = Rect::new(40.0, 10.0, 300.0, 160.0);
    let mut diags = Diagnostics::new();

    let x_axis = AxisSpec::new("day", "Day");
    let y_axis = AxisSpec::new("value", "Value");
    let projection = project(&data, &x_axis, &y_axis, plot, &mut diags);

    let mut doc = SvgDoc::new(320.0, 180.0);
    for tick in projection.y_scale.ticks(5) {
        let y = projection.y_scale.map(tick);
        let rule = polygon_path(&[Point::new(plot.x0, y), Point::new(plot.x1, y)]);
        doc.path(rule.as_str(), None, Some((GRID, 1.0)));
        doc.text(
            Point::new(plot.x0 - 6.0, y),
            9.0,
            "end",
            "middle",
            &format_number(tick),
        );
    }
    let line = karta_charts::polyline_path(&projection.points);
    doc.path(line.as_str(), None, Some((PALETTE[0], 2.0)));

    HtmlSection {
        title: "Line".into(),
        svg: doc.finish(),
    }
}

fn scatter_demo() -> HtmlSection {
    let raw = [
        (1.0, 12.0, 4.0),
        (2.0, 18.0, 9.0),
        (3.0, 21.0, 2.0),
        (4.0, 31.0, 12.0),
        (5.0, 33.0, 5.0),
        (6.0, 45.0, 8.0),
        (7.0, 47.0, 15.0),
    ];
    let data: Dataset = raw
        .iter()
        .map(|&(x, y, size)| {
            Record::new()
                .with_field("x", x)
                .with_field("y", y)
                .with_field("size", size)
        })
        .collect();
    let plot = Rect::new(40.0, 10.0, 300.0, 160.0);
    let mut diags = Diagnostics::new();

    let x_axis = AxisSpec::new("x", "X");
    let y_axis = AxisSpec::new("y", "Y");
    let projection = project(&data, &x_axis, &y_axis, plot, &mut diags);
    let radii = bubble_radii(&data, "size", 3.0, 9.0, &mut diags);

    let mut doc = SvgDoc::new(320.0, 180.0);
    for (p, r) in projection.points.iter().zip(&radii) {
        doc.circle(Point::new(p.x, p.y), *r, PALETTE[0].with_alpha(0.6));
    }

    // The trend line runs over data values, then maps through the same
    // scales as the points.
    let xs = coerce_values(&data, "x", &mut diags);
    let ys = coerce_values(&data, "y", &mut diags);
    let samples: Vec<Point> = xs
        .iter()
        .zip(&ys)
        .map(|(&x, &y)| Point::new(x, y))
        .collect();
    let fit = linear_regression(&samples);
    let overlay = fit.overlay_path(
        projection.x_scale.domain(),
        &projection.x_scale,
        &projection.y_scale,
    );
    doc.path(overlay.as_str(), None, Some((css::CRIMSON, 1.5)));

    HtmlSection {
        title: format!("Scatter/bubble with regression (r² = {:.3})", fit.r2),
        svg: doc.finish(),
    }
}

fn pie_demo() -> HtmlSection {
    let values = [35.0, 25.0, 20.0, 12.0, 8.0];
    let labels = ["search", "direct", "social", "mail", "other"];
    let center = Point::new(110.0, 100.0);

    let slices = pie_slices(&values, PieKind::Full).expect("demo values are non-negative");

    let mut doc = SvgDoc::new(340.0, 200.0);
    for slice in &slices {
        let d = slice.path(center, 80.0, 0.0);
        doc.path(d.as_str(), Some(PALETTE[slice.index % PALETTE.len()]), None);

        let mid = (slice.start_angle + slice.end_angle) * 0.5;
        let at = polar_to_cartesian(center, 95.0, mid);
        doc.text(at, 9.0, "middle", "middle", labels[slice.index]);
    }

    // Semicircle variant, sharing the same proportions.
    let semi_center = Point::new(280.0, 140.0);
    let semi = pie_slices(&values, PieKind::Semi).expect("demo values are non-negative");
    for slice in &semi {
        let d = slice.path(semi_center, 50.0, 0.0);
        doc.path(d.as_str(), Some(PALETTE[slice.index % PALETTE.len()]), None);
    }

    HtmlSection {
        title: "Pie (full and semicircle)".into(),
        svg: doc.finish(),
    }
}

fn donut_demo() -> HtmlSection {
    let center = Point::new(100.0, 100.0);
    let slices = pie_slices(&[45.0, 30.0, 25.0], PieKind::Full).expect("non-negative");

    let mut doc = SvgDoc::new(340.0, 200.0);
    for slice in &slices {
        let d = slice.path(center, 80.0, 45.0);
        doc.path(d.as_str(), Some(PALETTE[slice.index % PALETTE.len()]), None);
    }

    // A single-value donut exercises the full-circle arc split.
    let full_center = Point::new(260.0, 100.0);
    let full = pie_slices(&[1.0], PieKind::Full).expect("non-negative");
    let d = full[0].path(full_center, 50.0, 30.0);
    doc.path(d.as_str(), Some(PALETTE[2]), None);

    HtmlSection {
        title: "Donut (with full-circle special case)".into(),
        svg: doc.finish(),
    }
}

fn radar_demo() -> HtmlSection {
    let data = Dataset::from_records(vec![
        Record::new()
            .with_field("speed", 70.0)
            .with_field("power", 90.0)
            .with_field("range", 40.0)
            .with_field("agility", 65.0)
            .with_field("cost", 30.0),
        Record::new()
            .with_field("speed", 50.0)
            .with_field("power", 60.0)
            .with_field("range", 85.0)
            .with_field("agility", 45.0)
            .with_field("cost", 75.0),
    ]);
    let axes: Vec<AxisSpec> = ["speed", "power", "range", "agility", "cost"]
        .iter()
        .map(|key| AxisSpec::new(*key, *key).with_min(0.0).with_max(100.0))
        .collect();
    let center = Point::new(160.0, 110.0);
    let radius = 80.0;
    let mut diags = Diagnostics::new();

    let domains: Vec<Domain> = axes
        .iter()
        .map(|axis| {
            let values = coerce_values(&data, &axis.key, &mut diags);
            axis_bounds(axis, &values)
        })
        .collect();

    let mut doc = SvgDoc::new(320.0, 220.0);

    // Concentric grid rings and spokes.
    for ring in 1..=4 {
        let r = radius * f64::from(ring) / 4.0;
        let d = grid_ring_path(center, r, axes.len(), GridShape::Polygon);
        doc.path(d.as_str(), None, Some((GRID, 1.0)));
    }
    for (i, axis) in axes.iter().enumerate() {
        let spoke = polygon_path(&[center, axis_point(center, radius, i, axes.len())]);
        doc.path(spoke.as_str(), None, Some((GRID, 1.0)));

        let angle = karta_charts::axis_angle(i, axes.len()) + karta_charts::RADAR_ANGLE_OFFSET;
        let slot = label_anchor(center, radius, 10.0, angle);
        doc.text(
            slot.pos,
            9.0,
            anchor_name(slot.anchor),
            baseline_name(slot.baseline),
            &axis.label,
        );
    }

    for (series_index, record) in data.iter().enumerate() {
        let points = radar_points(record, &axes, &domains, center, radius, &mut diags);
        let d = polygon_path(&points);
        let color = PALETTE[series_index % PALETTE.len()];
        doc.path(d.as_str(), Some(color.with_alpha(0.25)), Some((color, 1.5)));
    }

    HtmlSection {
        title: "Radar".into(),
        svg: doc.finish(),
    }
}

fn gauge_demo() -> HtmlSection {
    let domain = Domain::new(0.0, 100.0);
    let zones = [
        Zone::new(0.0, 60.0, css::MEDIUM_SEA_GREEN).with_label("ok"),
        Zone::new(60.0, 85.0, css::GOLDENROD).with_label("warn"),
        Zone::new(85.0, 100.0, css::CRIMSON).with_label("hot"),
    ];
    let center = Point::new(110.0, 110.0);
    let value = 72.0;

    let mut doc = SvgDoc::new(340.0, 210.0);
    doc.path(
        dial_track(center, 90.0, 72.0).as_str(),
        Some(css::LIGHT_GRAY.with_alpha(0.5)),
        None,
    );
    for arc in zone_arcs(&zones, domain) {
        doc.path(arc.path(center, 90.0, 72.0).as_str(), Some(arc.color), None);
    }

    // Needle.
    let tip = polar_to_cartesian(center, 62.0, value_angle(value, domain));
    let needle = polygon_path(&[center, tip]);
    doc.path(needle.as_str(), None, Some((css::BLACK, 2.0)));
    doc.circle(center, 4.0, css::BLACK);
    doc.text(
        Point::new(center.x, center.y + 28.0),
        12.0,
        "middle",
        "middle",
        &format_number(value),
    );

    // The semicircle track variant next to the dial.
    let semi = describe_semicircle(Point::new(280.0, 140.0), 50.0, 38.0);
    doc.path(semi.as_str(), Some(css::LIGHT_GRAY), None);

    HtmlSection {
        title: "Gauge".into(),
        svg: doc.finish(),
    }
}
