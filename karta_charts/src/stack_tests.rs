// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Rect;

use karta_data::{Dataset, DiagnosticCode, Diagnostics, Record};

use crate::stack::{Orientation, StackLayoutSpec, StackSegment};

const PLOT: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

fn spec(keys: &[&str]) -> StackLayoutSpec {
    StackLayoutSpec::new(keys.iter().copied(), PLOT)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn global_scale_shares_one_baseline_across_bars() {
    // Bars {a: 10, b: -5} and {a: 3, b: -20}: the most negative sum (-20)
    // owns the global scale, so bar 2's negative segment reaches the chart's
    // negative extreme while bar 1's stays near the baseline.
    let bars = vec![vec![10.0, -5.0], vec![3.0, -20.0]];
    let mut diags = Diagnostics::new();
    let layout = spec(&["a", "b"]).layout_values(&bars, &mut diags);
    assert!(diags.is_empty());
    assert_eq!(layout.len(), 2);

    // globalMaxAbs = 20, so the baseline sits at the top edge.
    let bar2_neg = &layout[1][1];
    assert!(close(bar2_neg.y, 0.0), "baseline at the top: {bar2_neg:?}");
    assert!(close(bar2_neg.height, 100.0), "reaches the bottom edge");

    let bar1_neg = &layout[0][1];
    assert!(close(bar1_neg.y, 0.0), "hangs from the same baseline");
    assert!(close(bar1_neg.height, 25.0), "5/20 of the axis");
}

#[test]
fn signed_contributions_reconstruct_bar_totals() {
    let bars = vec![vec![10.0, -5.0], vec![3.0, -20.0], vec![0.0, 0.0]];
    let mut diags = Diagnostics::new();
    let layout = spec(&["a", "b"]).layout_values(&bars, &mut diags);

    let global_max_abs = 20.0;
    let baseline_y = 0.0; // plot.y1 - axis_length * 20/20

    for (values, segments) in bars.iter().zip(&layout) {
        let expected: f64 = values.iter().sum();
        let reconstructed: f64 = segments
            .iter()
            .map(|s| {
                // A segment sits above the baseline iff its bottom edge does.
                let signed = if s.y + s.height <= baseline_y + 1e-9 {
                    s.height
                } else {
                    -s.height
                };
                signed / 100.0 * global_max_abs
            })
            .sum();
        assert!(
            close(reconstructed, expected),
            "reconstructed {reconstructed} != {expected}"
        );
    }
}

#[test]
fn all_positive_bars_grow_from_the_bottom() {
    let bars = vec![vec![3.0], vec![10.0], vec![5.0]];
    let mut diags = Diagnostics::new();
    let layout = spec(&["v"]).layout_values(&bars, &mut diags);

    let heights: Vec<f64> = layout.iter().map(|bar| bar[0].height).collect();
    assert!(close(heights[0], 30.0));
    assert!(close(heights[1], 100.0));
    assert!(close(heights[2], 50.0));
    for bar in &layout {
        assert!(close(bar[0].y + bar[0].height, 100.0), "bottom-anchored");
    }
}

#[test]
fn segments_accumulate_in_ascending_stack_order() {
    let bars = vec![vec![2.0, 3.0, 5.0]];
    let mut diags = Diagnostics::new();
    let layout = spec(&["a", "b", "c"]).layout_values(&bars, &mut diags);
    let bar = &layout[0];

    assert_eq!(bar[0].stack_index, 0);
    assert_eq!(bar[2].key, "c");
    // Stack order runs outward: each later segment sits on top.
    assert!(close(bar[0].y, 80.0));
    assert!(close(bar[1].y, 50.0));
    assert!(close(bar[2].y, 0.0));
}

#[test]
fn all_zero_dataset_collapses_onto_the_baseline() {
    let bars = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
    let mut diags = Diagnostics::new();
    let layout = spec(&["a", "b"]).layout_values(&bars, &mut diags);
    for segment in layout.iter().flatten() {
        assert_eq!(segment.height, 0.0);
        assert!(close(segment.y, 100.0), "zero sits on the baseline");
    }
}

#[test]
fn bar_slots_use_eighty_percent_with_identical_gaps() {
    let bars = vec![vec![1.0], vec![2.0], vec![4.0], vec![8.0]];
    let mut diags = Diagnostics::new();
    let layout = spec(&["v"]).layout_values(&bars, &mut diags);

    let slot = 100.0 / 4.0;
    for (i, bar) in layout.iter().enumerate() {
        assert!(close(bar[0].width, slot * 0.8));
        assert!(close(bar[0].x, slot * i as f64 + slot * 0.1));
    }
}

#[test]
fn horizontal_layout_is_a_pure_transpose() {
    let bars = vec![vec![10.0, -5.0], vec![3.0, -20.0]];
    let mut diags = Diagnostics::new();
    let vertical = spec(&["a", "b"]).layout_values(&bars, &mut diags);
    let horizontal = spec(&["a", "b"])
        .with_orientation(Orientation::Horizontal)
        .layout_values(&bars, &mut diags);

    // The plot is square, so the transpose is exact: x ↔ (flipped) y.
    for (v_bar, h_bar) in vertical.iter().zip(&horizontal) {
        for (v, h) in v_bar.iter().zip(h_bar) {
            assert!(close(h.width, v.height), "{h:?} vs {v:?}");
            assert!(close(h.height, v.width));
            assert!(close(h.y, v.x));
            // Vertical growth runs up (y down-flipped); horizontal runs
            // right. Mirror the on-axis edge accordingly.
            assert!(close(h.x, 100.0 - (v.y + v.height)));
        }
    }
}

#[test]
fn non_finite_sum_aborts_the_whole_pass() {
    let bars = vec![vec![1.0, 2.0], vec![f64::INFINITY, 1.0]];
    let mut diags = Diagnostics::new();
    let layout = spec(&["a", "b"]).layout_values(&bars, &mut diags);
    assert!(layout.is_empty(), "no partial geometry may escape");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags.entries()[0].code, DiagnosticCode::NonFiniteStackSum);
    assert_eq!(diags.entries()[0].key, "bar 1");
}

#[test]
fn layout_coerces_record_fields_and_reports_failures() {
    let data = Dataset::from_records(vec![
        Record::new().with_field("a", "$1,200").with_field("b", 300.0),
        Record::new().with_field("a", 600.0).with_field("b", "n/a"),
    ]);
    let mut diags = Diagnostics::new();
    let layout = spec(&["a", "b"]).layout(&data, &mut diags);

    // "n/a" coerces to 0 with a diagnostic; the layout still completes.
    assert_eq!(layout.len(), 2);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags.entries()[0].code, DiagnosticCode::CoercionFailure);

    // globalMaxAbs = 1500: bar 1 fills the axis, bar 2 covers 600/1500.
    let bar1: f64 = layout[0].iter().map(|s| s.height).sum();
    let bar2: f64 = layout[1].iter().map(|s| s.height).sum();
    assert!(close(bar1, 100.0));
    assert!(close(bar2, 40.0));
}

#[test]
fn empty_inputs_produce_empty_layouts() {
    let mut diags = Diagnostics::new();
    assert!(spec(&["a"]).layout_values(&[], &mut diags).is_empty());
    assert!(
        spec(&[])
            .layout_values(&[vec![1.0]], &mut diags)
            .is_empty()
    );
    assert!(spec(&["a"]).layout(&Dataset::new(), &mut diags).is_empty());
}

#[test]
fn segment_rect_matches_its_fields() {
    let s = StackSegment {
        key: "a".into(),
        value: 1.0,
        x: 5.0,
        y: 10.0,
        width: 20.0,
        height: 30.0,
        stack_index: 0,
    };
    assert_eq!(s.rect(), Rect::new(5.0, 10.0, 25.0, 40.0));
}
