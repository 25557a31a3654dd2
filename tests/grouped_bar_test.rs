//! Integration tests for the grouped bar layout and chart pipeline.

#![allow(clippy::unwrap_used)]

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

use barviz::color::Rgba;
use barviz::layout::{y_upper_limit, GroupedLayout};
use barviz::output::PngEncoder;
use barviz::plots::{GroupedBarChart, Series};
use barviz::render::Surface;
use barviz::Error;

// ============================================================================
// Recording surface: captures draw calls without any pixels
// ============================================================================

#[derive(Debug, PartialEq)]
#[allow(dead_code)]
enum Op {
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Rgba,
    },
    Line,
    Text(String),
}

#[derive(Default)]
struct RecordingSurface {
    ops: Vec<Op>,
}

impl RecordingSurface {
    fn fill_rects(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::FillRect { .. }))
            .count()
    }

    fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba) {
        self.ops.push(Op::FillRect { x, y, w, h, color });
    }

    fn draw_line(&mut self, _x0: i32, _y0: i32, _x1: i32, _y1: i32, _color: Rgba) {
        self.ops.push(Op::Line);
    }

    fn draw_text(&mut self, _x: i32, _y: i32, text: &str, _color: Rgba) {
        self.ops.push(Op::Text(text.to_string()));
    }
}

fn showcase_chart() -> GroupedBarChart {
    GroupedBarChart::new()
        .categories(["Q1", "Q2", "Q3", "Q4"])
        .add_series(Series::new("Web Ads", &[220.0, 245.0, 270.0, 310.0]))
        .add_series(Series::new("Email", &[150.0, 165.0, 160.0, 175.0]))
        .add_series(Series::new("Referrals", &[90.0, 110.0, 140.0, 155.0]))
        .bar_width(0.22)
        .gap(0.12)
}

// ============================================================================
// Layout properties
// ============================================================================

#[test]
fn group_centers_are_symmetric_around_ticks() {
    let layout = GroupedLayout::new(0.22, 0.12);
    let bars = layout.positions(4, 3);

    for i in 0..4 {
        let centers: Vec<f32> = bars
            .iter()
            .filter(|b| b.category == i)
            .map(|b| b.center)
            .collect();
        let mean = centers.iter().sum::<f32>() / centers.len() as f32;
        assert_abs_diff_eq!(mean, i as f32, epsilon = 1e-5);
    }
}

#[test]
fn single_series_sits_exactly_on_tick() {
    let layout = GroupedLayout::new(0.4, 0.1);
    for bar in layout.positions(5, 1) {
        assert_relative_eq!(bar.center, bar.category as f32);
    }
}

#[test]
fn adjacent_bars_spaced_by_width_plus_gap() {
    let layout = GroupedLayout::new(0.22, 0.12);
    let bars = layout.positions(1, 3);
    assert_abs_diff_eq!(bars[1].center - bars[0].center, 0.34, epsilon = 1e-6);
    assert_abs_diff_eq!(bars[2].center - bars[1].center, 0.34, epsilon = 1e-6);
}

#[test]
fn showcase_scenario_layout() {
    // 4 categories, 3 series, w=0.22, g=0.12
    let layout = GroupedLayout::new(0.22, 0.12);
    let bars = layout.positions(4, 3);

    assert_eq!(bars.len(), 12);
    assert_abs_diff_eq!(layout.group_width(3), 0.9, epsilon = 1e-6);
    assert!(layout.group_width(3) < 1.0, "groups must not overlap");

    // Center offsets per series relative to each tick
    for bar in &bars {
        let expected_offset = match bar.series {
            0 => -0.34,
            1 => 0.0,
            2 => 0.34,
            _ => unreachable!(),
        };
        assert_abs_diff_eq!(
            bar.center - bar.category as f32,
            expected_offset,
            epsilon = 1e-5
        );
    }
}

#[test]
fn y_limit_is_1_25_times_max() {
    let values = [220.0f32, 245.0, 270.0, 310.0, 150.0, 90.0];
    assert_relative_eq!(y_upper_limit(&values), 387.5);
}

#[test]
fn y_limit_tracks_a_new_maximum_proportionally() {
    let mut values = vec![10.0f32, 20.0, 30.0];
    let before = y_upper_limit(&values);
    values[0] = 60.0;
    let after = y_upper_limit(&values);
    assert_relative_eq!(after / before, 2.0);
}

proptest! {
    #[test]
    fn prop_group_mean_equals_tick(
        m in 1usize..6,
        w in 0.01f32..0.15,
        g in 0.0f32..0.05,
        n in 1usize..8,
    ) {
        let layout = GroupedLayout::new(w, g);
        prop_assume!(layout.group_width(m) <= 1.0);

        let bars = layout.positions(n, m);
        for i in 0..n {
            let centers: Vec<f32> = bars
                .iter()
                .filter(|b| b.category == i)
                .map(|b| b.center)
                .collect();
            let mean = centers.iter().sum::<f32>() / m as f32;
            prop_assert!((mean - i as f32).abs() < 1e-4);
        }
    }

    #[test]
    fn prop_bars_within_group_never_overlap(
        m in 2usize..6,
        w in 0.01f32..0.15,
        g in 0.001f32..0.05,
    ) {
        let layout = GroupedLayout::new(w, g);
        let bars = layout.positions(1, m);
        for pair in bars.windows(2) {
            // Center spacing w+g >= w means edges cannot cross
            prop_assert!(pair[1].center - pair[0].center >= w - 1e-6);
        }
    }
}

// ============================================================================
// Chart validation and rendering
// ============================================================================

#[test]
fn mismatched_series_lengths_error_before_any_drawing() {
    let result = GroupedBarChart::new()
        .categories(["Q1", "Q2", "Q3", "Q4"])
        .add_series(Series::new("long", &[1.0, 2.0, 3.0, 4.0]))
        .add_series(Series::new("short", &[1.0, 2.0, 3.0]))
        .build();

    assert!(matches!(result, Err(Error::SeriesLengthMismatch { .. })));
}

#[test]
fn render_revalidates_shape_when_build_was_skipped() {
    // render() is public; a mismatched chart that never went through
    // build() must error instead of indexing out of bounds
    let chart = GroupedBarChart::new()
        .categories(["Q1", "Q2", "Q3", "Q4"])
        .add_series(Series::new("short", &[1.0, 2.0]));

    let mut surface = RecordingSurface::default();
    let result = chart.render(&mut surface);

    assert!(matches!(
        result,
        Err(Error::SeriesLengthMismatch {
            expected: 4,
            actual: 2,
            ..
        })
    ));
    assert!(surface.ops.is_empty(), "nothing may be drawn on error");
}

#[test]
fn no_categories_renders_zero_bars_without_error() {
    let chart = GroupedBarChart::new()
        .add_series(Series::new("a", &[]))
        .add_series(Series::new("b", &[]))
        .build()
        .unwrap();

    let mut surface = RecordingSurface::default();
    chart.render(&mut surface).unwrap();

    // Only the two legend swatches; no bar rectangles
    assert_eq!(surface.fill_rects(), 2);
}

#[test]
fn showcase_chart_draws_all_bars_and_labels() {
    let chart = showcase_chart().build().unwrap();

    let mut surface = RecordingSurface::default();
    chart.render(&mut surface).unwrap();

    // 12 bars + 3 legend swatches
    assert_eq!(surface.fill_rects(), 15);

    let texts = surface.texts();
    // One value label per bar, rounded to the nearest integer
    assert!(texts.contains(&"Q1"));
    assert!(texts.contains(&"Web Ads"));
    let value_labels = texts
        .iter()
        .filter(|t| t.chars().all(|c| c.is_ascii_digit()) && t.len() >= 2)
        .count();
    assert!(value_labels >= 12);
}

#[test]
fn value_labels_can_be_disabled() {
    // Grid off too, so the only numeric text left would be value labels
    let chart = showcase_chart()
        .value_labels(false)
        .grid(false)
        .build()
        .unwrap();

    let mut surface = RecordingSurface::default();
    chart.render(&mut surface).unwrap();

    let has_value_label = surface
        .texts()
        .iter()
        .any(|t| t.chars().all(|c| c.is_ascii_digit()) && t.len() >= 3);
    assert!(!has_value_label);
}

#[test]
fn render_to_framebuffer_and_png() {
    let chart = showcase_chart()
        .dimensions(430, 260)
        .title("Quarterly Leads")
        .x_label("Quarter")
        .y_label("Leads")
        .build()
        .unwrap();

    let fb = chart.to_framebuffer().unwrap();
    assert_eq!(fb.width(), 430);
    assert_eq!(fb.height(), 260);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("showcase.png");
    PngEncoder::write_to_file(&fb, &path).unwrap();
    assert!(path.exists());
}

#[test]
fn each_series_gets_its_palette_color() {
    let chart = GroupedBarChart::new()
        .categories(["A"])
        .add_series(Series::new("one", &[5.0]))
        .add_series(Series::new("two", &[3.0]))
        .dimensions(200, 150)
        .build()
        .unwrap();

    let fb = chart.to_framebuffer().unwrap();
    let blue = Rgba::rgb(0x1e, 0x88, 0xe5);
    let green = Rgba::rgb(0x43, 0xa0, 0x47);

    let mut seen_blue = false;
    let mut seen_green = false;
    for y in 0..150 {
        for x in 0..200 {
            match fb.get_pixel(x, y) {
                Some(c) if c == blue => seen_blue = true,
                Some(c) if c == green => seen_green = true,
                _ => {}
            }
        }
    }
    assert!(seen_blue && seen_green);
}
