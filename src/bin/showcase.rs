//! Grouped bars showcase.
//!
//! Renders the demonstration dataset (quarterly leads by channel) as a
//! grouped bar chart. Pass `--save-png` to export
//! `grouped_bars_showcase.png` at 1376x832 (8.6in x 5.2in at 160 dpi).

use barviz::dataset::{showcase_dataset, DEFAULT_SEED};
use barviz::output::PngEncoder;
use barviz::plots::GroupedBarChart;

/// Fixed export path for README previews.
const OUTPUT_PATH: &str = "grouped_bars_showcase.png";

/// 8.6in x 5.2in at 160 dpi.
const WIDTH: u32 = 1376;
const HEIGHT: u32 = 832;

fn main() -> barviz::Result<()> {
    let save_png = std::env::args().any(|a| a == "--save-png");

    let (categories, series) = showcase_dataset(DEFAULT_SEED);

    let mut chart = GroupedBarChart::new()
        .categories(categories)
        .bar_width(0.22)
        .gap(0.12)
        .dimensions(WIDTH, HEIGHT)
        .title("Grouped Bars Showcase - Quarterly Leads by Channel")
        .x_label("Quarter")
        .y_label("Leads");
    for s in &series {
        chart = chart.add_series(s.clone());
    }
    let chart = chart.build()?;

    let fb = chart.to_framebuffer()?;

    for s in &series {
        let total: f32 = s.values().iter().sum();
        println!("{:<10} total {:.0} leads", s.name, total);
    }

    if save_png {
        PngEncoder::write_to_file(&fb, OUTPUT_PATH)?;
        println!("Saved {OUTPUT_PATH} ({WIDTH}x{HEIGHT})");
    }

    Ok(())
}
