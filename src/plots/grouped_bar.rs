//! Grouped bar chart with per-bar value labels.
//!
//! Each category gets one group of bars, one bar per series, centered on
//! the category tick. Bars carry a numeric label just above their top and
//! series are distinguished by a cycling color palette and a legend row.

use crate::color::{Palette, Rgba};
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::layout::{y_upper_limit, GroupedLayout};
use crate::render::Surface;
use crate::scale::{LinearScale, Scale};
use crate::text::{text_width, CHAR_H};

/// Vertical offset between a bar top and its value label, in pixels.
const LABEL_OFFSET: u32 = 4;

/// A named ordered sequence of values, one per category.
#[derive(Debug, Clone)]
pub struct Series {
    /// Series name, shown in the legend.
    pub name: String,
    values: Vec<f32>,
}

impl Series {
    /// Create a new series from a name and its per-category values.
    #[must_use]
    pub fn new(name: impl Into<String>, values: &[f32]) -> Self {
        Self {
            name: name.into(),
            values: values.to_vec(),
        }
    }

    /// Get the values.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Get the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the maximum value.
    #[must_use]
    pub fn max(&self) -> Option<f32> {
        self.values.iter().copied().reduce(f32::max)
    }
}

/// Builder for grouped bar charts.
#[derive(Debug, Clone)]
pub struct GroupedBarChart {
    categories: Vec<String>,
    series: Vec<Series>,
    layout: GroupedLayout,
    palette: Palette,
    label_precision: usize,
    show_value_labels: bool,
    show_grid: bool,
    width: u32,
    height: u32,
    margin: u32,
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    background: Rgba,
    edge_color: Rgba,
}

impl Default for GroupedBarChart {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupedBarChart {
    /// Create a new grouped bar chart builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            series: Vec::new(),
            layout: GroupedLayout::default(),
            palette: Palette::default(),
            label_precision: 0,
            show_value_labels: true,
            show_grid: true,
            width: 800,
            height: 500,
            margin: 48,
            title: None,
            x_label: None,
            y_label: None,
            background: Rgba::WHITE,
            edge_color: Rgba::BLACK,
        }
    }

    /// Set the category labels (one tick per group, order significant).
    #[must_use]
    pub fn categories<S: Into<String>>(mut self, categories: impl IntoIterator<Item = S>) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Add a series.
    #[must_use]
    pub fn add_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Set the bar width in category units.
    #[must_use]
    pub fn bar_width(mut self, width: f32) -> Self {
        self.layout.bar_width = width;
        self
    }

    /// Set the gap between adjacent bars within a group, in category units.
    #[must_use]
    pub fn gap(mut self, gap: f32) -> Self {
        self.layout.gap = gap;
        self
    }

    /// Set the color palette cycled by series index.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the number of decimals in value labels (default 0).
    #[must_use]
    pub fn label_precision(mut self, decimals: usize) -> Self {
        self.label_precision = decimals;
        self
    }

    /// Enable or disable per-bar value labels.
    #[must_use]
    pub fn value_labels(mut self, show: bool) -> Self {
        self.show_value_labels = show;
        self
    }

    /// Enable or disable horizontal grid lines.
    #[must_use]
    pub fn grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    /// Set the output dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the margin around the plot area.
    #[must_use]
    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the chart title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the x-axis label.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Set the y-axis label.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Get the number of categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Get the number of series.
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Validate the chart.
    ///
    /// Every series must have exactly one value per category; the first
    /// mismatch is surfaced before any drawing occurs. Zero categories or
    /// zero series are valid and produce an empty chart.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SeriesLengthMismatch`] on a shape mismatch.
    pub fn build(self) -> Result<Self> {
        self.validate_shape()?;
        Ok(self)
    }

    fn validate_shape(&self) -> Result<()> {
        let expected = self.categories.len();
        for series in &self.series {
            if series.len() != expected {
                return Err(Error::SeriesLengthMismatch {
                    name: series.name.clone(),
                    expected,
                    actual: series.len(),
                });
            }
        }
        Ok(())
    }

    /// Upper y-axis limit for the current data (1.25x the maximum value).
    #[must_use]
    pub fn y_limit(&self) -> f32 {
        y_upper_limit(self.series.iter().flat_map(Series::values))
    }

    /// Render the chart to a surface.
    ///
    /// The surface is assumed to be at least `width` x `height`; drawing
    /// is clipped, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SeriesLengthMismatch`] if a series does not have
    /// one value per category. `build()` performs the same check, but
    /// `render` re-validates so a chart assembled without it cannot index
    /// out of bounds.
    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<()> {
        self.validate_shape()?;

        let plot_left = self.margin as i32;
        let plot_top = self.margin as i32;
        let plot_right = (self.width.saturating_sub(self.margin)) as i32;
        let plot_bottom = (self.height.saturating_sub(self.margin)) as i32;

        if plot_right <= plot_left || plot_bottom <= plot_top {
            return Ok(());
        }

        let n = self.categories.len();
        // Keep a drawable axis range even for empty or all-zero data
        let y_max = match self.y_limit() {
            limit if limit > 0.0 => limit,
            _ => 1.0,
        };

        // Category domain spans half a unit beyond the outermost ticks
        let x_scale = if n > 0 {
            LinearScale::new(
                (-0.5, (n - 1) as f32 + 0.5),
                (plot_left as f32, plot_right as f32),
            )
            .ok()
        } else {
            None
        };
        let y_scale = LinearScale::new((0.0, y_max), (plot_bottom as f32, plot_top as f32))?;

        if self.show_grid {
            self.draw_grid(surface, &y_scale, plot_left, plot_right);
        }
        self.draw_axes(surface, plot_left, plot_top, plot_right, plot_bottom);

        if let Some(x_scale) = x_scale {
            self.draw_bars(surface, &x_scale, &y_scale, plot_bottom);
            self.draw_category_ticks(surface, &x_scale, plot_bottom);
        }

        self.draw_legend(surface, plot_left, plot_top);
        self.draw_titles(surface, plot_left, plot_top, plot_bottom);

        Ok(())
    }

    /// Render to a new framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid.
    pub fn to_framebuffer(&self) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        fb.clear(self.background);
        self.render(&mut fb)?;
        Ok(fb)
    }

    fn draw_grid<S: Surface>(
        &self,
        surface: &mut S,
        y_scale: &LinearScale,
        plot_left: i32,
        plot_right: i32,
    ) {
        let grid_color = Rgba::rgb(220, 220, 220);
        let label_color = Rgba::rgb(110, 110, 110);
        let (_, y_max) = y_scale.domain();
        let step = nice_step(y_max);

        let mut value = step;
        while value < y_max {
            let y = y_scale.scale(value) as i32;
            surface.draw_line(plot_left, y, plot_right, y, grid_color);

            let label = format_tick(value);
            let lx = plot_left - 4 - text_width(&label) as i32;
            surface.draw_text(lx, y - (CHAR_H as i32) / 2, &label, label_color);
            value += step;
        }
    }

    fn draw_axes<S: Surface>(&self, surface: &mut S, l: i32, t: i32, r: i32, b: i32) {
        let axis_color = Rgba::rgb(50, 50, 50);
        surface.draw_line(l, b, r, b, axis_color);
        surface.draw_line(l, t, l, b, axis_color);
    }

    fn draw_bars<S: Surface>(
        &self,
        surface: &mut S,
        x_scale: &LinearScale,
        y_scale: &LinearScale,
        plot_bottom: i32,
    ) {
        let positions = self.layout.positions(self.categories.len(), self.series.len());

        for bar in positions {
            let value = self.series[bar.series].values()[bar.category];
            let color = self.palette.color(bar.series);

            let x0 = x_scale.scale(bar.center - bar.width / 2.0).round() as i32;
            let x1 = x_scale.scale(bar.center + bar.width / 2.0).round() as i32;
            let y_top = y_scale.scale(value.max(0.0)).round() as i32;

            let px_w = (x1 - x0).max(1) as u32;
            let px_h = (plot_bottom - y_top).max(0) as u32;

            surface.fill_rect(x0, y_top, px_w, px_h, color);
            if px_h > 0 {
                surface.rect_outline(x0, y_top, px_w, px_h, self.edge_color);
            }

            if self.show_value_labels {
                let label = format!("{value:.prec$}", prec = self.label_precision);
                let cx = x_scale.scale(bar.center).round() as i32;
                let lx = cx - (text_width(&label) as i32) / 2;
                let ly = y_top - (LABEL_OFFSET + CHAR_H) as i32;
                surface.draw_text(lx, ly, &label, Rgba::rgb(60, 60, 60));
            }
        }
    }

    fn draw_category_ticks<S: Surface>(
        &self,
        surface: &mut S,
        x_scale: &LinearScale,
        plot_bottom: i32,
    ) {
        let color = Rgba::rgb(50, 50, 50);
        for (i, name) in self.categories.iter().enumerate() {
            let cx = x_scale.scale(i as f32).round() as i32;
            let lx = cx - (text_width(name) as i32) / 2;
            surface.draw_text(lx, plot_bottom + 6, name, color);
        }
    }

    fn draw_legend<S: Surface>(&self, surface: &mut S, plot_left: i32, plot_top: i32) {
        if self.series.is_empty() {
            return;
        }

        let swatch = 9u32;
        let mut x = plot_left + 8;
        let y = plot_top + 8;

        for (idx, series) in self.series.iter().enumerate() {
            let color = self.palette.color(idx);
            surface.fill_rect(x, y, swatch, swatch, color);
            surface.rect_outline(x, y, swatch, swatch, self.edge_color);

            let tx = x + swatch as i32 + 4;
            surface.draw_text(tx, y, &series.name, Rgba::rgb(50, 50, 50));
            x = tx + text_width(&series.name) as i32 + 16;
        }
    }

    fn draw_titles<S: Surface>(
        &self,
        surface: &mut S,
        plot_left: i32,
        plot_top: i32,
        plot_bottom: i32,
    ) {
        let color = Rgba::rgb(30, 30, 30);

        if let Some(title) = &self.title {
            let tx = (self.width as i32 - text_width(title) as i32) / 2;
            surface.draw_text(tx, plot_top / 2 - (CHAR_H as i32) / 2, title, color);
        }

        if let Some(x_label) = &self.x_label {
            let tx = (self.width as i32 - text_width(x_label) as i32) / 2;
            surface.draw_text(tx, plot_bottom + 6 + CHAR_H as i32 + 6, x_label, color);
        }

        if let Some(y_label) = &self.y_label {
            // Horizontal placement above the y axis; the bitmap font has
            // no rotated variant
            surface.draw_text(plot_left, plot_top - CHAR_H as i32 - 4, y_label, color);
        }
    }
}

/// Pick a nice grid step for a given range (targeting ~5-6 lines).
fn nice_step(range: f32) -> f32 {
    if range <= 0.0 || !range.is_finite() {
        return 1.0;
    }
    let raw = range / 6.0;
    let magnitude = 10.0f32.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.5 {
        2.0
    } else if normalized < 7.5 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

fn format_tick(v: f32) -> String {
    if v.fract().abs() < 0.01 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}
