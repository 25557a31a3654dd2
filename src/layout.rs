//! Grouped bar layout engine.
//!
//! Computes where each bar of a grouped bar chart sits on the category
//! axis, decoupled from any drawing code. Categories occupy integer ticks
//! 0, 1, ..., N-1; the M bars of a group are packed side by side with a
//! fixed gap and the group as a whole is centered on its tick.
//!
//! Every function here is a pure computation: identical inputs always
//! produce identical outputs and nothing is shared between calls.

/// Position of a single bar in category-axis units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPosition {
    /// Index of the series this bar belongs to.
    pub series: usize,
    /// Index of the category (group) this bar belongs to.
    pub category: usize,
    /// Horizontal center of the bar.
    pub center: f32,
    /// Bar width.
    pub width: f32,
}

/// Layout parameters for a grouped bar chart.
///
/// Callers are expected to keep the total group width
/// `M*width + (M-1)*gap` below 1.0 (one category unit) so adjacent groups
/// do not overlap; this is not validated, and non-positive widths or gaps
/// are passed through unchecked.
#[derive(Debug, Clone, Copy)]
pub struct GroupedLayout {
    /// Width of each bar, in category-axis units.
    pub bar_width: f32,
    /// Gap between adjacent bars within a group.
    pub gap: f32,
}

impl Default for GroupedLayout {
    fn default() -> Self {
        Self {
            bar_width: 0.25,
            gap: 0.15,
        }
    }
}

impl GroupedLayout {
    /// Create a layout with the given bar width and intra-group gap.
    #[must_use]
    pub const fn new(bar_width: f32, gap: f32) -> Self {
        Self { bar_width, gap }
    }

    /// Total width of one group of `n_series` bars.
    #[must_use]
    pub fn group_width(&self, n_series: usize) -> f32 {
        if n_series == 0 {
            return 0.0;
        }
        n_series as f32 * self.bar_width + (n_series - 1) as f32 * self.gap
    }

    /// Center offset of series `j` relative to its category tick.
    ///
    /// The group spans `group_width` centered on the tick, so the first
    /// bar's center sits half a group left of the tick plus half a bar
    /// width, and each subsequent bar moves right by `bar_width + gap`.
    /// For a single series this is exactly 0 (an ordinary bar chart).
    #[must_use]
    pub fn series_offset(&self, series: usize, n_series: usize) -> f32 {
        let start = -(self.group_width(n_series) - self.bar_width) / 2.0;
        start + series as f32 * (self.bar_width + self.gap)
    }

    /// Compute the position of every bar for `n_categories` groups of
    /// `n_series` bars, in row-major (series, then category) order.
    ///
    /// Zero categories or zero series produce an empty layout.
    #[must_use]
    pub fn positions(&self, n_categories: usize, n_series: usize) -> Vec<BarPosition> {
        let mut bars = Vec::with_capacity(n_categories * n_series);
        for series in 0..n_series {
            let offset = self.series_offset(series, n_series);
            for category in 0..n_categories {
                bars.push(BarPosition {
                    series,
                    category,
                    center: category as f32 + offset,
                    width: self.bar_width,
                });
            }
        }
        bars
    }
}

/// Upper y-axis limit leaving headroom for value labels above the bars.
///
/// 1.25x the maximum value across all series. A heuristic, not a
/// collision-free bound; pathological data can still clip labels. Empty
/// input gets a fixed fallback so an empty chart keeps a drawable range.
#[must_use]
pub fn y_upper_limit<'a, I>(values: I) -> f32
where
    I: IntoIterator<Item = &'a f32>,
{
    let max = values
        .into_iter()
        .copied()
        .fold(f32::NEG_INFINITY, f32::max);
    if max.is_finite() {
        max * 1.25
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_series_centers_on_tick() {
        let layout = GroupedLayout::new(0.5, 0.1);
        let bars = layout.positions(4, 1);
        assert_eq!(bars.len(), 4);
        for bar in &bars {
            assert_relative_eq!(bar.center, bar.category as f32);
        }
    }

    #[test]
    fn test_group_mean_is_on_tick() {
        let layout = GroupedLayout::new(0.22, 0.12);
        let bars = layout.positions(4, 3);

        for i in 0..4 {
            let sum: f32 = bars
                .iter()
                .filter(|b| b.category == i)
                .map(|b| b.center)
                .sum();
            assert_relative_eq!(sum / 3.0, i as f32, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_adjacent_bars_spaced_width_plus_gap() {
        let layout = GroupedLayout::new(0.22, 0.12);
        for j in 0..2 {
            let delta = layout.series_offset(j + 1, 3) - layout.series_offset(j, 3);
            assert_relative_eq!(delta, 0.34, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_showcase_scenario_offsets() {
        // 3 series, w=0.22, g=0.12: group width 0.9, offsets -0.34, 0, +0.34
        let layout = GroupedLayout::new(0.22, 0.12);
        assert_relative_eq!(layout.group_width(3), 0.9, epsilon = 1e-6);
        assert_relative_eq!(layout.series_offset(0, 3), -0.34, epsilon = 1e-6);
        assert_relative_eq!(layout.series_offset(1, 3), 0.0, epsilon = 1e-6);
        assert_relative_eq!(layout.series_offset(2, 3), 0.34, epsilon = 1e-6);
    }

    #[test]
    fn test_empty_layouts() {
        let layout = GroupedLayout::default();
        assert!(layout.positions(0, 2).is_empty());
        assert!(layout.positions(4, 0).is_empty());
        assert_eq!(layout.group_width(0), 0.0);
    }

    #[test]
    fn test_bar_count_and_order() {
        let layout = GroupedLayout::new(0.22, 0.12);
        let bars = layout.positions(4, 3);
        assert_eq!(bars.len(), 12);
        assert_eq!(bars[0].series, 0);
        assert_eq!(bars[0].category, 0);
        assert_eq!(bars[11].series, 2);
        assert_eq!(bars[11].category, 3);
    }

    #[test]
    fn test_negative_width_not_rejected() {
        // Garbage in, garbage out: the formula still applies
        let layout = GroupedLayout::new(-0.1, 0.0);
        let bars = layout.positions(1, 2);
        assert_eq!(bars.len(), 2);
    }

    #[test]
    fn test_y_upper_limit() {
        let values = vec![10.0f32, 40.0, 20.0];
        assert_relative_eq!(y_upper_limit(&values), 50.0);
    }

    #[test]
    fn test_y_upper_limit_tracks_new_max() {
        let mut values = vec![10.0f32, 40.0, 20.0];
        values[0] = 80.0;
        assert_relative_eq!(y_upper_limit(&values), 100.0);
    }

    #[test]
    fn test_y_upper_limit_empty() {
        assert_relative_eq!(y_upper_limit(&[]), 1.0);
    }
}
