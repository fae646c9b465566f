use serde::{Deserialize, Serialize};

/// High-contrast palette for unique series colors.
/// Series cycle through it by index when a view has more than nine lines.
pub const SERIES_PALETTE: [&str; 9] = [
    "#1f77b4", // blue
    "#ff7f0e", // orange
    "#2ca02c", // green
    "#d62728", // red
    "#9467bd", // purple
    "#8c564b", // brown
    "#e377c2", // pink
    "#7f7f7f", // gray
    "#17becf", // cyan
];

/// Color hint for the series at `index`, cycling through the palette.
#[must_use]
pub fn color_hint(index: usize) -> &'static str {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

/// One renderable line series.
///
/// Points align 1:1 with the owning set's `axis_labels`; `None` marks a gap
/// where no underlying record exists (sparse series render as gaps, never
/// as zeros).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Translated label shown in the legend
    pub display_name: String,

    /// One value per axis label, `None` for a gap
    pub points: Vec<Option<f64>>,

    /// CSS color for the line, from the shared palette
    pub color_hint: String,
}

/// The full payload handed to the rendering surface.
///
/// The core computes all the numbers — the frontend only renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeriesSet {
    /// Ordered axis labels shared by every series
    pub axis_labels: Vec<String>,

    /// Series in display order (catalog order for overview,
    /// first-seen record order for drill-down)
    pub series: Vec<ChartSeries>,
}

/// Ships-per-class counts for the donut/summary view.
///
/// `class_labels[i]` and `counts[i]` describe the same class; both follow
/// the catalog's declared class order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetDistribution {
    /// Translated class labels, in catalog order
    pub class_labels: Vec<String>,

    /// Ship count per class
    pub counts: Vec<usize>,
}
