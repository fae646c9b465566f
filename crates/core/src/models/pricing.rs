use serde::{Deserialize, Serialize};

use super::view::Currency;

/// One fixed annual price series for a ship class in the pricing-history
/// view. Unlike the synthetic comparison history, these values are static
/// reference data with their own per-class colors and ship listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualClassSeries {
    /// Display label, also the lookup key (e.g., "Oasis Class")
    pub label: String,

    /// Member ships listed in the detail panel
    pub ships: Vec<String>,

    /// One average price per year label, in USD
    pub values: Vec<f64>,

    /// CSS color for this class's line
    pub color_hint: String,
}

/// The static per-class annual price table backing the pricing-history view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnualPriceTable {
    /// Year labels shared by every series (e.g., "2018".."2024")
    pub year_labels: Vec<String>,

    /// One series per class, in display order
    pub series: Vec<AnnualClassSeries>,
}

impl AnnualPriceTable {
    /// Look up a class series by its display label.
    #[must_use]
    pub fn series_for(&self, label: &str) -> Option<&AnnualClassSeries> {
        self.series.iter().find(|s| s.label == label)
    }

    /// Row labels for the class table, in display order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }
}

/// Average/min/max detail for one selected class, in the requested
/// display currency. Values are computed over the CONVERTED series so the
/// panel matches what the chart shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassPriceSummary {
    /// The class's display label
    pub class_label: String,

    /// Member ships listed alongside the stats
    pub ships: Vec<String>,

    /// Arithmetic mean of the series, rounded to two decimals
    pub average: f64,

    /// Smallest value in the series
    pub min: f64,

    /// Largest value in the series
    pub max: f64,

    /// Currency the stats are expressed in
    pub currency: Currency,
}
