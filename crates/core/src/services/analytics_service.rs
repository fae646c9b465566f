use crate::errors::CoreError;
use crate::models::pricing::{AnnualPriceTable, ClassPriceSummary};
use crate::models::view::Currency;
use crate::services::currency_service::CurrencyService;

/// Computes the selected-class detail panel for the pricing-history view:
/// average, minimum and maximum over one class's annual series.
pub struct AnalyticsService {
    currency_service: CurrencyService,
}

impl AnalyticsService {
    pub fn new() -> Self {
        Self {
            currency_service: CurrencyService::new(),
        }
    }

    /// Summary for one class, in the requested display currency.
    ///
    /// Values convert FIRST, then aggregate — the panel must read the same
    /// converted numbers the chart displays. The average rounds to two
    /// decimals; min and max report converted series values as-is.
    pub fn class_summary(
        &self,
        table: &AnnualPriceTable,
        class_label: &str,
        currency: Currency,
    ) -> Result<ClassPriceSummary, CoreError> {
        let series = table
            .series_for(class_label)
            .ok_or_else(|| CoreError::SeriesNotFound(class_label.to_string()))?;

        if series.values.is_empty() {
            return Err(CoreError::ValidationError(format!(
                "Annual series for '{class_label}' has no values"
            )));
        }

        let values: Vec<f64> = series
            .values
            .iter()
            .map(|v| self.currency_service.table_value(*v, currency))
            .collect();

        let sum: f64 = values.iter().sum();
        let average = CurrencyService::round2(sum / values.len() as f64);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(ClassPriceSummary {
            class_label: series.label.clone(),
            ships: series.ships.clone(),
            average,
            min,
            max,
            currency,
        })
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
