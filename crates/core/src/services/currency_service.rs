use crate::models::view::Currency;

/// Fixed conversion rate: 1 USD = 1.35 CAD.
pub const CAD_PER_USD: f64 = 1.35;

/// Applies the fixed USD→CAD conversion and the per-view rounding policies.
///
/// Three policies coexist and must not be unified:
/// - aggregated chart means round to the nearest integer in BOTH currencies;
/// - exact drill-down prices pass through raw in USD and round only when
///   converting to CAD;
/// - the pricing table rounds converted values to two decimals.
pub struct CurrencyService;

impl CurrencyService {
    pub fn new() -> Self {
        Self
    }

    /// Policy for aggregated class means: integer rounding in both
    /// currencies, conversion applied before rounding.
    #[must_use]
    pub fn chart_mean(&self, mean_usd: f64, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => mean_usd.round(),
            Currency::Cad => (mean_usd * CAD_PER_USD).round(),
        }
    }

    /// Policy for exact per-ship prices: USD values are anchors/offsets and
    /// pass through unmodified; CAD converts then rounds to an integer.
    #[must_use]
    pub fn chart_price(&self, price_usd: f64, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => price_usd,
            Currency::Cad => (price_usd * CAD_PER_USD).round(),
        }
    }

    /// Policy for the pricing table and detail panel: CAD converts with
    /// two-decimal rounding, USD passes through raw.
    #[must_use]
    pub fn table_value(&self, value_usd: f64, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => value_usd,
            Currency::Cad => Self::round2(value_usd * CAD_PER_USD),
        }
    }

    /// Round to two decimal places.
    #[must_use]
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}
