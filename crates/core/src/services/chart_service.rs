use tracing::debug;

use crate::errors::CoreError;
use crate::i18n::TranslationTable;
use crate::models::chart::{color_hint, ChartSeries, ChartSeriesSet};
use crate::models::fleet::FleetCatalog;
use crate::models::pricing::AnnualPriceTable;
use crate::models::record::PriceHistory;
use crate::models::view::{Currency, Language, Selection};
use crate::services::currency_service::CurrencyService;

/// Builds chart-ready series sets from the generated record set.
///
/// The core computes all the numbers — the rendering surface only draws.
/// Two modes exist for the comparison chart: class averages (overview, no
/// filter active) and per-ship lines (drill-down, one or more classes
/// selected). The caller dispatches on whether the selection is empty.
pub struct ChartService {
    currency_service: CurrencyService,
}

impl ChartService {
    pub fn new() -> Self {
        Self {
            currency_service: CurrencyService::new(),
        }
    }

    /// Overview mode: one averaged series per class, in catalog order.
    ///
    /// The axis is the ascending set of distinct dates in the record set.
    /// A (class, date) cell with zero records is a data-integrity defect
    /// and fails the build — it must never degrade silently to zero.
    pub fn overview_series(
        &self,
        history: &PriceHistory,
        catalog: &FleetCatalog,
        currency: Currency,
        translations: &TranslationTable,
        language: Language,
    ) -> Result<ChartSeriesSet, CoreError> {
        let dates = history.sorted_dates();
        let axis_labels: Vec<String> = dates.iter().map(|d| d.to_string()).collect();

        let mut series = Vec::with_capacity(catalog.classes().len());
        for (idx, class) in catalog.classes().iter().enumerate() {
            let mut points = Vec::with_capacity(dates.len());
            for date in &dates {
                let prices = history.class_prices_on(&class.id, *date);
                if prices.is_empty() {
                    return Err(CoreError::EmptyAggregationGroup {
                        class: class.id.clone(),
                        date: *date,
                    });
                }
                let mean = prices.iter().sum::<f64>() / prices.len() as f64;
                points.push(Some(self.currency_service.chart_mean(mean, currency)));
            }

            series.push(ChartSeries {
                display_name: translations.class_label(&class.id, language).to_string(),
                points,
                color_hint: color_hint(idx).to_string(),
            });
        }

        debug!(
            classes = series.len(),
            dates = axis_labels.len(),
            %currency,
            "built overview series"
        );
        Ok(ChartSeriesSet {
            axis_labels,
            series,
        })
    }

    /// Drill-down mode: one series per ship of the selected classes, in
    /// first-seen record order.
    ///
    /// A missing (ship, date) record becomes a `None` point — sparse series
    /// are valid and render as gaps, never as an error. USD points carry
    /// the raw record price; only CAD conversion rounds.
    pub fn drill_down_series(
        &self,
        history: &PriceHistory,
        selection: &Selection,
        currency: Currency,
        translations: &TranslationTable,
        language: Language,
    ) -> ChartSeriesSet {
        let dates = history.sorted_dates();
        let axis_labels: Vec<String> = dates.iter().map(|d| d.to_string()).collect();

        let ships = history.ships_in(selection);
        let series = ships
            .iter()
            .enumerate()
            .map(|(idx, ship)| {
                let points = dates
                    .iter()
                    .map(|date| {
                        history
                            .price_of(ship, *date)
                            .map(|price| self.currency_service.chart_price(price, currency))
                    })
                    .collect();

                ChartSeries {
                    display_name: translations.ship_label(ship, language).to_string(),
                    points,
                    color_hint: color_hint(idx).to_string(),
                }
            })
            .collect();

        debug!(
            ships = ships.len(),
            selected = selection.len(),
            %currency,
            "built drill-down series"
        );
        ChartSeriesSet {
            axis_labels,
            series,
        }
    }

    /// The static annual price table as a renderable series set.
    ///
    /// Labels and colors come from the table itself; CAD values carry the
    /// table's two-decimal rounding policy.
    pub fn annual_series(&self, table: &AnnualPriceTable, currency: Currency) -> ChartSeriesSet {
        let series = table
            .series
            .iter()
            .map(|s| ChartSeries {
                display_name: s.label.clone(),
                points: s
                    .values
                    .iter()
                    .map(|v| Some(self.currency_service.table_value(*v, currency)))
                    .collect(),
                color_hint: s.color_hint.clone(),
            })
            .collect();

        ChartSeriesSet {
            axis_labels: table.year_labels.clone(),
            series,
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
