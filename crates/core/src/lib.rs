pub mod data;
pub mod errors;
pub mod i18n;
pub mod models;
pub mod services;

use chrono::NaiveDate;
use rand::Rng;

use errors::CoreError;
use i18n::TranslationTable;
use models::{
    chart::{ChartSeriesSet, FleetDistribution},
    fleet::{AnchorPrices, FleetCatalog},
    pricing::{AnnualPriceTable, ClassPriceSummary},
    record::PriceHistory,
    timeline::TimelineEntry,
    view::{Currency, Language, Selection, ViewState},
};
use services::{
    analytics_service::AnalyticsService, chart_service::ChartService,
    distribution_service::DistributionService, history_service::HistoryService,
};

/// Main entry point for the RoyalStats core library.
///
/// Holds the fixed fleet reference data, the synthetic price history
/// generated once at construction (the view-mount moment), and the
/// services that turn both into renderable payloads. Every query is a pure
/// function of the caller-owned [`ViewState`] — recomputing a series never
/// re-rolls the random history.
#[must_use]
pub struct RoyalStats {
    catalog: FleetCatalog,
    history: PriceHistory,
    translations: TranslationTable,
    timeline: Vec<TimelineEntry>,
    price_table: AnnualPriceTable,
    chart_service: ChartService,
    distribution_service: DistributionService,
    analytics_service: AnalyticsService,
}

impl std::fmt::Debug for RoyalStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoyalStats")
            .field("classes", &self.catalog.classes().len())
            .field("ships", &self.catalog.total_ships())
            .field("records", &self.history.len())
            .field("timeline_entries", &self.timeline.len())
            .finish()
    }
}

impl RoyalStats {
    /// Build with the built-in Royal Caribbean reference data, drawing the
    /// synthetic history offsets from OS randomness.
    pub fn new() -> Result<Self, CoreError> {
        Self::with_rng(&mut rand::thread_rng())
    }

    /// Same as [`new`](Self::new) but with a caller-supplied random source,
    /// so a seeded generator can pin the synthetic history.
    pub fn with_rng<R: Rng>(rng: &mut R) -> Result<Self, CoreError> {
        Self::from_parts(
            data::builtin_catalog()?,
            data::builtin_anchor_prices()?,
            data::builtin_sample_dates()?,
            rng,
        )
    }

    /// Build from caller-supplied reference data. The history is generated
    /// here, exactly once for the lifetime of this instance.
    pub fn from_parts<R: Rng>(
        catalog: FleetCatalog,
        anchors: AnchorPrices,
        dates: Vec<NaiveDate>,
        rng: &mut R,
    ) -> Result<Self, CoreError> {
        let history = HistoryService::new().generate(&catalog, &anchors, &dates, rng)?;

        Ok(Self {
            catalog,
            history,
            translations: data::builtin_translations(),
            timeline: data::builtin_timeline()?,
            price_table: data::builtin_annual_price_table(),
            chart_service: ChartService::new(),
            distribution_service: DistributionService::new(),
            analytics_service: AnalyticsService::new(),
        })
    }

    // ── Fleet Comparison ────────────────────────────────────────────

    /// Series for the comparison chart: class averages when no class is
    /// selected, per-ship series for the selected classes otherwise.
    pub fn comparison_series(&self, state: &ViewState) -> Result<ChartSeriesSet, CoreError> {
        if state.selection.is_empty() {
            self.overview_series(state.currency, state.language)
        } else {
            Ok(self.drill_down_series(&state.selection, state.currency, state.language))
        }
    }

    /// One averaged series per class, in catalog order.
    pub fn overview_series(
        &self,
        currency: Currency,
        language: Language,
    ) -> Result<ChartSeriesSet, CoreError> {
        self.chart_service.overview_series(
            &self.history,
            &self.catalog,
            currency,
            &self.translations,
            language,
        )
    }

    /// One series per ship of the selected classes, first-seen order.
    #[must_use]
    pub fn drill_down_series(
        &self,
        selection: &Selection,
        currency: Currency,
        language: Language,
    ) -> ChartSeriesSet {
        self.chart_service.drill_down_series(
            &self.history,
            selection,
            currency,
            &self.translations,
            language,
        )
    }

    // ── Distribution ────────────────────────────────────────────────

    /// Ships per class from the static catalog (fleet page donut).
    #[must_use]
    pub fn fleet_distribution(&self, language: Language) -> FleetDistribution {
        self.distribution_service
            .catalog_distribution(&self.catalog, &self.translations, language)
    }

    /// Distinct ships per class seen in the generated record set
    /// (comparison page donut).
    #[must_use]
    pub fn recorded_distribution(&self, language: Language) -> FleetDistribution {
        self.distribution_service.recorded_distribution(
            &self.catalog,
            &self.history,
            &self.translations,
            language,
        )
    }

    // ── Pricing History ─────────────────────────────────────────────

    /// The static annual price table as a renderable series set.
    #[must_use]
    pub fn annual_series(&self, currency: Currency) -> ChartSeriesSet {
        self.chart_service.annual_series(&self.price_table, currency)
    }

    /// Average/min/max detail for one class of the annual table.
    pub fn class_summary(
        &self,
        class_label: &str,
        currency: Currency,
    ) -> Result<ClassPriceSummary, CoreError> {
        self.analytics_service
            .class_summary(&self.price_table, class_label, currency)
    }

    /// Row labels for the pricing-history class table.
    #[must_use]
    pub fn annual_class_labels(&self) -> Vec<&str> {
        self.price_table.labels()
    }

    // ── Translations ────────────────────────────────────────────────

    /// UI string for `key`, falling back to English, then to the bare key.
    #[must_use]
    pub fn translate<'a>(&'a self, key: &'a str, language: Language) -> &'a str {
        self.translations.ui_text(key, language)
    }

    /// UI string for `key` with a caller-supplied default literal.
    #[must_use]
    pub fn translate_or<'a>(
        &'a self,
        key: &str,
        language: Language,
        fallback: &'a str,
    ) -> &'a str {
        self.translations.ui_text_or(key, language, fallback)
    }

    /// The full bilingual table, for label lookups and titled headers.
    #[must_use]
    pub fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    // ── Reference Data ──────────────────────────────────────────────

    /// The fixed class catalog.
    #[must_use]
    pub fn catalog(&self) -> &FleetCatalog {
        &self.catalog
    }

    /// The record set generated at construction.
    #[must_use]
    pub fn history(&self) -> &PriceHistory {
        &self.history
    }

    /// Fleet launch timeline, date-ascending.
    #[must_use]
    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Pretty-printed JSON of a series set, ready for the rendering
    /// surface or for debugging snapshots.
    pub fn export_series_json(&self, series: &ChartSeriesSet) -> Result<String, CoreError> {
        serde_json::to_string_pretty(series).map_err(CoreError::from)
    }
}
