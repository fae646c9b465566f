use crate::i18n::TranslationTable;
use crate::models::chart::FleetDistribution;
use crate::models::fleet::FleetCatalog;
use crate::models::record::PriceHistory;
use crate::models::view::Language;

/// Counts ships per class for the donut/summary views.
///
/// Two call sites count differently and stay separate operations: the
/// fleet page reads the static catalog, while the comparison page counts
/// distinct ships seen in the generated record set. The two can diverge
/// if catalog and records ever disagree, and both views must keep showing
/// what their own source says.
pub struct DistributionService;

impl DistributionService {
    pub fn new() -> Self {
        Self
    }

    /// Ships per class straight from the static catalog member lists.
    #[must_use]
    pub fn catalog_distribution(
        &self,
        catalog: &FleetCatalog,
        translations: &TranslationTable,
        language: Language,
    ) -> FleetDistribution {
        FleetDistribution {
            class_labels: Self::labels(catalog, translations, language),
            counts: catalog.classes().iter().map(|c| c.ships.len()).collect(),
        }
    }

    /// DISTINCT ship names recorded per class in the active record set.
    #[must_use]
    pub fn recorded_distribution(
        &self,
        catalog: &FleetCatalog,
        history: &PriceHistory,
        translations: &TranslationTable,
        language: Language,
    ) -> FleetDistribution {
        FleetDistribution {
            class_labels: Self::labels(catalog, translations, language),
            counts: catalog
                .classes()
                .iter()
                .map(|c| history.distinct_ship_count(&c.id))
                .collect(),
        }
    }

    fn labels(
        catalog: &FleetCatalog,
        translations: &TranslationTable,
        language: Language,
    ) -> Vec<String> {
        catalog
            .classes()
            .iter()
            .map(|c| translations.class_label(&c.id, language).to_string())
            .collect()
    }
}

impl Default for DistributionService {
    fn default() -> Self {
        Self::new()
    }
}
