use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::view::{Currency, Language};

/// A bilingual string. Either side may be absent — lookup falls back to the
/// English side, and past that to a caller-supplied literal or the bare key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: Option<String>,
    pub fr: Option<String>,
}

impl LocalizedText {
    /// A string translated in both languages.
    pub fn both(en: impl Into<String>, fr: impl Into<String>) -> Self {
        Self {
            en: Some(en.into()),
            fr: Some(fr.into()),
        }
    }

    /// A string only available in English.
    pub fn en_only(en: impl Into<String>) -> Self {
        Self {
            en: Some(en.into()),
            fr: None,
        }
    }

    /// The string for exactly the requested language, if present.
    #[must_use]
    pub fn get(&self, language: Language) -> Option<&str> {
        match language {
            Language::En => self.en.as_deref(),
            Language::Fr => self.fr.as_deref(),
        }
    }

    /// The requested language, falling back to the English side.
    #[must_use]
    pub fn resolve(&self, language: Language) -> Option<&str> {
        self.get(language).or(self.en.as_deref())
    }
}

/// Bilingual string tables, keyed first by semantic key, then by language.
///
/// Three sections mirror how labels are looked up: free-form UI strings,
/// class labels and ship labels. Lookup never fails and never panics — a
/// missing key or language always resolves to a fallback, so the rendering
/// surface never receives an error for a translation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationTable {
    ui: HashMap<String, LocalizedText>,
    class_names: HashMap<String, LocalizedText>,
    ship_names: HashMap<String, LocalizedText>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_ui(&mut self, key: impl Into<String>, text: LocalizedText) {
        self.ui.insert(key.into(), text);
    }

    pub fn insert_class(&mut self, id: impl Into<String>, text: LocalizedText) {
        self.class_names.insert(id.into(), text);
    }

    pub fn insert_ship(&mut self, name: impl Into<String>, text: LocalizedText) {
        self.ship_names.insert(name.into(), text);
    }

    /// UI string for `key`, falling back to the English side, then to the
    /// bare key itself.
    #[must_use]
    pub fn ui_text<'a>(&'a self, key: &'a str, language: Language) -> &'a str {
        self.ui
            .get(key)
            .and_then(|t| t.resolve(language))
            .unwrap_or(key)
    }

    /// UI string for `key`, with a caller-supplied default literal instead
    /// of the bare key.
    #[must_use]
    pub fn ui_text_or<'a>(
        &'a self,
        key: &str,
        language: Language,
        fallback: &'a str,
    ) -> &'a str {
        self.ui
            .get(key)
            .and_then(|t| t.resolve(language))
            .unwrap_or(fallback)
    }

    /// Translated label for a ship class, falling back to the raw class id.
    #[must_use]
    pub fn class_label<'a>(&'a self, class_id: &'a str, language: Language) -> &'a str {
        self.class_names
            .get(class_id)
            .and_then(|t| t.resolve(language))
            .unwrap_or(class_id)
    }

    /// Translated label for a ship, falling back to the raw ship name.
    #[must_use]
    pub fn ship_label<'a>(&'a self, ship: &'a str, language: Language) -> &'a str {
        self.ship_names
            .get(ship)
            .and_then(|t| t.resolve(language))
            .unwrap_or(ship)
    }

    // ── Parameterised titles ────────────────────────────────────────

    /// Main comparison chart title, naming the active currency.
    #[must_use]
    pub fn chart_title_main(&self, currency: Currency, language: Language) -> String {
        match language {
            Language::Fr => format!("Prix Royal Caribbean (voyage de 7 nuits en {currency})"),
            Language::En => format!("Royal Caribbean Prices (7-Night Voyage in {currency})"),
        }
    }

    /// Comparison chart subtitle: per-ship when drilled down, per-class
    /// averages otherwise.
    #[must_use]
    pub fn chart_title_sub(&self, drill_down: bool, language: Language) -> &'static str {
        match (drill_down, language) {
            (true, Language::Fr) => "Navires sélectionnés",
            (true, Language::En) => "Selected Ships",
            (false, Language::Fr) => "Coût moyen par classe de navire",
            (false, Language::En) => "Average cost per ship class",
        }
    }

    /// Vertical axis title, naming the active currency.
    #[must_use]
    pub fn y_axis_title(&self, currency: Currency, language: Language) -> String {
        match language {
            Language::Fr => format!("Prix ({currency})"),
            Language::En => format!("Price ({currency})"),
        }
    }

    /// Header of the selected-class detail panel in the pricing view.
    #[must_use]
    pub fn class_details_header(&self, class_label: &str, language: Language) -> String {
        match language {
            Language::Fr => format!("Détails de la classe {class_label}"),
            Language::En => format!("{class_label} Details"),
        }
    }
}
