use serde::{Deserialize, Serialize};

/// Display currency for chart values. USD is the base currency every
/// record and anchor is stored in; CAD is derived by a fixed rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    Usd,
    Cad,
}

impl Currency {
    /// Three-letter display code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Cad => "CAD",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Active display language. Toggle-only — there is no persistence, a full
/// reload starts back at English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// Flip to the other language. Toggling twice is the identity.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Fr,
            Language::Fr => Language::En,
        }
    }

    /// Lowercase language code ("en" / "fr").
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// The set of class ids the user has drilled into, empty by default.
///
/// Preserves toggle order. `toggle` is its own inverse: selecting then
/// deselecting a class restores the previous state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    classes: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the class if absent, remove it if present.
    pub fn toggle(&mut self, class_id: &str) {
        if let Some(pos) = self.classes.iter().position(|c| c == class_id) {
            self.classes.remove(pos);
        } else {
            self.classes.push(class_id.to_string());
        }
    }

    /// Remove a single class from the selection (the badge "×" action).
    pub fn deselect(&mut self, class_id: &str) {
        self.classes.retain(|c| c != class_id);
    }

    /// Drop every selected class (the "remove filters" action).
    pub fn clear(&mut self) {
        self.classes.clear();
    }

    #[must_use]
    pub fn contains(&self, class_id: &str) -> bool {
        self.classes.iter().any(|c| c == class_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Selected class ids, in toggle order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// Caller-owned UI state for the comparison view.
///
/// The aggregator is a pure function of this state plus the fixed reference
/// data — there is no ambient context, which keeps recomputation
/// deterministic and testable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Which classes the user has drilled into (empty → overview mode)
    pub selection: Selection,

    /// Display currency for every chart value
    pub currency: Currency,

    /// Display language for every label
    pub language: Language,
}
