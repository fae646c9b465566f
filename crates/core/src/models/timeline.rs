use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A ship's entry into service, for the fleet timeline panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Launch / delivery date
    pub date: NaiveDate,

    /// Ship name as displayed (future ships carry an annotation suffix)
    pub ship: String,
}

impl TimelineEntry {
    pub fn new(date: NaiveDate, ship: impl Into<String>) -> Self {
        Self {
            date,
            ship: ship.into(),
        }
    }
}
