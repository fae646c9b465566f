use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::view::Selection;

/// A single synthetic price observation: one ship, one sample date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Class the ship belongs to (denormalized for cheap per-class scans)
    pub class: String,

    /// Ship name, unique across the fleet
    pub ship: String,

    /// Sample date (no time component — the history has daily granularity)
    pub date: NaiveDate,

    /// Price in the base currency (USD)
    pub price: f64,
}

/// The generated record set for one view lifetime.
///
/// Generated once at view mount and then only read — series recomputation
/// re-derives sorted dates and ship order from it on every state change.
/// Record order carries no guarantee beyond ship-then-date as produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    records: Vec<PriceRecord>,
}

impl PriceHistory {
    pub fn new(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ascending distinct sample dates present in the record set.
    /// This is the shared chart axis for every series built from it.
    #[must_use]
    pub fn sorted_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.records.iter().map(|r| r.date).collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }

    /// The single record price for (ship, date), if one exists.
    #[must_use]
    pub fn price_of(&self, ship: &str, date: NaiveDate) -> Option<f64> {
        self.records
            .iter()
            .find(|r| r.ship == ship && r.date == date)
            .map(|r| r.price)
    }

    /// All record prices for (class, date).
    #[must_use]
    pub fn class_prices_on(&self, class: &str, date: NaiveDate) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.class == class && r.date == date)
            .map(|r| r.price)
            .collect()
    }

    /// Ship names seen in records of the selected classes, in first-seen
    /// order (stable, not alphabetical — drill-down series follow it).
    #[must_use]
    pub fn ships_in(&self, selection: &Selection) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut ships = Vec::new();
        for record in &self.records {
            if selection.contains(&record.class) && seen.insert(record.ship.as_str()) {
                ships.push(record.ship.as_str());
            }
        }
        ships
    }

    /// Number of DISTINCT ship names recorded for a class. Can diverge from
    /// the static catalog count if catalog and records ever disagree.
    #[must_use]
    pub fn distinct_ship_count(&self, class: &str) -> usize {
        self.records
            .iter()
            .filter(|r| r.class == class)
            .map(|r| r.ship.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}
