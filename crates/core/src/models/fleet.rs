use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::errors::CoreError;

/// A named grouping of ships sharing a hull/design generation.
///
/// The member list keeps its declared order — it is never re-sorted,
/// because drill-down labels and class detail panels follow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipClass {
    /// Class identifier (e.g., "Oasis", "Quantum")
    pub id: String,

    /// Member ship names, in declared order
    pub ships: Vec<String>,
}

impl ShipClass {
    pub fn new(id: impl Into<String>, ships: Vec<String>) -> Self {
        Self {
            id: id.into(),
            ships,
        }
    }
}

/// The fixed catalog of ship classes.
///
/// Declared class order is THE order: overview series, distribution labels
/// and donut segments all follow it. The catalog is immutable reference
/// data, constructed once and validated up front so that aggregation can
/// rely on classes partitioning the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetCatalog {
    classes: Vec<ShipClass>,
}

impl FleetCatalog {
    /// Build a catalog, validating that classes partition the fleet:
    /// class ids are non-empty and unique, and no ship belongs to two classes.
    pub fn new(classes: Vec<ShipClass>) -> Result<Self, CoreError> {
        let mut seen_classes = HashSet::new();
        let mut seen_ships = HashSet::new();

        for class in &classes {
            if class.id.trim().is_empty() {
                return Err(CoreError::ValidationError(
                    "Class id must not be empty".into(),
                ));
            }
            if !seen_classes.insert(class.id.clone()) {
                return Err(CoreError::ValidationError(format!(
                    "Duplicate class id '{}'",
                    class.id
                )));
            }
            for ship in &class.ships {
                if ship.trim().is_empty() {
                    return Err(CoreError::ValidationError(format!(
                        "Class '{}' contains an empty ship name",
                        class.id
                    )));
                }
                if !seen_ships.insert(ship.clone()) {
                    return Err(CoreError::ValidationError(format!(
                        "Ship '{ship}' is assigned to more than one class"
                    )));
                }
            }
        }

        Ok(Self { classes })
    }

    /// All classes, in declared order.
    #[must_use]
    pub fn classes(&self) -> &[ShipClass] {
        &self.classes
    }

    /// Class ids, in declared order.
    #[must_use]
    pub fn class_ids(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.id.as_str()).collect()
    }

    /// Look up a class by id.
    #[must_use]
    pub fn class(&self, id: &str) -> Option<&ShipClass> {
        self.classes.iter().find(|c| c.id == id)
    }

    /// The class a ship belongs to (each ship belongs to exactly one).
    #[must_use]
    pub fn class_of_ship(&self, ship: &str) -> Option<&str> {
        self.classes
            .iter()
            .find(|c| c.ships.iter().any(|s| s == ship))
            .map(|c| c.id.as_str())
    }

    /// Total number of ships across all classes.
    #[must_use]
    pub fn total_ships(&self) -> usize {
        self.classes.iter().map(|c| c.ships.len()).sum()
    }
}

/// Known reference prices used to seed synthetic history generation.
///
/// `base` anchors the randomized interior dates, `current` pins the final
/// sample date. Neither table is required to cover every ship — a ship
/// without a current price falls back to the randomized rule, but a ship
/// without a base price cannot be generated at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnchorPrices {
    base: HashMap<String, f64>,
    current: HashMap<String, f64>,
}

impl AnchorPrices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from flat (ship, price) tables, validating every price.
    pub fn from_tables(
        base: &[(&str, f64)],
        current: &[(&str, f64)],
    ) -> Result<Self, CoreError> {
        let mut anchors = Self::new();
        for (ship, price) in base {
            anchors.set_base(*ship, *price)?;
        }
        for (ship, price) in current {
            anchors.set_current(*ship, *price)?;
        }
        Ok(anchors)
    }

    /// Set a ship's base price anchor. Prices must be positive.
    pub fn set_base(&mut self, ship: impl Into<String>, price: f64) -> Result<(), CoreError> {
        let ship = ship.into();
        Self::validate_price(&ship, price)?;
        self.base.insert(ship, price);
        Ok(())
    }

    /// Set a ship's current price anchor. Prices must be positive.
    pub fn set_current(&mut self, ship: impl Into<String>, price: f64) -> Result<(), CoreError> {
        let ship = ship.into();
        Self::validate_price(&ship, price)?;
        self.current.insert(ship, price);
        Ok(())
    }

    /// The base price anchor for a ship, if defined.
    #[must_use]
    pub fn base(&self, ship: &str) -> Option<f64> {
        self.base.get(ship).copied()
    }

    /// The current price anchor for a ship, if defined.
    #[must_use]
    pub fn current(&self, ship: &str) -> Option<f64> {
        self.current.get(ship).copied()
    }

    fn validate_price(ship: &str, price: f64) -> Result<(), CoreError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Anchor price for '{ship}' must be a positive number, got {price}"
            )));
        }
        Ok(())
    }
}
