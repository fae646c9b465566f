use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::fleet::{AnchorPrices, FleetCatalog};
use crate::models::record::{PriceHistory, PriceRecord};

/// Lower bound of the uniform integer offset applied to interior dates.
pub const OFFSET_MIN: i32 = -200;

/// Upper bound (inclusive) of the uniform integer offset.
pub const OFFSET_MAX: i32 = 400;

/// Generates the synthetic per-ship price history for one view lifetime.
///
/// The random source is injected so tests can pin the history with a
/// seeded generator; production callers pass `rand::thread_rng()`.
pub struct HistoryService;

impl HistoryService {
    pub fn new() -> Self {
        Self
    }

    /// Emit one record per (class, ship, date).
    ///
    /// The LAST date carries the ship's current-price anchor when one is
    /// defined; every other date (and the last, for ships without a current
    /// price) draws base price + a uniform integer offset in
    /// [`OFFSET_MIN`, `OFFSET_MAX`].
    ///
    /// A ship that needs its base price but has none fails the whole
    /// generation with `MissingAnchorPrice` — an undefined anchor must
    /// never leak into the record set as a non-finite price.
    pub fn generate<R: Rng>(
        &self,
        catalog: &FleetCatalog,
        anchors: &AnchorPrices,
        dates: &[NaiveDate],
        rng: &mut R,
    ) -> Result<PriceHistory, CoreError> {
        if dates.is_empty() {
            return Err(CoreError::ValidationError(
                "Date sequence must not be empty".into(),
            ));
        }

        let last_idx = dates.len() - 1;
        let mut records = Vec::with_capacity(catalog.total_ships() * dates.len());

        for class in catalog.classes() {
            for ship in &class.ships {
                for (idx, date) in dates.iter().enumerate() {
                    let price = if idx == last_idx {
                        match anchors.current(ship) {
                            Some(current) => current,
                            None => Self::offset_price(anchors, ship, rng)?,
                        }
                    } else {
                        Self::offset_price(anchors, ship, rng)?
                    };

                    records.push(PriceRecord {
                        class: class.id.clone(),
                        ship: ship.clone(),
                        date: *date,
                        price,
                    });
                }
            }
        }

        debug!(records = records.len(), "generated synthetic price history");
        Ok(PriceHistory::new(records))
    }

    fn offset_price<R: Rng>(
        anchors: &AnchorPrices,
        ship: &str,
        rng: &mut R,
    ) -> Result<f64, CoreError> {
        let base = anchors.base(ship).ok_or_else(|| CoreError::MissingAnchorPrice {
            ship: ship.to_string(),
        })?;
        let offset = rng.gen_range(OFFSET_MIN..=OFFSET_MAX);
        Ok(base + f64::from(offset))
    }
}

impl Default for HistoryService {
    fn default() -> Self {
        Self::new()
    }
}
