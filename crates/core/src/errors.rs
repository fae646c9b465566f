use thiserror::Error;

/// Unified error type for the entire royalstats-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Reference Data ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ── History Generation ──────────────────────────────────────────
    #[error("No base price anchor for ship '{ship}' — cannot generate its history")]
    MissingAnchorPrice { ship: String },

    // ── Aggregation ─────────────────────────────────────────────────
    #[error("No price records for class '{class}' on {date} — record set is inconsistent")]
    EmptyAggregationGroup {
        class: String,
        date: chrono::NaiveDate,
    },

    #[error("No price series named '{0}'")]
    SeriesNotFound(String),

    // ── Export ──────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
