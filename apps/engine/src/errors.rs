use thiserror::Error;

use crate::abilities::DIMENSION_COUNT;

/// Engine-level error type.
///
/// Per-record problems inside a recommendation call (a malformed answer, a
/// career with a bad requirement vector) are skipped and logged rather than
/// surfaced here. `EngineError` covers the conditions that are allowed to
/// fail hard: catalog parsing at startup and programmatic vector
/// construction.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("expected {DIMENSION_COUNT} ability dimensions, got {got}")]
    DimensionMismatch { got: usize },

    #[error("ability vector component is not a finite number")]
    InvalidComponent,

    #[error("duplicate career name in catalog: {0}")]
    DuplicateCareer(String),

    #[error("career catalog failed to parse: {0}")]
    CatalogParse(#[from] serde_json::Error),
}
