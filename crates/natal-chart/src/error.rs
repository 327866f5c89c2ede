use thiserror::Error;

/// Reasons a render request cannot produce a full chart.
///
/// None of these cross the public rendering API as an `Err`; the renderer
/// turns them into the error document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartRequestError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid field value: {0}")]
    InvalidFieldValue(String),
    #[error("Expected 12 house cusps, found {found}")]
    IncompleteHouses { found: usize },
}
