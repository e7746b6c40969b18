/*!
 Errors that can happen when reading typed values out of a decoded property list.
*/

use thiserror::Error;

/// Errors that can happen when looking up keys in a [`Dictionary`](crate::xml::models::Dictionary)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("Expected key {0}, found nothing!")]
    MissingKey(String),
    #[error("Invalid data found at {0}, expected {1}")]
    InvalidType(String, String),
}
