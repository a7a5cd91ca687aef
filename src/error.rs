//! Error types for mercato query operations.

use thiserror::Error;

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MercatoError>;

/// Errors returned by mercato query operations.
///
/// The failure surface is deliberately small: queries are total over their
/// input collections, so the only thing that can go wrong is a scalar
/// parameter outside its valid domain. Such errors are raised before any
/// evaluation starts; callers never receive partial output.
#[derive(Debug, Error)]
pub enum MercatoError {
    /// A scalar parameter was outside its valid domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
