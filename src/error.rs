//! Error types for breakdown
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::entities::TwoParamsError;
use crate::domain::services::PathResolutionError;
use crate::domain::value_objects::TypeCreationError;

/// Result type alias for breakdown operations
pub type BreakdownResult<T> = Result<T, BreakdownError>;

/// Top-level error for a validate-and-resolve run
#[derive(Error, Debug)]
pub enum BreakdownError {
    /// Directive or layer rejected while building `TwoParams`
    #[error(transparent)]
    Params(#[from] TwoParamsError),

    /// A single type value rejected by the factory
    #[error(transparent)]
    TypeCreation(#[from] TypeCreationError),

    #[error(transparent)]
    Path(#[from] PathResolutionError),

    /// Profile could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}
