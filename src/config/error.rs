use thiserror::Error;

use crate::core::BoardError;

/// Errors that can occur while validating the game configuration.
///
/// Every variant is fatal: the game refuses to start.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// Board dimensions cannot be dealt in pairs.
    #[error("Invalid board: {0}")]
    Board(#[from] BoardError),
    /// Window has a non-positive side.
    #[error("Invalid window size: {width}x{height}")]
    InvalidWindowSize { width: i32, height: i32 },
}
