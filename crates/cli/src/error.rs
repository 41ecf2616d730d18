// SPDX-License-Identifier: MIT

//! Error types for the briefs CLI.

use thiserror::Error;

/// All possible errors that can bubble up to `main`.
///
/// Controller operations report their own failures through the notice
/// sink; commands translate those into [`Error::Reported`] so the exit
/// code is non-zero without printing the message twice.
#[derive(Debug, Error)]
pub enum Error {
    /// The failure was already shown to the user via the notice sink.
    #[error("operation failed")]
    Reported,

    #[error("failed to initialize http client: {0}")]
    Client(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
