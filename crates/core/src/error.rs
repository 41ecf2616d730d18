// SPDX-License-Identifier: MIT

//! Error types for brief-core operations.

use thiserror::Error;

/// All possible errors that can occur in brief-core operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("a headline is required\n  hint: the headline may not be empty or whitespace-only")]
    HeadlineRequired,
}

/// A specialized Result type for brief-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
