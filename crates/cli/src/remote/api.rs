// SPDX-License-Identifier: MIT

//! The summary service API trait and its error taxonomy.
//!
//! Trait methods return boxed futures so the trait stays
//! dyn-compatible and implementations can be swapped for test doubles.
//! Futures are not `Send`: the client runs on a single-threaded
//! runtime and doubles are free to use `RefCell` internally.

use std::future::Future;
use std::pin::Pin;

use brief_core::{Draft, SummaryRecord};

/// Error type for remote API operations.
///
/// Every failed request is classified into exactly one of these; the
/// controller decides how each class is surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server reports no record under the addressed id.
    #[error("summary {id} not found")]
    NotFound { id: u64 },

    /// The server rejected the request payload.
    #[error("the server rejected the request: {0}")]
    ValidationRejected(String),

    /// Any other non-success response.
    #[error("server error ({status}): {message}")]
    ServerFailure { status: u16, message: String },

    /// The request could not be completed at all.
    #[error("request failed: {0}")]
    TransportFailure(String),
}

/// Result type for remote API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Boxed future returned by [`Api`] methods.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = ApiResult<T>> + 'a>>;

/// The summary service's CRUD surface.
pub trait Api {
    /// Fetch the full summary list.
    fn list(&self) -> ApiFuture<'_, Vec<SummaryRecord>>;

    /// Fetch a single summary by id.
    fn get(&self, id: u64) -> ApiFuture<'_, SummaryRecord>;

    /// Create a summary; the server assigns and returns the id.
    fn create(&self, draft: Draft) -> ApiFuture<'_, SummaryRecord>;

    /// Replace the summary under `id` and return the updated record.
    fn update(&self, id: u64, draft: Draft) -> ApiFuture<'_, SummaryRecord>;

    /// Delete the summary under `id`.
    fn delete(&self, id: u64) -> ApiFuture<'_, ()>;

    /// Ask the server to regenerate its record set from the source
    /// feeds. Long-running by design: the contract is "eventually
    /// succeeds or fails", so callers must not impose a short timeout.
    fn regenerate(&self) -> ApiFuture<'_, ()>;
}

/// Classify a non-success response.
///
/// `id` is the addressed record for id-targeted operations; a 404 on
/// an un-addressed path (bad base URL, say) is a server failure, not a
/// missing record.
pub(crate) fn classify(status: u16, body: &str, id: Option<u64>) -> ApiError {
    match (status, id) {
        (404, Some(id)) => ApiError::NotFound { id },
        (400 | 422, _) => ApiError::ValidationRejected(recover_message(status, body)),
        _ => ApiError::ServerFailure {
            status,
            message: recover_message(status, body),
        },
    }
}

/// Recover a human-readable message from an error response body.
///
/// The service answers with its structured error template
/// (`{timestamp, status, error, path}`) or a plain `{message}` object;
/// older deployments return raw text. Probe in that order, then fall
/// back to the status line.
pub(crate) fn recover_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
        if let Some(message) = value.get("error").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    format!("HTTP status {status}")
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
