// SPDX-License-Identifier: MIT

//! brief-core - Domain types for the briefs summary client.
//!
//! This crate provides the data model shared by the `briefs` CLI:
//!
//! - [`SummaryRecord`] - a press summary as served by the remote service
//! - [`Draft`] - the create/update payload, validated before any request
//! - [`RecordCache`] - the ordered in-memory mirror of the server's list
//! - [`Error`] - error types for all operations
//!
//! No I/O happens here; the network client and the terminal front end
//! live in the `briefs` crate.

pub mod cache;
pub mod error;
pub mod record;

pub use cache::RecordCache;
pub use error::{Error, Result};
pub use record::{Draft, SummaryRecord};
