// SPDX-License-Identifier: MIT

//! Core record types for the briefs summary client.
//!
//! A [`SummaryRecord`] is the entity the remote service manages: a short
//! headline plus a free-form body. Records are created server-side
//! (directly or by the regenerate operation) and the id is always
//! assigned by the server.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A press summary as stored by the remote service.
///
/// A record only exists client-side after the server has confirmed it,
/// so `id` is always present here. Unsaved form state lives in the CLI's
/// editor form, not in this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Server-assigned identifier, unique across the record set.
    pub id: u64,
    /// Short description of the summary. Never empty.
    pub headline: String,
    /// Full summary text. May be empty; embedded line breaks are
    /// preserved verbatim.
    pub body: String,
}

/// The create/update wire payload.
///
/// Drafts never carry an id; the server assigns one on create and the
/// target id goes in the URL on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub headline: String,
    pub body: String,
}

impl Draft {
    /// Creates a new draft from raw user input.
    pub fn new(headline: impl Into<String>, body: impl Into<String>) -> Self {
        Draft {
            headline: headline.into(),
            body: body.into(),
        }
    }

    /// Validates and normalizes the draft.
    ///
    /// The headline is trimmed and must be non-empty afterwards; the
    /// body is kept verbatim (line breaks included).
    pub fn validate(self) -> Result<Draft> {
        let headline = self.headline.trim();
        if headline.is_empty() {
            return Err(Error::HeadlineRequired);
        }
        Ok(Draft {
            headline: headline.to_string(),
            body: self.body,
        })
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
