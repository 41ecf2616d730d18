// SPDX-License-Identifier: MIT

//! The sync controller: orchestrates remote calls, cache mutation, and
//! user-facing reporting.
//!
//! Every operation follows the same contract: call the remote API, and
//! only on a confirmed success mutate the cache, re-render, and emit a
//! success notice. On failure only the notice sink is invoked and the
//! cache is left exactly as it was; there is no optimistic mutation and
//! no automatic retry, and the controller stays usable after any
//! failure.
//!
//! # Concurrency
//!
//! The controller is built for a single-threaded cooperative runtime:
//! operations are `async fn(&self)` and may interleave at await points,
//! but the segment between "response received" and "render completed"
//! contains no suspension point, so cache mutation plus render is
//! atomic with respect to other tasks. Concurrent operations are not
//! serialized against each other: a delete and an update racing on the
//! same id are both allowed in flight, the later-completing response
//! wins, and an update landing after a delete is silently dropped by
//! [`RecordCache::replace`]. Once a request is sent it runs to
//! completion; there is no cancellation.

use std::cell::RefCell;

use tracing::debug;

use brief_core::{Draft, RecordCache, SummaryRecord};

use crate::display::Renderer;
use crate::form::EditorForm;
use crate::notify::{Notice, NoticeSink, Severity};
use crate::remote::{Api, ApiError};

/// Error type for [`Controller::save`]: the one operation that can fail
/// before reaching the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    /// Client-side precondition failed; no request was sent.
    #[error("{0}")]
    Invalid(#[from] brief_core::Error),

    #[error("{0}")]
    Api(#[from] ApiError),
}

/// What [`Controller::delete`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record was deleted remotely and removed from the cache.
    Deleted,
    /// The user declined the confirmation; nothing was sent.
    Declined,
}

/// Orchestration core tying the remote API, the local cache, the
/// notice sink, and the render adapter together.
///
/// Operations report their own failures through the notice sink and
/// additionally return the classified error so callers can pick an
/// exit status; the returned error must never be used to second-guess
/// the cache, which has already been settled by the time an operation
/// returns.
pub struct Controller<A: Api, N: NoticeSink, R: Renderer> {
    api: A,
    notices: N,
    renderer: R,
    cache: RefCell<RecordCache>,
}

impl<A: Api, N: NoticeSink, R: Renderer> Controller<A, N, R> {
    pub fn new(api: A, notices: N, renderer: R) -> Self {
        Controller {
            api,
            notices,
            renderer,
            cache: RefCell::new(RecordCache::new()),
        }
    }

    /// The injected API client (used by tests to inspect calls).
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The injected notice sink.
    pub fn notices(&self) -> &N {
        &self.notices
    }

    /// The injected renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// A snapshot of the current cache contents.
    pub fn records(&self) -> Vec<SummaryRecord> {
        self.cache.borrow().records().to_vec()
    }

    /// Full load: fetch the server's list and adopt it wholesale.
    ///
    /// On failure the cache keeps its previous (possibly stale)
    /// contents and nothing is re-rendered.
    pub async fn load(&self) -> Result<(), ApiError> {
        debug!("loading summary list");
        match self.api.list().await {
            Ok(records) => {
                let mut cache = self.cache.borrow_mut();
                cache.replace_all(records);
                self.renderer.render(cache.records());
                Ok(())
            }
            Err(e) => {
                self.notify(Severity::Danger, format!("failed to load summaries: {e}"));
                Err(e)
            }
        }
    }

    /// Fetch one record for read-only display. Does not touch the cache.
    pub async fn view(&self, id: u64) -> Result<SummaryRecord, ApiError> {
        debug!(id, "viewing summary");
        match self.api.get(id).await {
            Ok(record) => Ok(record),
            Err(e @ ApiError::NotFound { .. }) => {
                self.notify(Severity::Warning, format!("summary {id} not found"));
                Err(e)
            }
            Err(e) => {
                self.notify(Severity::Danger, format!("failed to fetch summary {id}: {e}"));
                Err(e)
            }
        }
    }

    /// Open an empty editor form in "new" mode. No network involved.
    pub fn prepare_create(&self) -> EditorForm {
        EditorForm::new()
    }

    /// Fetch the record and open an editor form pre-filled in "edit"
    /// mode. On failure no form is returned.
    pub async fn prepare_edit(&self, id: u64) -> Result<EditorForm, ApiError> {
        debug!(id, "preparing edit");
        match self.api.get(id).await {
            Ok(record) => Ok(EditorForm::edit(&record)),
            Err(e) => {
                self.notify(
                    Severity::Danger,
                    format!("could not load summary {id} for editing: {e}"),
                );
                Err(e)
            }
        }
    }

    /// Save the form: create when it has no id, update otherwise.
    ///
    /// The headline must be non-empty after trimming; a violation emits
    /// a warning and sends no request. The form is only borrowed, so a
    /// failed save loses none of the entered values.
    pub async fn save(&self, form: &EditorForm) -> Result<SummaryRecord, SaveError> {
        let draft = match Draft::new(form.headline.clone(), form.body.clone()).validate() {
            Ok(draft) => draft,
            Err(e) => {
                self.notify(Severity::Warning, "a headline is required");
                return Err(e.into());
            }
        };

        let result = match form.id {
            Some(id) => {
                debug!(id, "updating summary");
                self.api.update(id, draft).await
            }
            None => {
                debug!("creating summary");
                self.api.create(draft).await
            }
        };

        match result {
            Ok(saved) => {
                {
                    let mut cache = self.cache.borrow_mut();
                    if form.id.is_some() {
                        // No-op if a racing delete already removed it.
                        cache.replace(saved.clone());
                    } else {
                        cache.insert(saved.clone());
                    }
                    self.renderer.render(cache.records());
                }
                let message = if form.id.is_some() {
                    "summary updated"
                } else {
                    "summary created"
                };
                self.notify(Severity::Success, message);
                Ok(saved)
            }
            Err(e) => {
                let verb = if form.id.is_some() { "update" } else { "create" };
                self.notify(Severity::Danger, format!("failed to {verb} summary: {e}"));
                Err(e.into())
            }
        }
    }

    /// Delete a record after an explicit confirmation step.
    ///
    /// `confirm` blocks for the user's decision before any request is
    /// sent; declining is a no-op with no network call. A `NotFound`
    /// from the server means someone else already deleted the record:
    /// that is reported as a warning and treated as a failure, and the
    /// cache is never trimmed speculatively.
    pub async fn delete(
        &self,
        id: u64,
        confirm: impl FnOnce() -> bool,
    ) -> Result<DeleteOutcome, ApiError> {
        if !confirm() {
            debug!(id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        debug!(id, "deleting summary");
        match self.api.delete(id).await {
            Ok(()) => {
                let mut cache = self.cache.borrow_mut();
                cache.remove(id);
                self.renderer.render(cache.records());
                drop(cache);
                self.notify(Severity::Success, "summary deleted");
                Ok(DeleteOutcome::Deleted)
            }
            Err(e @ ApiError::NotFound { .. }) => {
                self.notify(Severity::Warning, format!("summary {id} is already gone"));
                Err(e)
            }
            Err(e) => {
                self.notify(Severity::Danger, format!("failed to delete summary {id}: {e}"));
                Err(e)
            }
        }
    }

    /// Trigger server-side regeneration, then reload.
    ///
    /// A blocking busy indicator is shown for the whole operation; on
    /// success the fresh list is loaded and rendered *before* the
    /// indicator clears. On failure the cache keeps its pre-regenerate
    /// state.
    pub async fn regenerate(&self) -> Result<(), ApiError> {
        debug!("requesting regeneration");
        self.notices
            .busy_start("regenerating summaries from the source feeds");

        match self.api.regenerate().await {
            Ok(()) => {
                let loaded = self.load().await;
                self.notices.busy_end();
                match loaded {
                    Ok(()) => {
                        self.notify(Severity::Success, "summaries regenerated");
                        Ok(())
                    }
                    // load() already reported the failure.
                    Err(e) => Err(e),
                }
            }
            Err(e) => {
                self.notices.busy_end();
                self.notify(
                    Severity::Danger,
                    format!("failed to regenerate summaries: {e}"),
                );
                Err(e)
            }
        }
    }

    fn notify(&self, severity: Severity, message: impl Into<String>) {
        self.notices.notify(Notice::auto(severity, message));
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
