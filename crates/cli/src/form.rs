// SPDX-License-Identifier: MIT

//! Editor form state for the create/edit workflow.

use brief_core::SummaryRecord;

/// The state of the create/edit form.
///
/// `id: None` means "new" mode: saving creates a record and the server
/// assigns the id. With an id, saving updates that record in place.
///
/// Saving borrows the form, so a failed save leaves the entered values
/// intact for the user to retry or correct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorForm {
    pub id: Option<u64>,
    pub headline: String,
    pub body: String,
}

impl EditorForm {
    /// An empty form in "new" mode.
    pub fn new() -> Self {
        EditorForm::default()
    }

    /// A form pre-filled from an existing record, in "edit" mode.
    pub fn edit(record: &SummaryRecord) -> Self {
        EditorForm {
            id: Some(record.id),
            headline: record.headline.clone(),
            body: record.body.clone(),
        }
    }

    /// Whether saving will create rather than update.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
