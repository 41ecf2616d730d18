// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

#[test]
fn new_form_is_empty_and_new() {
    let form = EditorForm::new();
    assert!(form.is_new());
    assert_eq!(form.headline, "");
    assert_eq!(form.body, "");
}

#[test]
fn edit_form_prefills_from_record() {
    let record = SummaryRecord {
        id: 12,
        headline: "Election results".to_string(),
        body: "Turnout was high.".to_string(),
    };
    let form = EditorForm::edit(&record);

    assert!(!form.is_new());
    assert_eq!(form.id, Some(12));
    assert_eq!(form.headline, "Election results");
    assert_eq!(form.body, "Turnout was high.");
}
