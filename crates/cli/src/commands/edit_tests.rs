// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::display::recorder::RenderLog;
use crate::error::Error;
use crate::notify::recorder::MemorySink;
use crate::remote::test_helpers::{record, Call, ScriptedApi};
use crate::remote::ApiError;

#[tokio::test]
async fn updates_through_the_form_id() {
    let api = ScriptedApi::new();
    api.queue_update(Ok(record(2, "revised", "body")));
    let ctrl = Controller::new(api, MemorySink::new(), RenderLog::new());

    let form = EditorForm {
        id: Some(2),
        headline: "revised".to_string(),
        body: "body".to_string(),
    };

    run_impl(&ctrl, &form).await.unwrap();

    assert_eq!(
        ctrl.api().calls(),
        vec![Call::Update(2, brief_core::Draft::new("revised", "body"))]
    );
}

#[tokio::test]
async fn rejected_update_exits_quietly() {
    let api = ScriptedApi::new();
    api.queue_update(Err(ApiError::ValidationRejected("too long".to_string())));
    let ctrl = Controller::new(api, MemorySink::new(), RenderLog::new());

    let form = EditorForm {
        id: Some(2),
        headline: "revised".to_string(),
        body: "body".to_string(),
    };

    let err = run_impl(&ctrl, &form).await.unwrap_err();

    assert!(matches!(err, Error::Reported));
}
