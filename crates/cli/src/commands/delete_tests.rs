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
async fn yes_flag_skips_the_prompt() {
    let api = ScriptedApi::new();
    api.queue_list(Ok(vec![record(1, "only", "entry")]));
    api.queue_delete(Ok(()));
    let ctrl = Controller::new(api, MemorySink::new(), RenderLog::new());
    ctrl.load().await.unwrap();

    run_impl(&ctrl, 1, true).await.unwrap();

    assert_eq!(ctrl.api().calls(), vec![Call::List, Call::Delete(1)]);
    assert!(ctrl.records().is_empty());
}

#[tokio::test]
async fn already_deleted_exits_quietly() {
    let api = ScriptedApi::new();
    api.queue_delete(Err(ApiError::NotFound { id: 1 }));
    let ctrl = Controller::new(api, MemorySink::new(), RenderLog::new());

    let err = run_impl(&ctrl, 1, true).await.unwrap_err();

    assert!(matches!(err, Error::Reported));
}
