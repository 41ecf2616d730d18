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
async fn regenerates_then_shows_the_fresh_list() {
    let api = ScriptedApi::new();
    api.queue_regenerate(Ok(()));
    api.queue_list(Ok(vec![record(1, "fresh", "a")]));
    let ctrl = Controller::new(api, MemorySink::new(), RenderLog::new());

    run_impl(&ctrl).await.unwrap();

    assert_eq!(ctrl.api().calls(), vec![Call::Regenerate, Call::List]);
    assert_eq!(ctrl.renderer().last(), Some(vec![record(1, "fresh", "a")]));
}

#[tokio::test]
async fn failed_regenerate_exits_quietly() {
    let api = ScriptedApi::new();
    api.queue_regenerate(Err(ApiError::ServerFailure {
        status: 500,
        message: "ingest crashed".to_string(),
    }));
    let ctrl = Controller::new(api, MemorySink::new(), RenderLog::new());

    let err = run_impl(&ctrl).await.unwrap_err();

    assert!(matches!(err, Error::Reported));
}
