// SPDX-License-Identifier: MIT

use crate::config::Config;
use crate::controller::{Controller, DeleteOutcome};
use crate::display::Renderer;
use crate::error::Result;
use crate::notify::NoticeSink;
use crate::prompt;
use crate::remote::Api;

use super::{build_controller, reported};

pub async fn run(config: &Config, id: u64, yes: bool) -> Result<()> {
    let ctrl = build_controller(config)?;
    reported(ctrl.load().await)?;
    run_impl(&ctrl, id, yes).await
}

pub(crate) async fn run_impl<A: Api, N: NoticeSink, R: Renderer>(
    ctrl: &Controller<A, N, R>,
    id: u64,
    yes: bool,
) -> Result<()> {
    let outcome = reported(
        ctrl.delete(id, || {
            yes || prompt::confirm(&format!("delete summary {id}?")).unwrap_or(false)
        })
        .await,
    )?;

    if outcome == DeleteOutcome::Declined {
        eprintln!("aborted");
    }
    Ok(())
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
