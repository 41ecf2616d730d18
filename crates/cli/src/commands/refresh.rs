// SPDX-License-Identifier: MIT

use crate::config::Config;
use crate::controller::Controller;
use crate::display::Renderer;
use crate::error::Result;
use crate::notify::NoticeSink;
use crate::remote::Api;

use super::{build_controller, reported};

pub async fn run(config: &Config) -> Result<()> {
    let ctrl = build_controller(config)?;
    run_impl(&ctrl).await
}

/// Regenerate reloads and renders the fresh list itself, so this
/// command sends no list request of its own.
pub(crate) async fn run_impl<A: Api, N: NoticeSink, R: Renderer>(
    ctrl: &Controller<A, N, R>,
) -> Result<()> {
    reported(ctrl.regenerate().await)
}

#[cfg(test)]
#[path = "refresh_tests.rs"]
mod tests;
