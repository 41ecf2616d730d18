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

pub(crate) async fn run_impl<A: Api, N: NoticeSink, R: Renderer>(
    ctrl: &Controller<A, N, R>,
) -> Result<()> {
    reported(ctrl.load().await)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
