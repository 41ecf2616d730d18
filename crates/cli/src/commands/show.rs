// SPDX-License-Identifier: MIT

use crate::config::Config;
use crate::controller::Controller;
use crate::display::{self, Renderer};
use crate::error::Result;
use crate::notify::NoticeSink;
use crate::remote::Api;

use super::{build_controller, reported};

pub async fn run(config: &Config, id: u64) -> Result<()> {
    let ctrl = build_controller(config)?;
    run_impl(&ctrl, id).await
}

pub(crate) async fn run_impl<A: Api, N: NoticeSink, R: Renderer>(
    ctrl: &Controller<A, N, R>,
    id: u64,
) -> Result<()> {
    let record = reported(ctrl.view(id).await)?;
    print!("{}", display::format_record_detail(&record));
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
