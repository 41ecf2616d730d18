// SPDX-License-Identifier: MIT

//! One module per subcommand. Each exposes `run` for production wiring
//! and a `run_impl` that accepts an injected controller for testing.

pub mod delete;
pub mod edit;
pub mod list;
pub mod new;
pub mod refresh;
pub mod show;

use crate::config::Config;
use crate::controller::Controller;
use crate::display::TableRenderer;
use crate::error::{Error, Result};
use crate::notify::TerminalSink;
use crate::remote::HttpApi;

/// The controller as wired for production use.
pub type CliController = Controller<HttpApi, TerminalSink, TableRenderer>;

/// Build a controller talking to the configured service.
pub fn build_controller(config: &Config) -> Result<CliController> {
    let api = HttpApi::new(config.base_url.as_str()).map_err(|e| Error::Client(e.to_string()))?;
    Ok(Controller::new(
        api,
        TerminalSink::new(),
        TableRenderer::new(),
    ))
}

/// Collapse a controller failure into [`Error::Reported`].
///
/// The controller has already surfaced the failure through the notice
/// sink; all that's left is exiting non-zero.
pub(crate) fn reported<T, E>(result: std::result::Result<T, E>) -> Result<T> {
    result.map_err(|_| Error::Reported)
}
