// SPDX-License-Identifier: MIT

//! briefrs: terminal client for the press-summary service.
//!
//! The crate is organized around a small sync controller
//! ([`controller::Controller`]) that keeps a local cache of summary
//! records consistent with the remote service: every mutation goes to
//! the server first, and only a confirmed success touches the cache.
//! The surrounding modules are the adapters it is wired to: the HTTP
//! client ([`remote`]), the table/detail renderer ([`display`]), the
//! notice sink ([`notify`]), and the clap command surface ([`cli`],
//! [`commands`]).

pub mod cli;
pub mod colors;
pub mod commands;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod form;
pub mod notify;
pub mod prompt;
pub mod remote;

pub use cli::{Cli, Command};
pub use error::{Error, Result};

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the parsed command line to completion.
///
/// Everything executes on a single-threaded runtime: controller
/// futures are not `Send`, and the cooperative model keeps cache
/// mutation and rendering atomic between suspension points.
pub fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);

    let config = Config::resolve(cli.url.as_deref());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(dispatch(&config, cli.command))
}

async fn dispatch(config: &Config, command: Command) -> Result<()> {
    match command {
        Command::List => commands::list::run(config).await,
        Command::Show { id } => commands::show::run(config, id).await,
        Command::New { headline, body } => commands::new::run(config, headline, body).await,
        Command::Edit { id, headline, body } => {
            commands::edit::run(config, id, headline, body).await
        }
        Command::Delete { id, yes } => commands::delete::run(config, id, yes).await,
        Command::Refresh => commands::refresh::run(config).await,
    }
}

/// Install the tracing subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "briefrs=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
