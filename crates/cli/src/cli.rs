// SPDX-License-Identifier: MIT

//! Command-line surface for the `briefs` binary.

use clap::{Parser, Subcommand};

/// Terminal client for the press-summary service.
#[derive(Parser, Debug)]
#[command(name = "briefs")]
#[command(about = "Manage press summaries kept by the summary service")]
#[command(version)]
pub struct Cli {
    /// Base URL of the summary service (overrides BRIEFS_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all summaries
    List,

    /// Show a single summary
    Show {
        /// Summary id
        id: u64,
    },

    /// Create a new summary
    New {
        /// Headline for the new summary (prompted for if omitted)
        #[arg(long)]
        headline: Option<String>,

        /// Body text; use \n for line breaks (prompted for if omitted)
        #[arg(long)]
        body: Option<String>,
    },

    /// Edit an existing summary
    Edit {
        /// Summary id
        id: u64,

        /// Replacement headline (prompted for if omitted)
        #[arg(long)]
        headline: Option<String>,

        /// Replacement body (current body kept if omitted interactively)
        #[arg(long)]
        body: Option<String>,
    },

    /// Delete a summary
    Delete {
        /// Summary id
        id: u64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Regenerate the summary set from the source feeds
    ///
    /// This asks the server to re-ingest its feeds and rebuild every
    /// summary. It can take a while; the refreshed list is shown once
    /// it completes.
    Refresh,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
