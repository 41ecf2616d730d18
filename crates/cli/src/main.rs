// SPDX-License-Identifier: MIT

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use briefrs::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = briefrs::run(cli) {
        // Controller failures were already surfaced through the notice
        // sink; only report errors the user has not seen yet.
        if !matches!(e, briefrs::Error::Reported) {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}
