// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;

mod cli;
use cli::Cli;

fn setup_tracing(verbose: u8) {
    let default = match verbose {
        0 => "settee=warn",
        1 => "settee=info",
        2 => "settee=debug",
        _ => "settee=trace",
    };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    if let Err(e) = cli::commands::run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
