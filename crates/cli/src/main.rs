// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! run-tests binary entry point.

use clap::Parser;

use regress::cli::Cli;
use regress::output_diagnostic::print_error;
use regress::result::exit_codes;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let code = match regress::app::run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            print_error(e);
            exit_codes::FAILED
        }
    };
    std::process::exit(code);
}
