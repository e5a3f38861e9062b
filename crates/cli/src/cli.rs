// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments. All optional; no flags runs the builtin catalog
//! in the current directory.

use std::path::PathBuf;

use clap::Parser;

/// Regression-test harness
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "run-tests", version, about = "Run the regression tests and compare golden output")]
pub struct Cli {
    /// Run tests in this directory instead of the current one
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Do not put `.` in front of PATH for the tests
    #[arg(long)]
    pub no_path_prepend: bool,

    /// Print a unified diff when output does not match its reference
    #[arg(long)]
    pub diff: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// List the tests and exit without running them
    #[arg(long)]
    pub list: bool,

    /// With --list, print the catalog as JSON
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Also write the run summary as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub summary_json: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
