// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wires the command line to the runner.

use std::io::{self, IsTerminal, Write};

use regress_registry::Registry;

use crate::cli::Cli;
use crate::env::{ExecEnv, PATH_VAR};
use crate::error::HarnessError;
use crate::report::Reporter;
use crate::result::{exit_codes, Summary};
use crate::runner::Runner;

/// Build the child environment the flags ask for.
pub fn exec_env(cli: &Cli) -> ExecEnv {
    let mut env = if cli.no_path_prepend {
        ExecEnv::new(std::env::var_os(PATH_VAR))
    } else {
        ExecEnv::from_parent()
    };
    if let Some(dir) = &cli.dir {
        env = env.with_work_dir(dir);
    }
    env
}

/// Run the harness and return the process exit code.
pub async fn run(cli: &Cli) -> Result<i32, HarnessError> {
    let registry = Registry::builtin();
    let stdout = io::stdout();

    if cli.list {
        list(&registry, cli.json, &mut stdout.lock())?;
        return Ok(exit_codes::SUCCESS);
    }

    if let Some(dir) = &cli.dir {
        if !dir.is_dir() {
            return Err(HarnessError::MissingWorkDir(dir.clone()));
        }
    }

    let color = !cli.no_color && stdout.is_terminal();
    let runner = Runner::new(registry, exec_env(cli)).with_diff(cli.diff);
    let mut reporter = Reporter::new(stdout, color);
    let summary = match runner.run(&mut reporter).await {
        Ok(summary) => summary,
        Err(HarnessError::TraceInterrupted { summary, source }) => {
            reporter.warning(format_args!("test trace was cut short: {}", source));
            summary
        }
        Err(e) => return Err(e),
    };

    if let Some(path) = &cli.summary_json {
        write_summary(&summary, path).await?;
    }
    Ok(summary.exit_code())
}

/// One test per line, or the whole registry as JSON.
pub fn list<W: Write>(registry: &Registry, json: bool, out: &mut W) -> Result<(), HarnessError> {
    if json {
        let text = serde_json::to_string_pretty(registry).map_err(|source| {
            HarnessError::Serialize {
                what: "test list",
                source,
            }
        })?;
        writeln!(out, "{}", text)?;
    } else {
        for spec in registry {
            writeln!(out, "{}", spec.redirect_line())?;
        }
    }
    Ok(())
}

pub async fn write_summary(summary: &Summary, path: &std::path::Path) -> Result<(), HarnessError> {
    let text = serde_json::to_string_pretty(summary).map_err(|source| HarnessError::Serialize {
        what: "summary",
        source,
    })?;
    tokio::fs::write(path, text)
        .await
        .map_err(|source| HarnessError::SummaryFile {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
