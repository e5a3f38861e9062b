// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Child-process execution for a single test.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use regress_registry::Invocation;
use serde::Serialize;
use tokio::process::Command;

use crate::env::{ExecEnv, PATH_VAR};

/// Where a child's standard output goes.
#[derive(Clone, Copy, Debug)]
pub enum StdoutTarget<'a> {
    /// Share the harness's stdout.
    Inherit,
    /// Create or truncate this file (relative to the working directory).
    File(&'a Path),
}

/// How a child run ended. Every variant other than a zero exit is a
/// test failure; none of them stops the harness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExecOutcome {
    Exited { code: i32 },
    /// Terminated without an exit code (killed by a signal).
    Signaled,
    SpawnFailed { reason: String },
    WaitFailed { reason: String },
    /// The stdout capture file could not be created.
    OutputUnavailable { path: PathBuf, reason: String },
}

impl ExecOutcome {
    pub fn success(&self) -> bool {
        matches!(self, ExecOutcome::Exited { code: 0 })
    }

    pub fn code(&self) -> Option<i32> {
        match self {
            ExecOutcome::Exited { code } => Some(*code),
            _ => None,
        }
    }

    /// Human-readable explanation for anything that is not a plain exit.
    pub fn problem(&self, name: &str) -> Option<String> {
        match self {
            ExecOutcome::Exited { .. } => None,
            ExecOutcome::Signaled => Some(format!("`{}` was terminated by a signal", name)),
            ExecOutcome::SpawnFailed { reason } => {
                Some(format!("could not start `{}`: {}", name, reason))
            }
            ExecOutcome::WaitFailed { reason } => {
                Some(format!("lost track of `{}`: {}", name, reason))
            }
            ExecOutcome::OutputUnavailable { path, reason } => Some(format!(
                "cannot write output of `{}` to {}: {}",
                name,
                path.display(),
                reason
            )),
        }
    }
}

/// Run `invocation` to completion under `env`.
pub async fn run(invocation: &Invocation, env: &ExecEnv, stdout: StdoutTarget<'_>) -> ExecOutcome {
    let stdout = match stdout {
        StdoutTarget::Inherit => Stdio::inherit(),
        StdoutTarget::File(path) => {
            let path = env.resolve(path);
            match open_output(&path).await {
                Ok(stdio) => stdio,
                Err(e) => {
                    return ExecOutcome::OutputUnavailable {
                        path,
                        reason: e.to_string(),
                    }
                }
            }
        }
    };

    let mut command = match build_command(invocation, env) {
        Ok(command) => command,
        Err(reason) => return ExecOutcome::SpawnFailed { reason },
    };
    command.stdout(stdout).kill_on_drop(true);

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) => {
            return ExecOutcome::SpawnFailed {
                reason: e.to_string(),
            }
        }
    };

    match child.wait().await {
        Ok(status) => match status.code() {
            Some(code) => ExecOutcome::Exited { code },
            None => ExecOutcome::Signaled,
        },
        Err(e) => ExecOutcome::WaitFailed {
            reason: e.to_string(),
        },
    }
}

async fn open_output(path: &Path) -> std::io::Result<Stdio> {
    let file = tokio::fs::File::create(path).await?;
    Ok(Stdio::from(file.into_std().await))
}

fn build_command(invocation: &Invocation, env: &ExecEnv) -> Result<Command, String> {
    let mut command = if invocation.is_shell() {
        shell_command(invocation.program())
    } else {
        let mut command = Command::new(env.resolve_program(invocation.program()));
        command.args(invocation.arguments());
        command
    };

    let search_path = env.search_path().map_err(|e| e.to_string())?;
    command.env(PATH_VAR, search_path);
    if let Some(dir) = env.work_dir() {
        command.current_dir(dir);
    }
    Ok(command)
}

#[cfg(unix)]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(line);
    command
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(line);
    command
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
