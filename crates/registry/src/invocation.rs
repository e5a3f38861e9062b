// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structured command invocation.

use serde::Serialize;

/// A command to run: an executable plus its arguments.
///
/// Arguments are passed to the child verbatim. Only an invocation built with
/// [`Invocation::shell`] is handed to the platform shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    shell: bool,
}

impl Invocation {
    /// Invoke `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            shell: false,
        }
    }

    /// Run `line` through the platform shell (`sh -c` / `cmd /C`).
    pub fn shell(line: impl Into<String>) -> Self {
        Self {
            program: line.into(),
            args: Vec::new(),
            shell: true,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The executable, or the whole command line for shell invocations.
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn is_shell(&self) -> bool {
        self.shell
    }

    /// Display form, e.g. `rtest -v`.
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            return self.program.clone();
        }
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.command_line())
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
