// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `Error:` / `Warning:` diagnostics.
//!
//! Diagnostics never share a stream with the test trace. The binary sends
//! them to stderr; tests hand in a buffer.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// The harness itself cannot continue
    Error,
    /// One test could not be run or compared; the run goes on
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Severity::Error => "\x1b[31m",
            Severity::Warning => "\x1b[33m",
        }
    }
}

/// Line-oriented diagnostic sink, colored when the target is a terminal.
pub struct Diagnostics<W: Write> {
    writer: W,
    color: bool,
}

impl Diagnostics<io::Stderr> {
    pub fn stderr() -> Self {
        let color = io::stderr().is_terminal();
        Self::new(io::stderr(), color)
    }
}

impl<W: Write> Diagnostics<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    pub fn error(&mut self, msg: impl Display) {
        self.emit(Severity::Error, msg);
    }

    pub fn warning(&mut self, msg: impl Display) {
        self.emit(Severity::Warning, msg);
    }

    /// Write one diagnostic. Failures are dropped: there is nowhere left
    /// to report them.
    pub fn emit(&mut self, severity: Severity, msg: impl Display) {
        let _ = if self.color {
            writeln!(
                self.writer,
                "{}{}: {}{}",
                severity.color(),
                severity.label(),
                msg,
                RESET
            )
        } else {
            writeln!(self.writer, "{}: {}", severity.label(), msg)
        };
        let _ = self.writer.flush();
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Print an error message to stderr.
pub fn print_error(msg: impl Display) {
    Diagnostics::stderr().error(msg);
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
