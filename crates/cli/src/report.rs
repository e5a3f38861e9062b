// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented run trace.
//!
//! Three kinds of line, in order: a start line per test, an outcome line per
//! test, and the closing summary. Every write is flushed so the trace
//! interleaves correctly with children writing to the same stdout.
//!
//! A failed trace write does not stop the run. The first error is kept and
//! later writes are still attempted; the runner collects it once every test
//! has run.

use std::fmt::Display;
use std::io::{self, Write};

use regress_registry::TestSpec;

use crate::output_diagnostic::Diagnostics;
use crate::result::Summary;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

pub struct Reporter<W: Write, D: Write = io::Stderr> {
    out: W,
    color: bool,
    diagnostics: Diagnostics<D>,
    error: Option<io::Error>,
}

impl<W: Write> Reporter<W> {
    /// Trace to `out`, diagnostics to stderr.
    pub fn new(out: W, color: bool) -> Self {
        Self::with_diagnostics(out, color, Diagnostics::stderr())
    }
}

impl<W: Write, D: Write> Reporter<W, D> {
    pub fn with_diagnostics(out: W, color: bool, diagnostics: Diagnostics<D>) -> Self {
        Self {
            out,
            color,
            diagnostics,
            error: None,
        }
    }

    /// `Running: <cmd>`, with the redirect for compare tests.
    pub fn running(&mut self, spec: &TestSpec) {
        let line = format!("Running: {}\n", spec.redirect_line());
        self.write(&line);
    }

    /// `Comparing: <output> <reference>`. No-op for bare tests.
    pub fn comparing(&mut self, spec: &TestSpec) {
        if let (Some(output), Some(reference)) = (spec.output_path(), spec.reference_path()) {
            let line = format!("Comparing: {} {}\n", output.display(), reference.display());
            self.write(&line);
        }
    }

    pub fn diff(&mut self, diff: &str) {
        self.write(diff);
        if !diff.is_empty() && !diff.ends_with('\n') {
            self.write("\n");
        }
    }

    /// `Passed` or `FAILED`, then a blank separator line.
    pub fn outcome(&mut self, passed: bool) {
        let (word, color) = if passed {
            ("Passed", GREEN)
        } else {
            ("FAILED", RED)
        };
        let line = if self.color {
            format!("{}{}{}\n\n", color, word, RESET)
        } else {
            format!("{}\n\n", word)
        };
        self.write(&line);
    }

    pub fn summary(&mut self, summary: &Summary) {
        let verdict = if summary.all_passed() {
            "All tests passed".to_string()
        } else {
            format!("{} tests FAILED", summary.failed_count())
        };
        let text = format!("Finished {} tests,\n{}\n", summary.total(), verdict);
        self.write(&text);
    }

    /// A per-test problem that does not belong in the trace.
    pub fn warning(&mut self, msg: impl Display) {
        self.diagnostics.warning(msg);
    }

    /// The first trace write error, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn into_parts(self) -> (W, D) {
        (self.out, self.diagnostics.into_inner())
    }

    fn write(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
