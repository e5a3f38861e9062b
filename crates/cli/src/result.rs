// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-test results and the run summary.

use regress_registry::{TestKind, TestSpec};
use serde::Serialize;

use crate::compare::Comparison;
use crate::exec::ExecOutcome;

/// Process exit codes of the harness.
pub mod exit_codes {
    /// Every test passed
    pub const SUCCESS: i32 = 0;
    /// At least one test failed, or the harness could not report
    pub const FAILED: i32 = 1;
}

/// Outcome of one executed test. Borrows the spec it came from.
#[derive(Clone, Debug)]
pub struct RunResult<'a> {
    spec: &'a TestSpec,
    outcome: ExecOutcome,
    comparison: Option<Comparison>,
}

impl<'a> RunResult<'a> {
    pub fn new(spec: &'a TestSpec, outcome: ExecOutcome, comparison: Option<Comparison>) -> Self {
        Self {
            spec,
            outcome,
            comparison,
        }
    }

    pub fn spec(&self) -> &'a TestSpec {
        self.spec
    }

    pub fn outcome(&self) -> &ExecOutcome {
        &self.outcome
    }

    pub fn comparison(&self) -> Option<&Comparison> {
        self.comparison.as_ref()
    }

    /// The child's exit code, if it exited normally.
    pub fn exit_status(&self) -> Option<i32> {
        self.outcome.code()
    }

    /// Only meaningful for compare tests that were compared.
    pub fn content_mismatch(&self) -> bool {
        self.comparison.as_ref().is_some_and(|c| !c.is_match())
    }

    pub fn passed(&self) -> bool {
        if !self.outcome.success() {
            return false;
        }
        match self.spec.kind() {
            TestKind::Bare => true,
            TestKind::Compare { .. } => self.comparison.as_ref().is_some_and(Comparison::is_match),
        }
    }
}

/// Aggregate over a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    total: usize,
    failed_count: usize,
    failed: Vec<String>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_results(results: &[RunResult<'_>]) -> Self {
        let mut summary = Self::new();
        for result in results {
            summary.record(result);
        }
        summary
    }

    pub fn record(&mut self, result: &RunResult<'_>) {
        self.total += 1;
        if !result.passed() {
            self.failed_count += 1;
            self.failed.push(result.spec().name());
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn failed_count(&self) -> usize {
        self.failed_count
    }

    /// Names of failed tests, in run order.
    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed_count == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            exit_codes::SUCCESS
        } else {
            exit_codes::FAILED
        }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
