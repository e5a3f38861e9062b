// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential test runner.
//!
//! Tests run one at a time in registry order. A failing test is recorded and
//! the run moves on, and so does a broken trace stream: its error is
//! returned only after the last test.

use std::io::Write;

use regress_registry::{Registry, TestKind, TestSpec};

use crate::compare::{self, Comparison};
use crate::env::ExecEnv;
use crate::error::HarnessError;
use crate::exec::{self, StdoutTarget};
use crate::report::Reporter;
use crate::result::{RunResult, Summary};

pub struct Runner {
    registry: Registry,
    env: ExecEnv,
    show_diff: bool,
}

impl Runner {
    pub fn new(registry: Registry, env: ExecEnv) -> Self {
        Self {
            registry,
            env,
            show_diff: false,
        }
    }

    /// Print a unified diff for each mismatching compare test.
    pub fn with_diff(mut self, show_diff: bool) -> Self {
        self.show_diff = show_diff;
        self
    }

    /// Run every test and write the trace and summary to `reporter`.
    pub async fn run<W: Write, D: Write>(
        &self,
        reporter: &mut Reporter<W, D>,
    ) -> Result<Summary, HarnessError> {
        let mut summary = Summary::new();
        for spec in self.registry.all_tests() {
            reporter.running(spec);
            let result = self.run_one(spec, reporter).await;
            reporter.outcome(result.passed());
            summary.record(&result);
        }
        reporter.summary(&summary);

        match reporter.take_error() {
            Some(source) => Err(HarnessError::TraceInterrupted { summary, source }),
            None => Ok(summary),
        }
    }

    async fn run_one<'a, W: Write, D: Write>(
        &self,
        spec: &'a TestSpec,
        reporter: &mut Reporter<W, D>,
    ) -> RunResult<'a> {
        let (output, reference) = match spec.kind() {
            TestKind::Bare => {
                let outcome = exec::run(spec.invocation(), &self.env, StdoutTarget::Inherit).await;
                if let Some(problem) = outcome.problem(&spec.name()) {
                    reporter.warning(problem);
                }
                return RunResult::new(spec, outcome, None);
            }
            TestKind::Compare { output, reference } => (output, reference),
        };

        let outcome = exec::run(spec.invocation(), &self.env, StdoutTarget::File(output)).await;
        if !outcome.success() {
            if let Some(problem) = outcome.problem(&spec.name()) {
                reporter.warning(problem);
            }
            return RunResult::new(spec, outcome, None);
        }

        reporter.comparing(spec);
        let output = self.env.resolve(output);
        let reference = self.env.resolve(reference);
        let comparison = compare::compare_files(&output, &reference).await;
        if let Some(problem) = comparison.problem() {
            reporter.warning(problem);
        }

        if self.show_diff && matches!(comparison, Comparison::Mismatch { .. }) {
            if let Some(diff) = compare::diff_files(&output, &reference).await {
                reporter.diff(&diff);
            }
        }

        RunResult::new(spec, outcome, Some(comparison))
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
