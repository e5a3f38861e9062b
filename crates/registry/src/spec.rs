// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test specification model.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::Invocation;

/// How a test's outcome is judged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TestKind {
    /// Pass iff the command exits with status 0.
    Bare,
    /// Stdout is captured to `output`, which must then match `reference`
    /// line for line.
    Compare { output: PathBuf, reference: PathBuf },
}

/// One entry of the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestSpec {
    invocation: Invocation,
    #[serde(flatten)]
    kind: TestKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("test has an empty program")]
    EmptyProgram,

    #[error("compare test `{0}` has an empty output path")]
    EmptyOutputPath(String),

    #[error("compare test `{0}` has an empty reference path")]
    EmptyReferencePath(String),
}

impl TestSpec {
    /// A test judged by exit status only.
    pub fn bare(invocation: Invocation) -> Self {
        Self {
            invocation,
            kind: TestKind::Bare,
        }
    }

    /// A test whose stdout goes to `output` and is compared with `reference`.
    pub fn compare(
        invocation: Invocation,
        output: impl Into<PathBuf>,
        reference: impl Into<PathBuf>,
    ) -> Result<Self, SpecError> {
        let spec = Self {
            invocation,
            kind: TestKind::Compare {
                output: output.into(),
                reference: reference.into(),
            },
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Assemble a spec without validation. Only for literals known to be
    /// well formed.
    pub(crate) fn from_parts(invocation: Invocation, kind: TestKind) -> Self {
        Self { invocation, kind }
    }

    /// Check the kind/path invariant and that there is something to run.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.invocation.program().trim().is_empty() {
            return Err(SpecError::EmptyProgram);
        }
        if let TestKind::Compare { output, reference } = &self.kind {
            if output.as_os_str().is_empty() {
                return Err(SpecError::EmptyOutputPath(self.name()));
            }
            if reference.as_os_str().is_empty() {
                return Err(SpecError::EmptyReferencePath(self.name()));
            }
        }
        Ok(())
    }

    /// The command line this test runs, used as its name in reports.
    pub fn name(&self) -> String {
        self.invocation.command_line()
    }

    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    pub fn kind(&self) -> &TestKind {
        &self.kind
    }

    pub fn output_path(&self) -> Option<&Path> {
        match &self.kind {
            TestKind::Compare { output, .. } => Some(output),
            TestKind::Bare => None,
        }
    }

    pub fn reference_path(&self) -> Option<&Path> {
        match &self.kind {
            TestKind::Compare { reference, .. } => Some(reference),
            TestKind::Bare => None,
        }
    }

    /// The command as it would read with its redirect, e.g. `rtest > rtest.dat`.
    pub fn redirect_line(&self) -> String {
        match &self.kind {
            TestKind::Bare => self.name(),
            TestKind::Compare { output, .. } => {
                format!("{} > {}", self.name(), output.display())
            }
        }
    }
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
