// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The ordered, read-only test catalog.

use std::path::PathBuf;

use serde::Serialize;

use crate::{Invocation, SpecError, TestKind, TestSpec};

/// Program name, plus `(output, reference)` for compare tests.
const BUILTIN: [(&str, Option<(&str, &str)>); 4] = [
    ("wtest", None),
    ("rtest", Some(("rtest.dat", "rtestok.dat"))),
    ("ftest", Some(("ftest.dat", "ftestok.dat"))),
    ("halftest", None),
];

/// Ordered list of tests. There is no way to mutate it once built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    tests: Vec<TestSpec>,
}

impl Registry {
    /// The harness's own catalog: `wtest`, `rtest`, `ftest`, `halftest`.
    pub fn builtin() -> Self {
        let tests = BUILTIN
            .iter()
            .map(|(program, paths)| {
                let kind = match paths {
                    None => TestKind::Bare,
                    Some((output, reference)) => TestKind::Compare {
                        output: PathBuf::from(output),
                        reference: PathBuf::from(reference),
                    },
                };
                TestSpec::from_parts(Invocation::new(*program), kind)
            })
            .collect();
        Self { tests }
    }

    /// Build a registry from an explicit list, keeping its order.
    pub fn from_specs(tests: Vec<TestSpec>) -> Result<Self, SpecError> {
        for spec in &tests {
            spec.validate()?;
        }
        Ok(Self { tests })
    }

    /// Every test, in declaration order.
    pub fn all_tests(&self) -> &[TestSpec] {
        &self.tests
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestSpec> {
        self.tests.iter()
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a TestSpec;
    type IntoIter = std::slice::Iter<'a, TestSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
