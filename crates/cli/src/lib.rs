// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regression-test harness.
//!
//! Runs the tests of a [`Registry`](regress_registry::Registry) one after
//! another, compares captured output against golden reference files, prints
//! a line-oriented trace, and reports success through the exit code.
//!
//! ```text
//! Running: rtest > rtest.dat
//! Comparing: rtest.dat rtestok.dat
//! Passed
//!
//! Finished 4 tests,
//! All tests passed
//! ```

pub mod app;
pub mod cli;
pub mod compare;
pub mod env;
pub mod error;
pub mod exec;
pub mod output_diagnostic;
pub mod report;
pub mod result;
pub mod runner;

pub use regress_registry as registry;
