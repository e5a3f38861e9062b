// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test registry for the run-tests regression harness.
//!
//! A registry is a fixed, ordered list of [`TestSpec`] values. Each spec is
//! either a bare command, judged by its exit status alone, or a compare
//! command whose standard output must also match a golden reference file.

mod catalog;
mod invocation;
mod spec;

pub use catalog::Registry;
pub use invocation::Invocation;
pub use spec::{SpecError, TestKind, TestSpec};
