// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors that stop the harness itself.
//!
//! Test failures are never errors; they are recorded in the summary.

use std::path::PathBuf;

use thiserror::Error;

use crate::result::Summary;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to write test trace: {0}")]
    Trace(#[from] std::io::Error),

    /// The trace could not be written. Every test still ran.
    #[error("test trace was cut short: {source}")]
    TraceInterrupted {
        summary: Summary,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write summary to {}: {source}", .path.display())]
    SummaryFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("working directory {} does not exist", .0.display())]
    MissingWorkDir(PathBuf),
}
