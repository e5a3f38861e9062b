// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Golden-file comparison.
//!
//! Files are compared as sequences of lines. `\r\n` and `\n` are the same
//! line ending; everything else, including a lone `\r`, trailing spaces,
//! and whether the last line is terminated, must match exactly.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::Serialize;
use similar::TextDiff;

/// One logical line and whether a newline ended it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    pub content: &'a [u8],
    pub terminated: bool,
}

/// Iterator over the lines of a byte buffer.
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.iter().position(|&b| b == b'\n') {
            Some(end) => {
                let raw = &self.rest[..end];
                self.rest = &self.rest[end + 1..];
                let content = raw.strip_suffix(b"\r").unwrap_or(raw);
                Some(Line {
                    content,
                    terminated: true,
                })
            }
            None => {
                let content = self.rest;
                self.rest = &[];
                Some(Line {
                    content,
                    terminated: false,
                })
            }
        }
    }
}

pub fn lines(bytes: &[u8]) -> Lines<'_> {
    Lines { rest: bytes }
}

/// Rewrite every `\r\n` as `\n`. Borrows when there is nothing to change.
pub fn normalize_newlines(bytes: &[u8]) -> Cow<'_, [u8]> {
    if !bytes.windows(2).any(|w| w == b"\r\n") {
        return Cow::Borrowed(bytes);
    }
    let mut out = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter().copied().peekable();
    while let Some(b) = iter.next() {
        if b == b'\r' && iter.peek() == Some(&b'\n') {
            continue;
        }
        out.push(b);
    }
    Cow::Owned(out)
}

pub fn contents_match(a: &[u8], b: &[u8]) -> bool {
    lines(a).eq(lines(b))
}

/// 1-based number of the first line that differs, counting a missing line
/// as a difference.
pub fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    let mut left = lines(a);
    let mut right = lines(b);
    let mut number = 1;
    loop {
        match (left.next(), right.next()) {
            (None, None) => return None,
            (l, r) if l != r => return Some(number),
            _ => number += 1,
        }
    }
}

/// Result of checking a captured output against its reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Comparison {
    Match,
    Mismatch { line: usize },
    OutputUnreadable { path: PathBuf, reason: String },
    ReferenceUnreadable { path: PathBuf, reason: String },
}

impl Comparison {
    pub fn is_match(&self) -> bool {
        matches!(self, Comparison::Match)
    }

    /// Explanation for a comparison that could not be made at all.
    pub fn problem(&self) -> Option<String> {
        match self {
            Comparison::OutputUnreadable { path, reason } => {
                Some(format!("cannot read output {}: {}", path.display(), reason))
            }
            Comparison::ReferenceUnreadable { path, reason } => {
                Some(format!("cannot read reference {}: {}", path.display(), reason))
            }
            Comparison::Match | Comparison::Mismatch { .. } => None,
        }
    }
}

/// Compare `output` with `reference`. Unreadable files count as mismatches.
pub async fn compare_files(output: &Path, reference: &Path) -> Comparison {
    let actual = match tokio::fs::read(output).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return Comparison::OutputUnreadable {
                path: output.to_path_buf(),
                reason: e.to_string(),
            }
        }
    };
    let expected = match tokio::fs::read(reference).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return Comparison::ReferenceUnreadable {
                path: reference.to_path_buf(),
                reason: e.to_string(),
            }
        }
    };
    match first_difference(&actual, &expected) {
        None => Comparison::Match,
        Some(line) => Comparison::Mismatch { line },
    }
}

/// Unified diff from `reference` to `output`, after newline normalization.
pub fn unified_diff(reference: &[u8], output: &[u8], reference_name: &str, output_name: &str) -> String {
    let reference = normalize_newlines(reference);
    let output = normalize_newlines(output);
    let reference = String::from_utf8_lossy(&reference);
    let output = String::from_utf8_lossy(&output);
    TextDiff::from_lines(reference.as_ref(), output.as_ref())
        .unified_diff()
        .header(reference_name, output_name)
        .to_string()
}

/// Read both files and diff them; `None` if either cannot be read.
pub async fn diff_files(output: &Path, reference: &Path) -> Option<String> {
    let actual = tokio::fs::read(output).await.ok()?;
    let expected = tokio::fs::read(reference).await.ok()?;
    Some(unified_diff(
        &expected,
        &actual,
        &reference.display().to_string(),
        &output.display().to_string(),
    ))
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
