// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Child-process environment override.
//!
//! The harness never mutates its own environment. Each child is given a
//! `PATH` with the override's directories in front of the parent's entries,
//! so executables built in the working directory shadow installed copies.

use std::env::JoinPathsError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Name of the search-path variable handed to children.
pub const PATH_VAR: &str = "PATH";

/// Directory prepended to the search path unless disabled.
pub const CURRENT_DIR: &str = ".";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecEnv {
    prepend: Vec<PathBuf>,
    base_path: Option<OsString>,
    work_dir: Option<PathBuf>,
}

impl ExecEnv {
    /// Override built on `base_path` with nothing prepended.
    pub fn new(base_path: Option<OsString>) -> Self {
        Self {
            prepend: Vec::new(),
            base_path,
            work_dir: None,
        }
    }

    /// The parent's `PATH` with `.` in front.
    pub fn from_parent() -> Self {
        Self::new(std::env::var_os(PATH_VAR)).with_prepend([CURRENT_DIR])
    }

    /// Add directories to search before the base path, in order.
    pub fn with_prepend<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.prepend.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Run children in `dir` and resolve relative paths against it.
    ///
    /// A relative `dir` is anchored to the harness's current directory here,
    /// since children are started inside `dir` and would otherwise resolve
    /// it a second time.
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.work_dir = Some(std::path::absolute(&dir).unwrap_or(dir));
        self
    }

    pub fn work_dir(&self) -> Option<&Path> {
        self.work_dir.as_deref()
    }

    /// The `PATH` value children see.
    pub fn search_path(&self) -> Result<OsString, JoinPathsError> {
        let base = self
            .base_path
            .as_deref()
            .map(|p| std::env::split_paths(p).collect::<Vec<_>>())
            .unwrap_or_default();
        std::env::join_paths(self.prepend.iter().cloned().chain(base))
    }

    /// Resolve `path` against the working directory, if one is set.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.work_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Locate `program` in the prepended directories.
    ///
    /// Relative entries such as `.` are taken relative to the working
    /// directory, not the harness's own. Anything not found there is left
    /// for the OS to look up on [`ExecEnv::search_path`].
    pub fn resolve_program(&self, program: &str) -> PathBuf {
        let as_path = Path::new(program);
        if as_path.components().count() != 1 || as_path.is_absolute() {
            return as_path.to_path_buf();
        }
        for dir in &self.prepend {
            let candidate = self.resolve(&dir.join(program));
            if is_executable(&candidate) {
                return candidate;
            }
            if !std::env::consts::EXE_SUFFIX.is_empty() {
                let mut with_suffix = candidate.into_os_string();
                with_suffix.push(std::env::consts::EXE_SUFFIX);
                let with_suffix = PathBuf::from(with_suffix);
                if is_executable(&with_suffix) {
                    return with_suffix;
                }
            }
        }
        as_path.to_path_buf()
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
