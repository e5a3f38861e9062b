// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for run-tests integration tests.

#![allow(dead_code)]

use std::path::Path;
use tempfile::TempDir;

/// A scratch directory standing in for a freshly built test tree.
pub struct BuildDir {
    pub dir: TempDir,
}

impl BuildDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.path().join(name), contents).unwrap();
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).unwrap()
    }

    /// Write an executable shell script named `name`.
    #[cfg(unix)]
    pub fn script(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Stand-ins for the four builtin tests, all passing, with CRLF
    /// references for the compare tests.
    #[cfg(unix)]
    pub fn passing_build(&self) {
        self.script("wtest", "exit 0");
        self.script("rtest", "printf 'face 0\\nface 1\\n'");
        self.script("ftest", "printf 'filtered\\n'");
        self.script("halftest", "exit 0");
        self.write("rtestok.dat", "face 0\r\nface 1\r\n");
        self.write("ftestok.dat", "filtered\n");
    }
}
