// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::exec::ExecOutcome;
use crate::result::RunResult;
use regress_registry::{Invocation, TestSpec};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_exec_env_prepends_by_default() {
    let env = exec_env(&Cli::default());
    let first = std::env::split_paths(&env.search_path().unwrap()).next();
    assert_eq!(first, Some(PathBuf::from(".")));
    assert!(env.work_dir().is_none());
}

#[test]
fn test_exec_env_flags() {
    let cli = Cli {
        no_path_prepend: true,
        dir: Some(PathBuf::from("/tmp/work")),
        ..Cli::default()
    };
    let env = exec_env(&cli);
    let expected = ExecEnv::new(std::env::var_os(PATH_VAR)).search_path().unwrap();
    assert_eq!(env.search_path().unwrap(), expected);
    assert_eq!(env.work_dir(), Some(std::path::Path::new("/tmp/work")));
}

#[test]
fn test_list_plain() {
    let mut out = Vec::new();
    list(&Registry::builtin(), false, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "wtest\nrtest > rtest.dat\nftest > ftest.dat\nhalftest\n"
    );
}

#[test]
fn test_list_json() {
    let mut out = Vec::new();
    list(&Registry::builtin(), true, &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 4);
    assert_eq!(json[2]["reference"], "ftestok.dat");
}

#[tokio::test]
async fn test_write_summary() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("summary.json");
    let spec = TestSpec::bare(Invocation::new("false"));
    let summary = Summary::from_results(&[RunResult::new(&spec, ExecOutcome::Exited { code: 1 }, None)]);

    write_summary(&summary, &path).await.unwrap();

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["failed"], serde_json::json!(["false"]));
}

#[tokio::test]
async fn test_write_summary_to_missing_dir_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join("summary.json");
    let err = write_summary(&Summary::new(), &path).await.unwrap_err();
    assert!(matches!(err, HarnessError::SummaryFile { .. }));
    assert!(err.to_string().contains("summary.json"));
}

#[tokio::test]
async fn test_run_rejects_missing_work_dir() {
    let cli = Cli {
        dir: Some(PathBuf::from("/definitely/not/a/regress/dir")),
        ..Cli::default()
    };
    let err = run(&cli).await.unwrap_err();
    assert!(matches!(err, HarnessError::MissingWorkDir(_)));
}
