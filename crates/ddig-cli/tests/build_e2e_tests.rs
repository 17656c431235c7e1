//! End-to-end tests for the `ddig build` command
//!
//! These tests drive the installed binary over local fixture tables (no
//! network) and validate the produced bulk-import files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

fn write_table(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = String::from("DDInterID_A,Drug_A,DDInterID_B,Drug_B,Level\n");
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_build_from_local_tables() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();

    let a = write_table(data.path(), "ddinter_downloads_code_A.csv", &[
        "1,Asp,2,Ibu,Major",
    ]);
    let b = write_table(data.path(), "ddinter_downloads_code_B.csv", &[
        "2,Ibu,3,Par,Minor",
    ]);

    let mut cmd = Command::cargo_bin("ddig").unwrap();
    cmd.arg("build")
        .arg("--input")
        .arg(&a)
        .arg("--input")
        .arg(&b)
        .arg("--output")
        .arg(out.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3 drug node(s)"))
        .stdout(predicate::str::contains("2 interaction edge(s)"));

    let nodes = std::fs::read_to_string(out.path().join("nodes_drug.csv")).unwrap();
    assert_eq!(nodes.lines().count(), 4); // header + 3 nodes
    assert!(nodes.lines().next().unwrap().starts_with("id:ID"));

    let edges =
        std::fs::read_to_string(out.path().join("edges_drug_drug_interaction.csv")).unwrap();
    assert_eq!(edges.lines().count(), 3); // header + 2 edges
    assert!(edges.contains("Alimentary tract and metabolism"));
    assert!(edges.contains("Blood and blood forming organs"));

    assert!(out.path().join("neo4j-admin-import.sh").exists());
}

#[test]
fn test_build_rejects_unknown_category_code() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();

    let z = write_table(data.path(), "ddinter_downloads_code_Z.csv", &[
        "1,Asp,2,Ibu,Major",
    ]);

    let mut cmd = Command::cargo_bin("ddig").unwrap();
    cmd.arg("build")
        .arg("--input")
        .arg(&z)
        .arg("--output")
        .arg(out.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized category code 'Z'"));

    // A failed build leaves no usable node/edge output.
    assert!(!out.path().join("nodes_drug.csv").exists());
}

#[test]
fn test_missing_subcommand_exits_with_usage_error() {
    let mut cmd = Command::cargo_bin("ddig").unwrap();
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("subcommand is required"));
}
