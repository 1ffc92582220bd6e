//! Command-line behaviour: exit codes, output files, summary formats and logging.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HEADER: &str = "#CHROM\tPOS\tID\tallele1\tallele2\n";

fn setup(rows: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let refs = dir.path().join("ref");
    fs::create_dir(&refs).unwrap();
    fs::write(refs.join("chr1.fa"), ">chr1\nACGTACGTAC\nGTACG\n").unwrap();

    let input = dir.path().join("in.tsv");
    fs::write(&input, format!("{HEADER}{rows}")).unwrap();
    (dir, input, refs)
}

fn refalt(input: &Path, output: &Path, refs: &Path) -> Command {
    let mut cmd = Command::cargo_bin("refalt").unwrap();
    cmd.arg("-i")
        .arg(input)
        .arg("-o")
        .arg(output)
        .arg("-r")
        .arg(refs)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_convert_writes_output_and_summary() {
    let (dir, input, refs) = setup("1\t1\trs1\tG\tA\n1\t2\trs2\tA\tT\n");
    let output = dir.path().join("out.tsv");

    refalt(&input, &output, &refs)
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion Summary"))
        .stdout(predicate::str::contains("Allele mismatch: 1"));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\n1\t1\trs1\tA\tG\n"
    );
}

#[test]
fn test_rejections_are_logged_as_warnings() {
    let (dir, input, refs) = setup("1\t2\trs2\tA\tT\n");
    let output = dir.path().join("out.tsv");

    refalt(&input, &output, &refs)
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN"))
        .stderr(predicate::str::contains("1:2:rs2"));
}

#[test]
fn test_no_fileformat_line() {
    let (dir, input, refs) = setup("1\t1\trs1\tA\tC\n");
    let output = dir.path().join("out.tsv");

    refalt(&input, &output, &refs)
        .arg("--no-fileformat-line")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "#CHROM\tPOS\tID\tREF\tALT\n1\t1\trs1\tA\tC\n"
    );
}

#[test]
fn test_json_summary() {
    let (dir, input, refs) = setup("1\t1\trs1\tA\tC\n1\t99\trs2\tA\tC\n");
    let output = dir.path().join("out.tsv");

    let assert = refalt(&input, &output, &refs)
        .args(["--format", "json", "--quiet"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["stats"]["total"], 2);
    assert_eq!(json["stats"]["resolved"], 1);
    assert_eq!(json["stats"]["out_of_bounds"], 1);
    assert_eq!(json["reference_files_opened"], 1);
    assert!(json["finished_at"].is_string());
}

#[test]
fn test_tsv_summary() {
    let (dir, input, refs) = setup("1\t1\trs1\tA\tC\n");
    let output = dir.path().join("out.tsv");

    refalt(&input, &output, &refs)
        .args(["--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("total\tresolved\tmismatched"))
        .stdout(predicate::str::contains("\n1\t1\t0\t0"));
}

#[test]
fn test_bad_header_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let refs = dir.path().join("ref");
    fs::create_dir(&refs).unwrap();
    let input = dir.path().join("in.tsv");
    fs::write(&input, "#CHROM\tPOS\tID\tREF\tALT\n1\t1\trs1\tA\tC\n").unwrap();
    let output = dir.path().join("out.tsv");

    refalt(&input, &output, &refs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unexpected header"));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_fails() {
    let (dir, _input, refs) = setup("");
    let output = dir.path().join("out.tsv");

    refalt(&dir.path().join("absent.tsv"), &output, &refs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
    assert!(!output.exists());
}

#[test]
fn test_missing_reference_dir_fails() {
    let (dir, input, _refs) = setup("1\t1\trs1\tA\tC\n");
    let output = dir.path().join("out.tsv");

    refalt(&input, &output, &dir.path().join("no_refs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Reference directory does not exist"));
    assert!(!output.exists());
}

#[test]
fn test_log_file() {
    let (dir, input, refs) = setup("1\t1\trs1\tA\tC\n1\t1\trs2\tT\tC\n");
    let output = dir.path().join("out.tsv");
    let log = dir.path().join("run.log");

    refalt(&input, &output, &refs)
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success();

    let log = fs::read_to_string(&log).unwrap();
    assert!(log.contains("Processing"));
    assert!(log.contains("neither allele matches reference base A"));
    assert!(log.contains("Finished: 2 records, 1 resolved, 1 mismatched"));
}

#[test]
fn test_requires_arguments() {
    Command::cargo_bin("refalt")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--input"));
}
