//! End-to-end tests for the mutscreen binary.
//!
//! These run the compiled CLI against literal sequences and temporary input
//! files and check the console, JSON and TSV output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn mutscreen() -> Command {
    Command::cargo_bin("mutscreen").expect("binary should build")
}

/// Test the full text report for a small analysis
#[test]
fn test_analyze_text_report() {
    mutscreen()
        .args(["analyze", "ATGC", "ATGG", "ATGC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference sequence: ATGC"))
        .stdout(predicate::str::contains("Root: Seq #1 (Mutations: 1)"))
        .stdout(predicate::str::contains("    L--- Seq #2 (Mutations: 0)"))
        .stdout(predicate::str::contains(
            "Rank 1:\nSequence #2: ATGC\nMutations: 0\nSimilarity: 100.00%",
        ))
        .stdout(predicate::str::contains(
            "Rank 2:\nSequence #1: ATGG\nMutations: 1\nSimilarity: 75.00%",
        ))
        .stdout(predicate::str::contains("REF SEQUENCE: IS NORMAL"));
}

/// Test that equal mutation counts rank in tree order
#[test]
fn test_analyze_tie_order() {
    // counts 3, 1, 3, 2 against AAAA
    let output = mutscreen()
        .args([
            "analyze", "--no-screen", "--format", "tsv", "AAAA", "ATTT", "AAAT", "TTTA", "AATT",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let order: Vec<&str> = stdout
        .lines()
        .skip(1)
        .map(|line| line.split('\t').nth(1).unwrap())
        .collect();
    assert_eq!(order, vec!["2", "4", "1", "3"]);
}

/// Test that marker hits are reported per sequence
#[test]
fn test_analyze_reports_markers() {
    mutscreen()
        .args(["analyze", "TATGCTCGGAT", "TTTTTTTTTTT"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "REF SEQUENCE: INDICATES MUTATIONS IN GENE(S): PSEN1 (M146L)",
        ))
        .stdout(predicate::str::contains("SEQ 1: IS NORMAL"));
}

/// Test JSON output structure
#[test]
fn test_analyze_json() {
    let output = mutscreen()
        .args(["--format", "json", "analyze", "ATGC", "ATGG"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["reference"], "ATGC");
    assert_eq!(json["reference_length"], 4);
    assert_eq!(json["ranking"][0]["mutation_count"], 1);
    assert_eq!(json["ranking"][0]["similarity"], 75.0);
    assert_eq!(json["rank_tree"][0]["branch"], "root");
    assert_eq!(json["marker_tree"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["findings"][0]["subject"], "reference");
}

/// Test that a length mismatch is a failure naming the sequence
#[test]
fn test_analyze_length_mismatch() {
    mutscreen()
        .args(["analyze", "ATGC", "ATGG", "ATGCA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Sequence #2"))
        .stderr(predicate::str::contains("equal length (4 characters)"));
}

/// Test that an invalid alphabet is rejected
#[test]
fn test_analyze_invalid_alphabet() {
    mutscreen()
        .args(["analyze", "ATGC", "ATGN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid character 'N'"));

    mutscreen()
        .args(["analyze", "AUGC", "ATGC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid reference sequence"));
}

/// Test reading reference and candidates from files
#[test]
fn test_analyze_from_files() {
    let mut reference = NamedTempFile::with_suffix(".fa").unwrap();
    reference.write_all(b">ref\nATGC\n").unwrap();
    reference.flush().unwrap();

    let mut candidates = NamedTempFile::with_suffix(".txt").unwrap();
    candidates.write_all(b"# two candidates\nttgc\nATGC\n").unwrap();
    candidates.flush().unwrap();

    mutscreen()
        .arg("analyze")
        .arg(format!("@{}", reference.path().display()))
        .arg("--input")
        .arg(candidates.path())
        .arg("--no-tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequence #1: TTGC"))
        .stdout(predicate::str::contains("Rank 1:\nSequence #2: ATGC"))
        .stdout(predicate::str::contains("Tree Structure").not());
}

/// Test the screen subcommand
#[test]
fn test_screen() {
    mutscreen()
        .args(["screen", "CATGCTCGGAC", "ACGT"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "SEQ 1: INDICATES MUTATIONS IN GENE(S): PSEN1 (M146L)",
        ))
        .stdout(predicate::str::contains("SEQ 2: IS NORMAL"));
}

/// Test screening with a custom marker table
#[test]
fn test_screen_custom_markers() {
    let mut markers = NamedTempFile::with_suffix(".json").unwrap();
    markers
        .write_all(
            br#"{"version":"1.0.0","created_at":"now","markers":[{"sequence":"gattaca","gene":"TEST1"}]}"#,
        )
        .unwrap();
    markers.flush().unwrap();

    mutscreen()
        .args(["--format", "tsv", "screen", "CGATTACAG"])
        .arg("--markers")
        .arg(markers.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1\tflagged\tTEST1"));
}

/// Test listing and exporting the marker catalog
#[test]
fn test_markers_list_and_export() {
    mutscreen()
        .args(["markers", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PSEN1 (L286V)"))
        .stdout(predicate::str::contains("Total: 5 markers"));

    mutscreen()
        .args(["markers", "tree"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Root: ATGCCGTGCGCG (APOE)"));

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("markers.json");
    mutscreen()
        .args(["markers", "export"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 5 markers"));

    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(exported["markers"].as_array().map(Vec::len), Some(5));
}

/// Test the interactive session with piped answers, including a retry
#[test]
fn test_interactive() {
    mutscreen()
        .arg("interactive")
        .write_stdin("ATGC\n2\nATGCC\nATGG\nATGC\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Please re-enter"))
        .stdout(predicate::str::contains("Sequence #1: ATGG"))
        .stdout(predicate::str::contains("SEQ 2: IS NORMAL"));
}

/// Test that the interactive session honors TSV output
#[test]
fn test_interactive_tsv() {
    mutscreen()
        .args(["--format", "tsv", "interactive"])
        .write_stdin("ATGC\n2\nATGG\nATGC\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "rank\tindex\tmutations\tsimilarity\tgenes\tsequence\n",
        ))
        .stdout(predicate::str::contains("1\t2\t0\t100.00\tnormal\tATGC\n"))
        .stdout(predicate::str::contains("Reference sequence").not());
}

/// Test that a marker table with gap characters is rejected
#[test]
fn test_screen_rejects_gap_markers() {
    let mut markers = NamedTempFile::with_suffix(".json").unwrap();
    markers
        .write_all(
            br#"{"version":"1.0.0","created_at":"now","markers":[{"sequence":"A-T","gene":"GAP"}]}"#,
        )
        .unwrap();
    markers.flush().unwrap();

    mutscreen()
        .args(["screen", "CATG"])
        .arg("--markers")
        .arg(markers.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid marker 'A-T'"));
}
