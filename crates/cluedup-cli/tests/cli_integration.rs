//! End-to-end tests of the cluedup binary over real TSV files.

use std::io::Write;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cluedup"))
}

fn write_clue_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const SAMPLE: &str = "clue\tanswer\ttags\n\
wrote The Bell Jar and the collection Ariel\tSylvia Plath\tlit\n\
wrote The Bell Jar\tSylvia Plath\tlit\n\
wrote Crime and Punishment\tFyodor Dostoevsky\tlit\n";

#[test]
fn test_dedup_prunes_dominated_rows() {
    let file = write_clue_file(SAMPLE);
    let output = bin()
        .args(["dedup", "--no-prompt", "--skip-thresh", "0"])
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("clue\tanswer\ttags\n"));
    assert!(stdout.contains("wrote The Bell Jar and the collection Ariel"));
    assert!(!stdout.contains("wrote The Bell Jar\t"));
    assert!(stdout.contains("Fyodor Dostoevsky"));
}

#[test]
fn test_dedup_default_skip_thresh_keeps_rare_answers() {
    let file = write_clue_file(SAMPLE);
    let output = bin()
        .args(["dedup", "--no-prompt"])
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // Every answer occurs fewer than 3 times, so nothing is deleted.
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn test_dedup_writes_output_file() {
    let file = write_clue_file(SAMPLE);
    let out_dir = tempfile::tempdir().unwrap();
    let out_path = out_dir.path().join("deduped.tsv");

    let output = bin()
        .args(["dedup", "--no-prompt", "--skip-thresh", "0", "--output"])
        .arg(&out_path)
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let written = std::fs::read_to_string(&out_path).unwrap();
    assert!(written.starts_with("clue\tanswer\ttags\n"));
    assert_eq!(written.lines().count(), 3);
}

#[test]
fn test_subset_filters_by_answer_term() {
    let file = write_clue_file(SAMPLE);
    let output = bin()
        .args(["subset", "--ans-term", "plath"])
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
    assert!(!stdout.contains("Dostoevsky"));
}

#[test]
fn test_missing_input_fails_with_path() {
    let output = bin()
        .args(["dedup", "--no-prompt", "/no/such/clues.tsv"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("/no/such/clues.tsv"));
}

#[test]
fn test_version_subcommand() {
    let output = bin().arg("version").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("cluedup-cli"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
