// wordveil/tests/line_buffered_tests.rs
//! Integration tests for the `--line-buffered` streaming mode.
//!
//! Streaming mode filters each line independently and writes it back
//! verbatim, so the output framing must always mirror the input framing.

use anyhow::Result;
#[allow(unused_imports)]
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

use assert_cmd::Command;

fn run_line_buffered(input: &[u8], extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("wordveil").unwrap();
    cmd.arg("filter").arg("--line-buffered");
    cmd.args(extra_args);
    cmd.write_stdin(input.to_vec());
    cmd.assert()
}

fn write_wordlist(keywords: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for keyword in keywords {
        writeln!(file, "{}", keyword).unwrap();
    }
    file
}

#[test]
fn line_buffered_filters_each_line() -> Result<()> {
    let wordlist = write_wordlist(&["abc"]);
    let assert = run_line_buffered(
        b"first abc line\nclean line\nlast a-b-c line\n",
        &[
            "--no-default-keywords",
            "--wordlist",
            wordlist.path().to_str().unwrap(),
        ],
    )
    .success();

    assert_eq!(
        assert.get_output().stdout,
        b"first *** line\nclean line\nlast *** line\n".to_vec()
    );
    Ok(())
}

#[test]
fn line_buffered_preserves_missing_trailing_newline() -> Result<()> {
    let wordlist = write_wordlist(&["abc"]);
    let assert = run_line_buffered(
        b"ends with abc",
        &[
            "--no-default-keywords",
            "--wordlist",
            wordlist.path().to_str().unwrap(),
        ],
    )
    .success();

    assert_eq!(assert.get_output().stdout, b"ends with ***".to_vec());
    Ok(())
}

#[test]
fn line_buffered_empty_input_produces_empty_output() -> Result<()> {
    let assert = run_line_buffered(b"", &["--no-default-keywords"]).success();
    assert!(assert.get_output().stdout.is_empty());
    Ok(())
}

#[test]
fn line_buffered_reads_from_input_file() -> Result<()> {
    let dir = tempdir()?;
    let input_path = dir.path().join("stream.txt");
    fs::write(&input_path, "one password here\nand passwd there\n")?;

    let mut cmd = Command::cargo_bin("wordveil").unwrap();
    cmd.arg("filter")
        .arg("--line-buffered")
        .arg("--input-file")
        .arg(input_path.to_str().unwrap());

    cmd.assert()
        .success()
        .stdout(predicate::eq("one *** here\nand *** there\n"));
    Ok(())
}

#[test]
fn line_buffered_conflicts_with_diff() -> Result<()> {
    let mut cmd = Command::cargo_bin("wordveil").unwrap();
    cmd.arg("filter").arg("--line-buffered").arg("--diff");
    cmd.assert().failure();
    Ok(())
}
