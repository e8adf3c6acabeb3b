use std::io::Write;

use assert_cmd::Command;

#[test]
fn fmt_reads_from_a_file_argument() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "select 1").unwrap();

    Command::cargo_bin("sqlfmt")
        .unwrap()
        .arg("fmt")
        .arg(file.path())
        .assert()
        .success()
        .stdout("SELECT\n  1\n");
}

#[test]
fn fmt_reads_from_stdin_when_no_path_is_given() {
    Command::cargo_bin("sqlfmt")
        .unwrap()
        .arg("fmt")
        .write_stdin("select 1")
        .assert()
        .success()
        .stdout("SELECT\n  1\n");
}

#[test]
fn fmt_rejects_an_unknown_dialect() {
    Command::cargo_bin("sqlfmt")
        .unwrap()
        .arg("fmt")
        .arg("--dialect")
        .arg("not-a-dialect")
        .write_stdin("select 1")
        .assert()
        .failure();
}

#[test]
fn check_succeeds_on_already_formatted_input() {
    Command::cargo_bin("sqlfmt")
        .unwrap()
        .arg("check")
        .write_stdin("SELECT\n  1")
        .assert()
        .success();
}

#[test]
fn check_fails_on_input_that_would_be_reformatted() {
    Command::cargo_bin("sqlfmt")
        .unwrap()
        .arg("check")
        .write_stdin("select 1")
        .assert()
        .failure();
}
