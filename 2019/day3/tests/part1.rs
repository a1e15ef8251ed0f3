use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn part1_output_right_answer() {
    for (input, dist) in [
        ("tests/data/sample1.txt", "6"),
        ("tests/data/sample2.txt", "159"),
        ("tests/data/sample3.txt", "135"),
    ] {
        let mut cmd = Command::cargo_bin("day3_part1").unwrap();
        cmd.arg(input);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains(format!("closest cross point is {}.", dist)));
    }
}

#[test]
fn part1_fails_without_cross_point() {
    let mut cmd = Command::cargo_bin("day3_part1").unwrap();
    cmd.arg("tests/data/apart.txt");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("don't have any cross point"));
}

#[test]
fn part1_fails_with_missing_wire() {
    let mut cmd = Command::cargo_bin("day3_part1").unwrap();
    cmd.arg("tests/data/one_wire.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing path data for wire 2"));
}

#[test]
fn part1_fails_with_missing_file() {
    let mut cmd = Command::cargo_bin("day3_part1").unwrap();
    cmd.arg("tests/data/no_such_file.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open given file"));
}

#[test]
fn part1_fails_with_blank_second_line() {
    let mut cmd = Command::cargo_bin("day3_part1").unwrap();
    cmd.arg("tests/data/blank_second_line.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing path data for wire 2"));
}
