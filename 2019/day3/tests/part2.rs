use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn part2_output_right_answer() {
    for (input, steps) in [
        ("tests/data/sample1.txt", "30"),
        ("tests/data/sample2.txt", "610"),
        ("tests/data/sample3.txt", "410"),
    ] {
        let mut cmd = Command::cargo_bin("day3_part2").unwrap();
        cmd.arg(input);
        cmd.assert()
            .success()
            .stdout(predicate::str::contains(format!("cross point is {}.", steps)));
    }
}

#[test]
fn part2_fails_with_malformed_token() {
    let mut cmd = Command::cargo_bin("day3_part2").unwrap();
    cmd.arg("tests/data/bad_token.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("line 1"))
        .stderr(predicate::str::contains("Malformed path token(\"X5\")"));
}

#[test]
fn part2_fails_without_cross_point() {
    let mut cmd = Command::cargo_bin("day3_part2").unwrap();
    cmd.arg("tests/data/apart.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("don't have any cross point"));
}

#[test]
fn part2_fails_with_empty_input() {
    let mut cmd = Command::cargo_bin("day3_part2").unwrap();
    cmd.arg("tests/data/empty.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing path data for wire 1"));
}
