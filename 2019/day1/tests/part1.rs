use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("day1_part1").unwrap();
    cmd.arg("tests/data/sample.txt");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("4 modules"))
        .stdout(predicate::str::contains("34241 units of fuel"));
}

#[test]
fn part1_fails_with_bad_mass() {
    let mut cmd = Command::cargo_bin("day1_part1").unwrap();
    cmd.arg("tests/data/bad_mass.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}
