use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("day1_part2").unwrap();
    cmd.arg("tests/data/sample.txt");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("51316 units of fuel"));
}
