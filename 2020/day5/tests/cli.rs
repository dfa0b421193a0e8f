use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2020-day5").unwrap();
    cmd.args(["-f", "sample.txt"]);

    cmd.assert().success().stdout("820\n");
}

#[test]
fn part2_without_gap_fails() {
    let mut cmd = Command::cargo_bin("aoc2020-day5").unwrap();
    cmd.args(["-f", "sample.txt", "-2"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(str::contains("missing seat"));
}
