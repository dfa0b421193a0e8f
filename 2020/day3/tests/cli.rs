use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2020-day3").unwrap();
    cmd.args(["-f", "sample.txt"]);

    cmd.assert().success().stdout("7\n");
}

#[test]
fn custom_slope_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2020-day3").unwrap();
    cmd.args(["-f", "sample.txt", "-r", "1", "-d", "2"]);

    cmd.assert().success().stdout("2\n");
}

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("aoc2020-day3").unwrap();
    cmd.args(["-f", "sample.txt", "-2"]);

    cmd.assert().success().stdout("336\n");
}

#[test]
fn zero_down_step_fails() {
    let mut cmd = Command::cargo_bin("aoc2020-day3").unwrap();
    cmd.args(["-f", "sample.txt", "-d", "0"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("down step"));
}

#[test]
fn missing_input_fails() {
    let mut cmd = Command::cargo_bin("aoc2020-day3").unwrap();
    cmd.args(["-f", "no-such-input.txt"]);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no-such-input.txt"));
}

#[test]
fn empty_input_fails() {
    let mut cmd = Command::cargo_bin("aoc2020-day3").unwrap();
    cmd.args(["-f", "empty.txt"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is empty"));
}
