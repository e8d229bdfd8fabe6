// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module checks the behavior of the `knapsack` executable.

use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("knapsack").unwrap()
}

fn resource(id: &str) -> String {
    format!("{}/tests/resources/knapsack/{}", env!("CARGO_MANIFEST_DIR"), id)
}

#[test]
fn solve_items_from_the_command_line() {
    cmd()
        .args(["solve", "--capacity", "50", "10:60", "20:100", "30:120"])
        .assert()
        .success()
        .stdout("Maximum Value: 220\nID 2: Weight = 20, Value = 100\nID 3: Weight = 30, Value = 120\n");
}

#[test]
fn solve_an_instance_file() {
    let file = resource("twins.kp");
    cmd()
        .args(["solve", "--file", file.as_str(), "--strategy", "rolling"])
        .assert()
        .success()
        .stdout(contains("Maximum Value: 20"));
}

#[test]
fn the_capacity_flag_overrides_the_file() {
    let file = resource("classic.kp");
    cmd()
        .args(["solve", "--file", file.as_str(), "-c", "10"])
        .assert()
        .success()
        .stdout("Maximum Value: 60\nID 1: Weight = 10, Value = 60\n");
}

#[test]
fn solve_as_json() {
    cmd()
        .args(["solve", "--json", "-c", "10", "5:10", "5:10"])
        .assert()
        .success()
        .stdout(contains("\"optimal_value\": 20"));
}

#[test]
fn a_negative_capacity_is_reported_not_crashed_on() {
    cmd()
        .args(["solve", "--capacity", "-1", "1:1"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("invalid capacity -1"));
}

#[test]
fn a_negative_weight_is_reported_with_its_id() {
    cmd()
        .args(["solve", "-c", "10", "-1:5"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("invalid item 1"));
}

#[test]
fn an_unaddressable_capacity_is_reported_not_crashed_on() {
    for strategy in ["auto", "table", "rolling"] {
        cmd()
            .args(["solve", "-s", strategy, "-c", "9223372036854775807", "1:1"])
            .assert()
            .failure()
            .code(1)
            .stderr(contains("invalid capacity 9223372036854775807"));
    }
}

#[test]
fn a_capacity_too_large_to_allocate_is_reported_not_crashed_on() {
    // 2^60 - 2: one row is addressable, but cannot be allocated
    cmd()
        .args(["solve", "-s", "rolling", "-c", "1152921504606846974", "1:1"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("invalid capacity 1152921504606846974"));
}

#[test]
fn a_file_announcing_too_many_items_is_reported_not_crashed_on() {
    let file = resource("huge_count.kp");
    cmd()
        .args(["solve", "--file", file.as_str()])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("1000000000000000000 items were announced but 1 were found"));
}

#[test]
fn garbage_is_reported_as_invalid_input() {
    cmd()
        .args(["solve", "-c", "ten", "1:1"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("invalid input"));
}

#[test]
fn interactive_session() {
    cmd()
        .arg("interactive")
        .write_stdin("capacity 50\nadd 10 60\nadd 20 100\nadd oops\nadd 30 120\nsolve\nquit\n")
        .assert()
        .success()
        .stdout(contains("error: invalid input"))
        .stdout(contains("Maximum Value: 220\nID 2: Weight = 20, Value = 100\nID 3: Weight = 30, Value = 120\n"));
}
