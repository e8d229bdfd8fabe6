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

//! This module is meant to test the correctness of the solvers on the
//! instances stored in the resources folder.

use std::path::PathBuf;

use knapsack_dp::{io_utils::{read_instance, ParseError}, *};

fn locate(id: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/knapsack/")
        .join(id)
}

fn problem(id: &str) -> Problem {
    read_instance(locate(id)).unwrap().problem().unwrap()
}

fn solve_id(id: &str) -> Solution {
    let problem  = problem(id);
    let solution = TableSolver.solve(&problem).unwrap();

    // all solvers must agree, down to the tie-breaks
    assert_eq!(solution, RollingSolver.solve(&problem).unwrap());
    assert_eq!(solution, AutoSolver::new(0).solve(&problem).unwrap());
    assert_eq!(solution.optimal_value, RollingSolver.best_value(&problem).unwrap());
    solution
}

#[test]
fn classic() {
    let sln = solve_id("classic.kp");
    assert_eq!(220, sln.optimal_value);
    assert_eq!(vec![Ordinal(2), Ordinal(3)], sln.selected);
}
#[test]
fn twins() {
    let sln = solve_id("twins.kp");
    assert_eq!(20, sln.optimal_value);
    assert_eq!(vec![Ordinal(1), Ordinal(2)], sln.selected);
}
#[test]
fn containers() {
    let sln = solve_id("containers.kp");
    assert_eq!(1410, sln.optimal_value);
    assert_eq!(vec![Ordinal(2), Ordinal(3), Ordinal(5), Ordinal(7)], sln.selected);
    assert_eq!(200, sln.total_weight);
}
#[test]
fn zeroes() {
    let sln = solve_id("zeroes.kp");
    assert_eq!(3, sln.optimal_value);
    assert_eq!(vec![Ordinal(2)], sln.selected);
    assert_eq!(0, sln.total_weight);
}
#[test]
fn negative() {
    let instance = read_instance(locate("negative.kp")).unwrap();
    let err = instance.problem().unwrap_err();
    assert_eq!(Error::InvalidItem { ordinal: Ordinal(2), weight: -1, value: 5 }, err);
}
#[test]
fn missing_file() {
    assert!(matches!(read_instance(locate("no_such_instance.kp")), Err(ParseError::Io(_))));
}
#[test]
fn containers_report() {
    let problem  = problem("containers.kp");
    let solution = TableSolver.solve(&problem).unwrap();
    let config   = ReportConfigBuilder::default().show_header(true).indent(2).build().unwrap();
    let expected = "\
Maximum Value: 1410
Selected Containers (ID, Weight, Value):
  ID 2: Weight = 60, Value = 390
  ID 3: Weight = 12, Value = 80
  ID 5: Weight = 33, Value = 240
  ID 7: Weight = 95, Value = 700
";
    assert_eq!(expected, render(&problem, &solution, &config).unwrap());
}
