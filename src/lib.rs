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


//! # Knapsack DP
//! This crate provides an exact solver for the 0/1 knapsack problem: given the
//! capacity of a sack and a sequence of items (each of which has a weight and
//! a value), it finds the maximum total value that can be packed without
//! exceeding the capacity, along with the exact subset of items that achieves
//! it. Each item is either packed whole or left out.
//!
//! The problem is solved by tabulation. The cell `(i, w)` of the table holds
//! the best value that can be packed in a sack of capacity `w` using the first
//! `i` items only. Walking the table backwards then tells which items were
//! packed. Time and memory are in `O(n * capacity)`: this is pseudo
//! polynomial, a large capacity means a large table even with few items.
//!
//! ## Quick Example
//! ```
//! # use knapsack_dp::*;
//! let solution = solve(50, &[(10, 60), (20, 100), (30, 120)]).unwrap();
//!
//! assert_eq!(220, solution.optimal_value);
//! assert_eq!(vec![Ordinal(2), Ordinal(3)], solution.selected);
//!
//! // invalid inputs are refused, never clamped
//! assert_eq!(Err(Error::InvalidCapacity(-1)), solve(-1, &[(1, 1)]));
//! ```
//!
//! ## Choosing a solver
//! `solve` validates its input and uses the `TableSolver`. Whenever memory is
//! a concern, build a `Problem` and hand it over to a `RollingSolver` (or let
//! an `AutoSolver` decide). All solvers report the very same solution.
//! ```
//! # use knapsack_dp::*;
//! let problem = Problem::new(10, &[(5, 10), (5, 10)]).unwrap();
//! let solver  = AutoSolver::default();
//!
//! assert_eq!(Ok(20), solver.best_value(&problem));
//! assert_eq!(vec![Ordinal(1), Ordinal(2)], solver.solve(&problem).unwrap().selected);
//! ```
//!
//! ## Hosts
//! The `io_utils`, `report` and `session` modules, along with the
//! `ItemStore`, are what a host needs to collect items from a user (or a
//! file) and show the outcome. The `knapsack` binary is such a host.

mod common;
mod abstraction;
mod implementation;
mod store;

pub mod io_utils;
pub mod report;
pub mod session;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
pub use store::*;
pub use report::{render, OutputFormat, ReportConfig, ReportConfigBuilder};

/// Validates the given capacity and items, then computes an optimal packing
/// with the `TableSolver`. This is a pure function: nothing is kept between
/// two calls.
///
/// # Errors
/// * `Error::InvalidCapacity` when the capacity is negative, or when its
///   table cannot be addressed or allocated,
/// * `Error::InvalidItem` (with the 1-based ordinal of the first culprit)
///   when an item has a negative weight or value,
/// * `Error::ValueOverflow` when the values sum up beyond `u64::MAX`.
pub fn solve(capacity: i64, items: &[(i64, i64)]) -> Result<Solution, Error> {
    let problem = Problem::new(capacity, items)?;
    TableSolver.solve(&problem)
}
