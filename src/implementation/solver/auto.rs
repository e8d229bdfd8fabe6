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

//! This module provides a solver that decides by itself whether the complete
//! table can be afforded.

use log::{debug, warn};

use crate::{Error, Problem, RollingSolver, Solution, Solver, TableSolver};

/// The default maximum number of cells of a full table (that is 128 MiB worth
/// of `u64` values).
pub const DEFAULT_MAX_TABLE_CELLS: usize = 1 << 24;

/// This solver uses a `TableSolver` as long as the full table holds at most
/// `max_table_cells` cells and falls back to a `RollingSolver` otherwise.
/// Since both report the same solution, the choice is never observable in the
/// outcome; only in the resources used to produce it.
///
/// # Example
/// ```
/// # use knapsack_dp::*;
/// let problem = Problem::new(50, &[(10, 60), (20, 100), (30, 120)]).unwrap();
/// // way too small a budget: the rolling solver will be used
/// let solver  = AutoSolver::new(10);
///
/// assert_eq!(vec![Ordinal(2), Ordinal(3)], solver.solve(&problem).unwrap().selected);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct AutoSolver {
    pub max_table_cells: usize,
}
impl AutoSolver {
    pub fn new(max_table_cells: usize) -> Self {
        AutoSolver { max_table_cells }
    }
    /// Returns true iff the complete table of the problem fits within budget
    pub fn fits_in_table(&self, problem: &Problem) -> bool {
        matches!(problem.table_cells(), Some(cells) if cells <= self.max_table_cells)
    }
}
impl Default for AutoSolver {
    fn default() -> Self {
        AutoSolver::new(DEFAULT_MAX_TABLE_CELLS)
    }
}
impl Solver for AutoSolver {
    fn solve(&self, problem: &Problem) -> Result<Solution, Error> {
        if self.fits_in_table(problem) {
            debug!("using the full table");
            TableSolver.solve(problem)
        } else {
            warn!("the table of {} items x capacity {} exceeds {} cells, using the rolling solver",
                problem.nb_items(), problem.capacity(), self.max_table_cells);
            RollingSolver.solve(problem)
        }
    }
    fn best_value(&self, problem: &Problem) -> Result<u64, Error> {
        RollingSolver.best_value(problem)
    }
}
