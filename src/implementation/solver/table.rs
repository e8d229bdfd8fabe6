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

//! This module provides the implementation of the textbook tabulation: the
//! whole `(n+1) x (capacity+1)` table is filled bottom-up, then walked
//! backwards to find out which items were packed.

use log::{debug, trace};

use crate::{Error, Ordinal, Problem, Solution, Solver};

use super::zeroed;

// ----------------------------------------------------------------------------
// --- TABLE ------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The dynamic programming table of a knapsack problem. The cell `(i, w)`
/// holds the best value that can be packed in a sack of capacity `w` using
/// only the first `i` items. The row `0` (no item at all) is made of zeroes.
///
/// The cells are stored row after row in one contiguous buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    width: usize,
    cells: Vec<u64>,
}
impl Table {
    /// Fills the table of the given problem. This takes `O(n * capacity)`
    /// time and memory: capacity is a magnitude, so a large capacity means a
    /// large table even with few items.
    ///
    /// # Errors
    /// `Error::InvalidCapacity` when the table cannot be addressed (see
    /// `Problem::table_cells`) or allocated.
    pub fn tabulate(problem: &Problem) -> Result<Self, Error> {
        let size  = problem.table_cells().ok_or_else(|| problem.invalid_capacity())?;
        let width = problem.capacity() + 1;
        debug!("tabulating {} rows x {} columns", problem.nb_items() + 1, width);

        let mut cells = zeroed(size).map_err(|_| problem.invalid_capacity())?;
        for (i, item) in problem.items().iter().enumerate() {
            let (done, todo) = cells.split_at_mut((i + 1) * width);
            let prev = &done[i * width..];
            let curr = &mut todo[..width];

            for w in 0..width {
                curr[w] = if item.weight <= w {
                    prev[w].max(prev[w - item.weight] + item.value)
                } else {
                    prev[w]
                };
            }
        }

        Ok(Table { width, cells })
    }
    /// The number of rows (number of items + 1)
    pub fn nb_rows(&self) -> usize {
        self.cells.len() / self.width
    }
    /// The number of columns (capacity + 1)
    pub fn width(&self) -> usize {
        self.width
    }
    /// The best value achievable with the first `i` items and capacity `w`.
    ///
    /// # Panics
    /// When `(i, w)` lies outside of the table.
    pub fn get(&self, i: usize, w: usize) -> u64 {
        self.row(i)[w]
    }
    /// The complete row for the first `i` items.
    pub fn row(&self, i: usize) -> &[u64] {
        &self.cells[i * self.width..(i + 1) * self.width]
    }
    /// The value found in the bottom right corner of the table
    pub fn optimal_value(&self) -> u64 {
        self.cells.last().copied().unwrap_or_default()
    }
    /// Walks the table backwards from the bottom right corner. The item `i`
    /// is considered packed iff `dp[i][w] != dp[i-1][w]` for the capacity `w`
    /// that remains at that point. When both values are equal, the item is
    /// left out, even if taking it would have reached the same value.
    pub fn reconstruct(&self, problem: &Problem) -> Solution {
        let items    = problem.items();
        let mut w    = problem.capacity();
        let mut used = vec![];

        for i in (1..=items.len()).rev() {
            if self.get(i, w) != self.get(i - 1, w) {
                let item = &items[i - 1];
                trace!("item {} packed (weight = {}, value = {})", i, item.weight, item.value);
                used.push(Ordinal(i));
                w -= item.weight;
            }
        }
        used.reverse();

        Solution {
            optimal_value: self.optimal_value(),
            selected     : used,
            total_weight : problem.capacity() - w,
        }
    }
}

// ----------------------------------------------------------------------------
// --- SOLVER -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// _This is the default solver._ It keeps the complete table in memory, which
/// is the simplest thing to do and is perfectly fine for moderate capacities.
///
/// # Example
/// ```
/// # use knapsack_dp::*;
/// let problem  = Problem::new(50, &[(10, 60), (20, 100), (30, 120)]).unwrap();
/// let solution = TableSolver.solve(&problem).unwrap();
///
/// assert_eq!(220, solution.optimal_value);
/// assert_eq!(vec![Ordinal(2), Ordinal(3)], solution.selected);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct TableSolver;
impl Solver for TableSolver {
    fn solve(&self, problem: &Problem) -> Result<Solution, Error> {
        Ok(Table::tabulate(problem)?.reconstruct(problem))
    }
}
