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

//! This module provides a solver whose memory footprint does not grow with the
//! number of items. The optimal value is computed with one single row that is
//! updated in place for each item. When the packed items must be known too,
//! the item range is recursively split in halves and the rows that are needed
//! to replay the backward walk of the full table are recomputed on demand.

use std::collections::TryReserveError;

use log::{debug, trace};

use crate::{Error, Item, Ordinal, Problem, Solution, Solver};

use super::{push_item, zeroed};

/// A solver that trades time for memory. Computing the optimal value only
/// needs `O(capacity)` memory. Finding the packed items needs
/// `O(capacity * log n)` memory and `O(n * log n * capacity)` time.
///
/// The reconstruction replays exactly the walk performed on the full table,
/// hence this solver reports the same items as `TableSolver`.
///
/// # Errors
/// A row still holds `capacity + 1` cells. When they cannot be allocated,
/// `Error::InvalidCapacity` is returned.
///
/// # Example
/// ```
/// # use knapsack_dp::*;
/// let problem = Problem::new(50, &[(10, 60), (20, 100), (30, 120)]).unwrap();
///
/// assert_eq!(Ok(220), RollingSolver.best_value(&problem));
/// assert_eq!(TableSolver.solve(&problem), RollingSolver.solve(&problem));
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct RollingSolver;
impl Solver for RollingSolver {
    fn solve(&self, problem: &Problem) -> Result<Solution, Error> {
        debug!("rolling solve of {} items with capacity {}", problem.nb_items(), problem.capacity());
        let mut w    = problem.capacity();
        let mut used = vec![];

        let first = first_row(problem)?;
        walk_back(problem.items(), 0, &first, &mut w, &mut used)
            .map_err(|_| problem.invalid_capacity())?;
        used.reverse();

        // every packed item accounts for exactly the drop of value observed
        // along the walk, and the walk ends on the zero row
        let optimal_value = used.iter()
            .filter_map(|o| problem.item(*o))
            .map(|item| item.value)
            .sum();

        Ok(Solution {
            optimal_value,
            selected    : used,
            total_weight: problem.capacity() - w,
        })
    }

    fn best_value(&self, problem: &Problem) -> Result<u64, Error> {
        let mut row = first_row(problem)?;
        for item in problem.items() {
            push_item(&mut row, item);
        }
        Ok(row.last().copied().unwrap_or_default())
    }
}

/// The row of the table for zero items: `capacity + 1` zeroes
fn first_row(problem: &Problem) -> Result<Vec<u64>, Error> {
    problem.capacity().checked_add(1)
        .and_then(|len| zeroed(len).ok())
        .ok_or_else(|| problem.invalid_capacity())
}

/// Replays the backward walk over `items`, which are the items with global
/// indices `offset..offset + items.len()`. `base` is the table row for the
/// first `offset` items; it must cover at least the capacities `0..=*w`.
///
/// Upon return, `*w` holds the capacity that remains once the walk went
/// past the first item of `items`, and `used` was extended with the ordinals
/// of the packed items (in decreasing order).
fn walk_back(items: &[Item], offset: usize, base: &[u64], w: &mut usize, used: &mut Vec<Ordinal>)
    -> Result<(), TryReserveError>
{
    match items.len() {
        0 => {},
        1 => {
            let item = &items[0];
            let without = base[*w];
            let with    = if item.weight <= *w {
                without.max(base[*w - item.weight] + item.value)
            } else {
                without
            };
            if with != without {
                trace!("item {} packed (weight = {}, value = {})", offset + 1, item.weight, item.value);
                used.push(Ordinal::from_index(offset));
                *w -= item.weight;
            }
        },
        n => {
            let mid = n / 2;
            // the walk never goes back to a larger capacity
            let mut row = Vec::new();
            row.try_reserve_exact(*w + 1)?;
            row.extend_from_slice(&base[..=*w]);
            for item in &items[..mid] {
                push_item(&mut row, item);
            }
            walk_back(&items[mid..], offset + mid, &row, w, used)?;
            drop(row);
            walk_back(&items[..mid], offset, base, w, used)?;
        }
    }
    Ok(())
}
