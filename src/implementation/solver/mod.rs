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

//! This module and its sub modules provide the actual implementations of the
//! knapsack solvers. The `table` module provides the `TableSolver` which keeps
//! the complete dynamic programming table in memory. The `rolling` module
//! provides the `RollingSolver` which only ever keeps a handful of rows and
//! recomputes what it needs. Both structures implement the `Solver` trait and
//! report the very same solution for any given problem. `AutoSolver` picks
//! one of them depending on the size of the table.
mod table;
mod rolling;
mod auto;

pub use table::*;
pub use rolling::*;
pub use auto::*;

use std::collections::TryReserveError;

use crate::Item;

/// Allocates `len` zeroed cells without ever aborting the process: whatever
/// cannot be addressed or obtained from the allocator is reported instead.
pub(crate) fn zeroed(len: usize) -> Result<Vec<u64>, TryReserveError> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(len)?;
    cells.resize(len, 0);
    Ok(cells)
}

/// Turns the row `dp[i-1][..]` into `dp[i][..]` in place, where `item` is the
/// i-th item of the problem. The row is scanned by decreasing capacity so that
/// `row[w - weight]` still holds the value of the previous row when it is read.
/// This also covers zero-weight items since the cell is read before it is
/// written.
pub(crate) fn push_item(row: &mut [u64], item: &Item) {
    if item.weight >= row.len() {
        return;
    }
    for w in (item.weight..row.len()).rev() {
        let with_item = row[w - item.weight] + item.value;
        if with_item > row[w] {
            row[w] = with_item;
        }
    }
}

#[cfg(test)]
mod test_zeroed {
    use super::zeroed;

    #[test]
    fn it_yields_the_requested_number_of_zeroes() {
        assert_eq!(vec![0, 0, 0], zeroed(3).unwrap());
        assert!(zeroed(0).unwrap().is_empty());
    }
    #[test]
    fn an_unaddressable_length_is_an_error_not_a_crash() {
        assert!(zeroed(usize::MAX).is_err());
        assert!(zeroed(isize::MAX as usize / 8 + 1).is_err());
    }
}
