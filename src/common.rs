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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.
//!
//! In particular, this module comprises the definition of the following types:
//! - `Ordinal`
//! - `Item`
//! - `Problem`
//! - `Solution`
//! - `Error`

use std::fmt;

use serde::Serialize;

// ----------------------------------------------------------------------------
// --- ORDINAL ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes the identity of an item: its 1-based position in the
/// sequence that was handed over by the caller. An ordinal is only stable for
/// the duration of one solve call and is only ever used for reporting.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub struct Ordinal(pub usize);
impl Ordinal {
    #[inline]
    /// Returns the ordinal of the item stored at the given (0-based) index.
    ///
    /// # Examples:
    /// ```
    /// # use knapsack_dp::Ordinal;
    /// assert_eq!(Ordinal(1), Ordinal::from_index(0));
    /// assert_eq!(Ordinal(3), Ordinal::from_index(2));
    /// ```
    pub fn from_index(index: usize) -> Self {
        Ordinal(index + 1)
    }
    #[inline]
    /// This function returns the 1-based numeric value of the ordinal.
    pub fn id(self) -> usize {
        self.0
    }
    #[inline]
    /// This function returns the 0-based position of the item in its sequence.
    /// `Ordinal(0)` designates no item at all, hence it has no position.
    ///
    /// # Examples:
    /// ```
    /// # use knapsack_dp::Ordinal;
    /// assert_eq!(Some(0), Ordinal(1).index());
    /// assert_eq!(Some(4), Ordinal(5).index());
    /// assert_eq!(None,    Ordinal(0).index());
    /// ```
    pub fn index(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}
impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// One candidate for the sack. Both the weight and the value are non negative
/// by construction; zero is a legal value for either of them.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
pub struct Item {
    pub weight: usize,
    pub value : u64,
}
impl Item {
    pub fn new(weight: usize, value: u64) -> Self {
        Item { weight, value }
    }
}

// ----------------------------------------------------------------------------
// --- PROBLEM ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The largest capacity whose row of `capacity + 1` cells can still be
/// addressed (a single allocation never exceeds `isize::MAX` bytes).
pub const MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<u64>() - 1;

/// A validated instance of the 0/1 knapsack problem. A problem is created
/// fresh from the caller's data for each solve request and is never mutated
/// afterwards.
///
/// The constructors guarantee that:
/// - all weights are addressable (`usize`),
/// - the capacity is at most `MAX_CAPACITY`, so one row of the table can be
///   addressed (whether it can actually be allocated is another story),
/// - the sum of all values fits in a `u64`. Consequently, no intermediate
///   value computed by a solver can ever overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    capacity: usize,
    items   : Vec<Item>,
}
impl Problem {
    /// Validates raw integers (as collected by a host) and turns them into a
    /// problem.
    ///
    /// # Errors
    /// * `Error::InvalidCapacity` when the capacity is negative or larger
    ///   than `MAX_CAPACITY`,
    /// * `Error::InvalidItem` for the first item having a negative weight or
    ///   a negative value,
    /// * `Error::ValueOverflow` when the values sum up beyond `u64::MAX`.
    ///
    /// # Example
    /// ```
    /// # use knapsack_dp::*;
    /// let problem = Problem::new(50, &[(10, 60), (20, 100), (30, 120)]).unwrap();
    /// assert_eq!(50, problem.capacity());
    /// assert_eq!(3,  problem.nb_items());
    ///
    /// assert_eq!(Err(Error::InvalidCapacity(-1)), Problem::new(-1, &[]));
    /// assert_eq!(Err(Error::InvalidCapacity(i64::MAX)), Problem::new(i64::MAX, &[]));
    /// ```
    pub fn new(capacity: i64, items: &[(i64, i64)]) -> Result<Self, Error> {
        let capacity = usize::try_from(capacity)
            .ok()
            .filter(|c| *c <= MAX_CAPACITY)
            .ok_or(Error::InvalidCapacity(capacity))?;

        let mut typed = Vec::with_capacity(items.len());
        for (i, (weight, value)) in items.iter().copied().enumerate() {
            let invalid = || Error::InvalidItem { ordinal: Ordinal::from_index(i), weight, value };

            let w = usize::try_from(weight).map_err(|_| invalid())?;
            let v = u64::try_from(value).map_err(|_| invalid())?;
            typed.push(Item::new(w, v));
        }

        Self::with_items(capacity, typed)
    }
    /// Creates a problem from items that are already typed. What can still go
    /// wrong at this point is a capacity beyond `MAX_CAPACITY` or the total
    /// value overflowing.
    pub fn with_items(capacity: usize, items: Vec<Item>) -> Result<Self, Error> {
        if capacity > MAX_CAPACITY {
            return Err(Error::InvalidCapacity(i64::try_from(capacity).unwrap_or(i64::MAX)));
        }
        items.iter()
            .try_fold(0_u64, |total, item| total.checked_add(item.value))
            .ok_or(Error::ValueOverflow)?;

        Ok(Problem { capacity, items })
    }
    /// The maximum total weight the sack can hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    /// The items, in the order they were provided
    pub fn items(&self) -> &[Item] {
        &self.items
    }
    pub fn nb_items(&self) -> usize {
        self.items.len()
    }
    /// Returns the item identified by the given ordinal (if it exists)
    pub fn item(&self, ordinal: Ordinal) -> Option<&Item> {
        ordinal.index().and_then(|i| self.items.get(i))
    }
    /// The number of cells a full `(n+1) x (capacity+1)` table would need.
    /// `None` means that number does not even fit in a `usize`.
    pub fn table_cells(&self) -> Option<usize> {
        (self.items.len() + 1).checked_mul(self.capacity.checked_add(1)?)
    }
    /// The error reported when the memory this problem needs cannot be had
    pub(crate) fn invalid_capacity(&self) -> Error {
        Error::InvalidCapacity(i64::try_from(self.capacity).unwrap_or(i64::MAX))
    }
}

// ----------------------------------------------------------------------------
// --- SOLUTION ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The outcome of a solve call. It has no further lifecycle: nothing is cached
/// and nothing refers back to the solver that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Solution {
    /// The maximum value reachable without exceeding the capacity
    pub optimal_value: u64,
    /// The ordinals of the packed items, in ascending order
    pub selected: Vec<Ordinal>,
    /// The sum of the weights of the packed items
    pub total_weight: usize,
}
impl Solution {
    /// Iterates over the selected items of the given problem (ascending
    /// ordinal order). The problem must be the one this solution was
    /// computed for.
    pub fn items<'a>(&'a self, problem: &'a Problem) -> impl Iterator<Item = (Ordinal, Item)> + 'a {
        self.selected.iter()
            .filter_map(move |o| problem.item(*o).map(|item| (*o, *item)))
    }
    /// Returns true iff the item with the given ordinal was packed
    pub fn contains(&self, ordinal: Ordinal) -> bool {
        self.selected.binary_search(&ordinal).is_ok()
    }
}

// ----------------------------------------------------------------------------
// --- ERRORS -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This enumeration groups the reasons why a problem can be refused. The
/// solver never tries to clamp or guess what the caller meant: invalid input
/// always yields one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The capacity is negative, or the memory it needs cannot be addressed
    /// or allocated on this platform
    #[error("invalid capacity {0}: a non-negative integer is expected")]
    InvalidCapacity(i64),
    /// The weight or the value of an item is negative
    #[error("invalid item {ordinal} (weight = {weight}, value = {value}): weight and value must be non-negative integers")]
    InvalidItem { ordinal: Ordinal, weight: i64, value: i64 },
    /// The values of the items sum up beyond what fits in 64 bits
    #[error("the total value of the items does not fit in 64 bits")]
    ValueOverflow,
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################


#[cfg(test)]
mod test_problem {
    use crate::*;

    #[test]
    fn new_keeps_items_in_order() {
        let pb = Problem::new(10, &[(1, 2), (3, 4)]).unwrap();
        assert_eq!(&[Item::new(1, 2), Item::new(3, 4)], pb.items());
        assert_eq!(10, pb.capacity());
    }
    #[test]
    fn negative_capacity_is_refused() {
        assert_eq!(Err(Error::InvalidCapacity(-1)), Problem::new(-1, &[(1, 1)]));
    }
    #[test]
    fn negative_weight_is_refused_with_its_ordinal() {
        let err = Problem::new(10, &[(-1, 5)]).unwrap_err();
        assert_eq!(Error::InvalidItem { ordinal: Ordinal(1), weight: -1, value: 5 }, err);
    }
    #[test]
    fn negative_value_is_refused_with_its_ordinal() {
        let err = Problem::new(10, &[(1, 5), (2, 3), (4, -2)]).unwrap_err();
        assert_eq!(Error::InvalidItem { ordinal: Ordinal(3), weight: 4, value: -2 }, err);
    }
    #[test]
    fn the_first_offending_item_is_reported() {
        let err = Problem::new(10, &[(1, 5), (-2, 3), (-4, -2)]).unwrap_err();
        assert!(matches!(err, Error::InvalidItem { ordinal: Ordinal(2), .. }));
    }
    #[test]
    fn unaddressable_capacity_is_refused() {
        assert_eq!(Err(Error::InvalidCapacity(i64::MAX)), Problem::new(i64::MAX, &[(1, 1)]));
        let too_large = MAX_CAPACITY as i64 + 1;
        assert_eq!(Err(Error::InvalidCapacity(too_large)), Problem::new(too_large, &[(1, 1)]));
        assert_eq!(Err(Error::InvalidCapacity(i64::MAX)), Problem::with_items(usize::MAX, vec![]));
    }
    #[test]
    fn the_largest_addressable_capacity_is_accepted() {
        let pb = Problem::new(MAX_CAPACITY as i64, &[(1, 1)]).unwrap();
        assert_eq!(MAX_CAPACITY, pb.capacity());
    }
    #[test]
    fn capacity_is_checked_before_the_items() {
        assert_eq!(Err(Error::InvalidCapacity(-3)), Problem::new(-3, &[(-1, -1)]));
    }
    #[test]
    fn overflowing_values_are_refused() {
        let items = vec![Item::new(1, u64::MAX), Item::new(1, 1)];
        assert_eq!(Err(Error::ValueOverflow), Problem::with_items(5, items));
    }
    #[test]
    fn zero_weight_and_zero_value_items_are_legal() {
        assert!(Problem::new(0, &[(0, 0), (0, 5), (5, 0)]).is_ok());
    }
    #[test]
    fn item_lookup_is_one_based() {
        let pb = Problem::new(10, &[(1, 2), (3, 4)]).unwrap();
        assert_eq!(Some(&Item::new(3, 4)), pb.item(Ordinal(2)));
        assert_eq!(None, pb.item(Ordinal(0)));
        assert_eq!(None, pb.item(Ordinal(3)));
    }
    #[test]
    fn table_cells_counts_the_sentinel_row_and_column() {
        let pb = Problem::new(9, &[(1, 2), (3, 4)]).unwrap();
        assert_eq!(Some(30), pb.table_cells());
        let huge = Problem::with_items(MAX_CAPACITY, vec![Item::new(1, 1); 16]).unwrap();
        assert_eq!(None, huge.table_cells());
    }
}

#[cfg(test)]
mod test_solution {
    use crate::*;

    #[test]
    fn items_yields_the_selected_items_with_their_ordinal() {
        let pb  = Problem::new(50, &[(10, 60), (20, 100), (30, 120)]).unwrap();
        let sln = Solution { optimal_value: 220, selected: vec![Ordinal(2), Ordinal(3)], total_weight: 50 };

        let items = sln.items(&pb).collect::<Vec<_>>();
        assert_eq!(vec![(Ordinal(2), Item::new(20, 100)), (Ordinal(3), Item::new(30, 120))], items);
    }
    #[test]
    fn contains_tells_whether_an_item_was_packed() {
        let sln = Solution { optimal_value: 3, selected: vec![Ordinal(1), Ordinal(4)], total_weight: 2 };
        assert!(sln.contains(Ordinal(1)));
        assert!(sln.contains(Ordinal(4)));
        assert!(!sln.contains(Ordinal(2)));
    }
}
