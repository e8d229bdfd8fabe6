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

//! This module defines the `Solver` trait.

use crate::{Error, Problem, Solution};

/// This is the solver abstraction. It is implemented by the structures that
/// compute an exact optimum of a 0/1 knapsack problem. All implementations
/// are pure: solving twice the same problem yields twice the same solution,
/// and nothing survives a call.
///
/// Implementations differ in the way they trade memory for time, but they
/// must all agree on the tie-break rule. Among several optimal subsets, the
/// reported one is the subset obtained by scanning the items backwards (from
/// the last ordinal down to the first) and keeping an item only when the best
/// value reachable with the items up to it differs from the best value
/// reachable without it (for the capacity that remains at that point).
/// Ties are thus resolved by leaving out the later items.
///
/// # Errors
/// A valid problem may still need more memory than the platform can give.
/// Solvers never abort in that case: they return `Error::InvalidCapacity`.
pub trait Solver {
    /// This method orders the solver to find an optimal packing of the sack.
    /// The returned solution carries the optimal value along with the
    /// ordinals of the packed items, sorted in ascending order.
    fn solve(&self, problem: &Problem) -> Result<Solution, Error>;
    /// This method returns the optimal value of the problem without caring
    /// about which items achieve it. Implementations are encouraged to
    /// override it whenever it can be done with fewer resources than a full
    /// solve.
    fn best_value(&self, problem: &Problem) -> Result<u64, Error> {
        self.solve(problem).map(|solution| solution.optimal_value)
    }
}

impl <S: Solver + ?Sized> Solver for &S {
    fn solve(&self, problem: &Problem) -> Result<Solution, Error> {
        (**self).solve(problem)
    }
    fn best_value(&self, problem: &Problem) -> Result<u64, Error> {
        (**self).best_value(problem)
    }
}
impl <S: Solver + ?Sized> Solver for Box<S> {
    fn solve(&self, problem: &Problem) -> Result<Solution, Error> {
        (**self).solve(problem)
    }
    fn best_value(&self, problem: &Problem) -> Result<u64, Error> {
        (**self).best_value(problem)
    }
}
