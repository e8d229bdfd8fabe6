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

//! This module provides the `ItemStore`: the editable list of items a host
//! keeps while its user is composing an instance. Items are identified by
//! their ordinal, which is simply their current position in the list (so
//! deleting an item shifts the ordinals of all the items after it).
//!
//! The store also remembers which item (if any) is currently selected for
//! edition. As long as an item is selected, submitting a weight and value
//! pair updates that item in place instead of appending a new one.

use crate::Ordinal;

/// The reasons why the store can refuse an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// There is no item with the given ordinal
    #[error("there is no item {0}")]
    NoSuchItem(Ordinal),
    /// The operation acts on the selected item but none is selected
    #[error("no item is selected")]
    NothingSelected,
}

/// An ordered list of raw `(weight, value)` pairs, plus an optional
/// selection. Values are kept exactly as they were typed: validating them
/// is the job of the solver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items   : Vec<(i64, i64)>,
    selected: Option<usize>,
}
impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    /// All the items, in ordinal order
    pub fn items(&self) -> &[(i64, i64)] {
        &self.items
    }
    /// Iterates over the items along with their ordinal
    pub fn iter(&self) -> impl Iterator<Item = (Ordinal, (i64, i64))> + '_ {
        self.items.iter().copied().enumerate()
            .map(|(i, item)| (Ordinal::from_index(i), item))
    }
    pub fn get(&self, ordinal: Ordinal) -> Option<(i64, i64)> {
        self.position(ordinal).ok().map(|i| self.items[i])
    }
    /// Appends an item at the end of the list and returns its ordinal
    pub fn add(&mut self, weight: i64, value: i64) -> Ordinal {
        self.items.push((weight, value));
        Ordinal(self.items.len())
    }
    /// Overwrites the item with the given ordinal
    pub fn update(&mut self, ordinal: Ordinal, weight: i64, value: i64) -> Result<(), StoreError> {
        let i = self.position(ordinal)?;
        self.items[i] = (weight, value);
        Ok(())
    }
    /// Removes the item with the given ordinal. All the items after it see
    /// their ordinal decrease by one. The selection follows the item it
    /// designates, and is dropped if that item is the one being removed.
    pub fn remove(&mut self, ordinal: Ordinal) -> Result<(i64, i64), StoreError> {
        let i = self.position(ordinal)?;
        self.selected = match self.selected {
            Some(s) if s == i => None,
            Some(s) if s >  i => Some(s - 1),
            other             => other,
        };
        Ok(self.items.remove(i))
    }
    /// Marks the given item as the one being edited and returns its current
    /// weight and value.
    pub fn select(&mut self, ordinal: Ordinal) -> Result<(i64, i64), StoreError> {
        let i = self.position(ordinal)?;
        self.selected = Some(i);
        Ok(self.items[i])
    }
    pub fn deselect(&mut self) {
        self.selected = None;
    }
    pub fn selected(&self) -> Option<Ordinal> {
        self.selected.map(Ordinal::from_index)
    }
    /// Either updates the selected item (and then clears the selection) or
    /// appends a new item when nothing is selected. Returns the ordinal of
    /// the item that was written.
    pub fn submit(&mut self, weight: i64, value: i64) -> Ordinal {
        match self.selected.take() {
            Some(i) => {
                self.items[i] = (weight, value);
                Ordinal::from_index(i)
            },
            None => self.add(weight, value),
        }
    }
    /// Removes the selected item
    pub fn remove_selected(&mut self) -> Result<(Ordinal, (i64, i64)), StoreError> {
        let ordinal = self.selected().ok_or(StoreError::NothingSelected)?;
        let item    = self.remove(ordinal)?;
        Ok((ordinal, item))
    }
    /// Forgets all items (and the selection)
    pub fn clear(&mut self) {
        self.items.clear();
        self.selected = None;
    }

    fn position(&self, ordinal: Ordinal) -> Result<usize, StoreError> {
        match ordinal.id() {
            id if id >= 1 && id <= self.items.len() => Ok(id - 1),
            _ => Err(StoreError::NoSuchItem(ordinal)),
        }
    }
}
