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

//! This module contains everything that is necessary for a host to collect a
//! knapsack instance: parsing the tokens typed on a command line or in an
//! interactive session, and reading instance files.
//!
//! Integers are parsed as signed values on purpose: a negative weight is a
//! perfectly parseable integer, and it is up to the solver to refuse it with a
//! precise error.
//!
//! An instance file looks like this:
//! ```plain
//! c comment lines start with a 'c' (or a '#')
//! 50 3
//! 10 60
//! 20 100
//! 30 120
//! ```
//! The first data line gives the capacity and the number of items. Each
//! following line gives the weight and the value of one item.

use std::{fs::File, io::{BufRead, BufReader}, num::ParseIntError, path::Path};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Problem};

static HEADER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?P<capa>[-+]?\d+)\s+(?P<nb_items>\d+)$").unwrap());
static ITEM_LINE  : Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?P<weight>[-+]?\d+)\s+(?P<value>[-+]?\d+)$").unwrap());

/// This enumeration simply groups the kind of errors that might occur when
/// parsing what a user typed or wrote in a file. There can be io errors (file
/// unavailable ?), format errors (e.g. the file is not an instance but
/// contains the text of your next paper), or parse int errors (the parser
/// expected an integer number but got ... something else).
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The parser expected to read something that was an integer but got some garbage
    #[error("'{token}' is not a valid integer ({source})")]
    ParseInt { token: String, source: ParseIntError },
    /// An item was not given as a `weight:value` pair
    #[error("'{0}' is not a weight:value pair")]
    BadItem(String),
    /// A line of an instance file could not be understood
    #[error("line {line}: unexpected content '{content}'")]
    Format { line: usize, content: String },
    /// The instance file never told what the capacity is
    #[error("the instance declares no capacity")]
    MissingHeader,
    /// The instance file does not hold the announced number of items
    #[error("{expected} items were announced but {found} were found")]
    ItemCount { expected: usize, found: usize },
}

/// Parses one integer token (surrounding blanks are ignored)
pub fn parse_int(token: &str) -> Result<i64, ParseError> {
    let token = token.trim();
    token.parse::<i64>()
        .map_err(|source| ParseError::ParseInt { token: token.to_string(), source })
}

/// Parses the capacity of the sack
pub fn parse_capacity(token: &str) -> Result<i64, ParseError> {
    parse_int(token)
}

/// Parses one item given as `weight:value` (a comma is accepted as
/// separator too).
///
/// # Example
/// ```
/// # use knapsack_dp::io_utils::parse_item;
/// assert_eq!((10, 60), parse_item("10:60").unwrap());
/// assert_eq!((-1, 5),  parse_item("-1,5").unwrap());
/// assert!(parse_item("10").is_err());
/// ```
pub fn parse_item(token: &str) -> Result<(i64, i64), ParseError> {
    let (weight, value) = token.split_once(|c: char| c == ':' || c == ',')
        .ok_or_else(|| ParseError::BadItem(token.to_string()))?;

    Ok((parse_int(weight)?, parse_int(value)?))
}

/// This structure represents a knapsack instance, exactly as it was read.
/// Nothing has been validated yet: the numbers may still be negative.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KnapsackInstance {
    pub capacity: i64,
    pub items   : Vec<(i64, i64)>,
}
impl KnapsackInstance {
    /// Validates the instance and turns it into a problem the solvers accept
    pub fn problem(&self) -> Result<Problem, Error> {
        Problem::new(self.capacity, &self.items)
    }
}

/// This function is used to read a knapsack instance from file. It returns
/// either an instance if everything went on well or an error describing the
/// problem.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<KnapsackInstance, ParseError> {
    let f = File::open(fname)?;
    parse_instance(BufReader::new(f))
}

/// Reads an instance from any buffered source (see the module documentation
/// for the expected format).
pub fn parse_instance<R: BufRead>(source: R) -> Result<KnapsackInstance, ParseError> {
    let mut expected = None;
    let mut instance = KnapsackInstance::default();

    for (lc, line) in source.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('c') || line.starts_with('#') {
            continue;
        }

        if expected.is_none() {
            let caps = HEADER_LINE.captures(line)
                .ok_or_else(|| ParseError::Format { line: lc + 1, content: line.to_string() })?;

            instance.capacity = parse_int(&caps["capa"])?;
            let nb_items = parse_int(&caps["nb_items"])?;
            let nb_items = usize::try_from(nb_items)
                .map_err(|_| ParseError::Format { line: lc + 1, content: line.to_string() })?;
            expected = Some(nb_items);
            continue;
        }

        let caps = ITEM_LINE.captures(line)
            .ok_or_else(|| ParseError::Format { line: lc + 1, content: line.to_string() })?;
        instance.items.push((parse_int(&caps["weight"])?, parse_int(&caps["value"])?));
    }

    match expected {
        None => Err(ParseError::MissingHeader),
        Some(n) if n != instance.items.len() => Err(ParseError::ItemCount { expected: n, found: instance.items.len() }),
        Some(_) => Ok(instance),
    }
}


#[cfg(test)]
mod test_parse {
    use crate::io_utils::*;

    #[test]
    fn integers_may_be_surrounded_by_blanks() {
        assert_eq!(200, parse_capacity(" 200 ").unwrap());
    }
    #[test]
    fn negative_integers_are_parseable() {
        assert_eq!(-1, parse_capacity("-1").unwrap());
    }
    #[test]
    fn garbage_is_not_an_integer() {
        assert!(matches!(parse_capacity("twelve"), Err(ParseError::ParseInt { .. })));
        assert!(matches!(parse_capacity(""),       Err(ParseError::ParseInt { .. })));
        assert!(matches!(parse_capacity("1.5"),    Err(ParseError::ParseInt { .. })));
    }
    #[test]
    fn items_need_a_separator() {
        assert!(matches!(parse_item("1060"), Err(ParseError::BadItem(_))));
    }
    #[test]
    fn items_accept_both_separators() {
        assert_eq!((3, 4), parse_item("3:4").unwrap());
        assert_eq!((3, 4), parse_item("3, 4").unwrap());
    }
    #[test]
    fn the_offending_token_is_reported() {
        let err = parse_item("3:x").unwrap_err();
        assert_eq!("'x' is not a valid integer (invalid digit found in string)", err.to_string());
    }
}
