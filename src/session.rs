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

//! This module provides a line oriented interactive session. It is the text
//! counterpart of a form where one types the capacity, adds, edits and
//! deletes items, and eventually asks for the optimal packing.
//!
//! Nothing a user types can bring the session down: every failure is turned
//! into a `CommandError`, reported, and the session goes on.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::{
    io_utils::{parse_capacity, parse_int, parse_item, ParseError},
    report::{render, render_store},
    Error, ItemStore, Ordinal, Problem, ReportConfig, Solver, StoreError,
};

/// The capacity a session starts with
pub const DEFAULT_CAPACITY: i64 = 200;

const HELP: &str = "\
commands:
  capacity [<c>]     show or set the capacity of the sack
  add <w> <v>        add an item (or update the selected one)
  select <id>        select an item for edition
  deselect           forget the selection
  delete [<id>]      delete the given (or the selected) item
  list               list the items
  solve | calculate  compute the optimal packing
  clear              delete all items
  help               show this message
  quit | exit        leave the session
";

/// Everything that can go wrong with one command
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// What was typed could not be understood
    #[error("invalid input: {0}")]
    Parse(#[from] ParseError),
    /// The solver refused the instance
    #[error("invalid instance: {0}")]
    Solve(#[from] Error),
    /// The store refused the operation
    #[error("{0}")]
    Store(#[from] StoreError),
    /// The solution could not be rendered
    #[error("cannot render the solution: {0}")]
    Report(#[from] serde_json::Error),
    /// The command keyword is not known
    #[error("unknown command '{0}' (type 'help' for the list of commands)")]
    UnknownCommand(String),
    /// A mandatory argument is missing
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    /// The command got more arguments than it accepts
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    /// An item id is not a positive number
    #[error("'{0}' is not an item id")]
    NotAnId(String),
}

/// What the host should do after a command has been executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show this text to the user
    Reply(String),
    /// Nothing to show
    Silent,
    /// The user wants to leave
    Quit,
}

/// An interactive session: an item store, a capacity, and the solver and
/// report configuration used when the user asks for a solution.
pub struct Session<S: Solver> {
    store   : ItemStore,
    capacity: i64,
    solver  : S,
    report  : ReportConfig,
}
impl <S: Solver> Session<S> {
    pub fn new(solver: S, report: ReportConfig) -> Self {
        Session { store: ItemStore::new(), capacity: DEFAULT_CAPACITY, solver, report }
    }
    pub fn store(&self) -> &ItemStore {
        &self.store
    }
    pub fn capacity(&self) -> i64 {
        self.capacity
    }
    /// Executes one line typed by the user
    pub fn execute(&mut self, line: &str) -> Result<Outcome, CommandError> {
        let mut words = line.split_whitespace();
        let keyword   = match words.next() {
            None    => return Ok(Outcome::Silent),
            Some(k) => k.to_lowercase(),
        };
        let args = words.collect::<Vec<_>>();
        debug!("command {} {:?}", keyword, args);

        match keyword.as_str() {
            "capacity" => self.capacity_cmd(&args),
            "add"      => self.add(&args),
            "select"   => {
                let [id] = exactly::<1>(&args, "item id")?;
                let ordinal = parse_ordinal(id)?;
                let (w, v)  = self.store.select(ordinal)?;
                Ok(Outcome::Reply(format!("Editing ID {}: Weight = {}, Value = {}", ordinal, w, v)))
            },
            "deselect" => {
                exactly::<0>(&args, "")?;
                self.store.deselect();
                Ok(Outcome::Silent)
            },
            "delete"   => self.delete(&args),
            "list"     => {
                exactly::<0>(&args, "")?;
                if self.store.is_empty() {
                    Ok(Outcome::Reply("no items".to_string()))
                } else {
                    Ok(Outcome::Reply(render_store(&self.store)))
                }
            },
            "solve" | "calculate" => {
                exactly::<0>(&args, "")?;
                self.solve()
            },
            "clear"    => {
                exactly::<0>(&args, "")?;
                self.store.clear();
                Ok(Outcome::Silent)
            },
            "help"     => Ok(Outcome::Reply(HELP.to_string())),
            "quit" | "exit" => Ok(Outcome::Quit),
            other      => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
    /// Reads commands from `input` until it is exhausted or the user quits.
    /// Replies go to `output`, and so do the error messages.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            match self.execute(&line?) {
                Ok(Outcome::Reply(text)) => {
                    write!(output, "{}", text)?;
                    if !text.ends_with('\n') {
                        writeln!(output)?;
                    }
                },
                Ok(Outcome::Silent)      => {},
                Ok(Outcome::Quit)        => break,
                Err(e)                   => writeln!(output, "error: {}", e)?,
            }
            output.flush()?;
        }
        Ok(())
    }

    fn capacity_cmd(&mut self, args: &[&str]) -> Result<Outcome, CommandError> {
        match args {
            []  => Ok(Outcome::Reply(format!("capacity: {}", self.capacity))),
            [c] => {
                self.capacity = parse_capacity(c)?;
                Ok(Outcome::Silent)
            },
            [_, extra, ..] => Err(CommandError::UnexpectedArgument(extra.to_string())),
        }
    }
    fn add(&mut self, args: &[&str]) -> Result<Outcome, CommandError> {
        let (weight, value) = match args {
            []          => return Err(CommandError::MissingArgument("weight and value")),
            [pair]      => parse_item(pair)?,
            [w, v]      => (parse_int(w)?, parse_int(v)?),
            [_, _, extra, ..] => return Err(CommandError::UnexpectedArgument(extra.to_string())),
        };
        let editing = self.store.selected().is_some();
        let ordinal = self.store.submit(weight, value);
        let verb    = if editing { "Updated" } else { "Added" };
        Ok(Outcome::Reply(format!("{} ID {}: Weight = {}, Value = {}", verb, ordinal, weight, value)))
    }
    fn delete(&mut self, args: &[&str]) -> Result<Outcome, CommandError> {
        let (ordinal, (w, v)) = match args {
            []   => self.store.remove_selected()?,
            [id] => {
                let ordinal = parse_ordinal(id)?;
                (ordinal, self.store.remove(ordinal)?)
            },
            [_, extra, ..] => return Err(CommandError::UnexpectedArgument(extra.to_string())),
        };
        Ok(Outcome::Reply(format!("Deleted ID {}: Weight = {}, Value = {}", ordinal, w, v)))
    }
    fn solve(&self) -> Result<Outcome, CommandError> {
        let problem  = Problem::new(self.capacity, self.store.items())?;
        let solution = self.solver.solve(&problem)?;
        Ok(Outcome::Reply(render(&problem, &solution, &self.report)?))
    }
}

/// Makes sure a command got exactly `N` arguments
fn exactly<'a, const N: usize>(args: &[&'a str], what: &'static str) -> Result<[&'a str; N], CommandError> {
    if args.len() > N {
        return Err(CommandError::UnexpectedArgument(args[N].to_string()));
    }
    args.try_into().map_err(|_| CommandError::MissingArgument(what))
}

fn parse_ordinal(token: &str) -> Result<Ordinal, CommandError> {
    let id = parse_int(token)?;
    match usize::try_from(id) {
        Ok(id) if id > 0 => Ok(Ordinal(id)),
        _ => Err(CommandError::NotAnId(token.to_string())),
    }
}
