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

//! This module turns solutions into what a user gets to read. The text
//! rendering is the line oriented listing
//! ```plain
//! Maximum Value: 220
//! ID 2: Weight = 20, Value = 100
//! ID 3: Weight = 30, Value = 120
//! ```
//! and the json rendering carries the same information for other programs.

use derive_builder::Builder;
use serde::Serialize;

use crate::{ItemStore, Ordinal, Problem, Solution};

/// The title line that introduces the selected items when `show_header` is on
pub const HEADER: &str = "Selected Containers (ID, Weight, Value):";

/// The shapes a report can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// A pretty printed json document
    Json,
}

/// This is how you configure the output report, e.g. if you want a title
/// line above the selected items or if they should be indented.
///
/// # Example
/// ```
/// # use knapsack_dp::*;
/// let config = ReportConfigBuilder::default()
///     .show_header(true)
///     .indent(2_usize)
///     .build()
///     .unwrap();
///
/// let problem  = Problem::new(10, &[(5, 10), (5, 10)]).unwrap();
/// let solution = solve(10, &[(5, 10), (5, 10)]).unwrap();
/// let expected = "Maximum Value: 20\n\
///                 Selected Containers (ID, Weight, Value):\n  \
///                 ID 1: Weight = 5, Value = 10\n  \
///                 ID 2: Weight = 5, Value = 10\n";
/// assert_eq!(expected, render(&problem, &solution, &config).unwrap());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ReportConfig {
    /// This flag must be true if you want a title line between the optimal
    /// value and the selected items (default false)
    #[builder(default="false")]
    show_header: bool,
    /// The number of blanks printed in front of each selected item (default 0)
    #[builder(default="0")]
    indent: usize,
    /// Text or json (default text)
    #[builder(default="OutputFormat::Text")]
    format: OutputFormat,
}
impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig { show_header: false, indent: 0, format: OutputFormat::Text }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport {
    capacity     : usize,
    optimal_value: u64,
    total_weight : usize,
    selected     : Vec<JsonItem>,
}
#[derive(Debug, Serialize)]
struct JsonItem {
    id    : Ordinal,
    weight: usize,
    value : u64,
}

/// Renders the solution of the given problem according to the configuration.
/// Only the json output can fail.
pub fn render(problem: &Problem, solution: &Solution, config: &ReportConfig) -> Result<String, serde_json::Error> {
    match config.format {
        OutputFormat::Text => Ok(render_text(problem, solution, config)),
        OutputFormat::Json => render_json(problem, solution),
    }
}

fn render_text(problem: &Problem, solution: &Solution, config: &ReportConfig) -> String {
    let mut out = format!("Maximum Value: {}\n", solution.optimal_value);
    if config.show_header {
        out.push_str(HEADER);
        out.push('\n');
    }
    for (ordinal, item) in solution.items(problem) {
        out.push_str(&format!("{:indent$}ID {}: Weight = {}, Value = {}\n",
            "", ordinal, item.weight, item.value, indent = config.indent));
    }
    out
}

fn render_json(problem: &Problem, solution: &Solution) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        capacity     : problem.capacity(),
        optimal_value: solution.optimal_value,
        total_weight : solution.total_weight,
        selected     : solution.items(problem)
            .map(|(id, item)| JsonItem { id, weight: item.weight, value: item.value })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}

/// Lists the content of a store, one item per line
pub fn render_store(store: &ItemStore) -> String {
    let mut out = String::new();
    for (ordinal, (weight, value)) in store.iter() {
        let mark = if store.selected() == Some(ordinal) { " *" } else { "" };
        out.push_str(&format!("ID {}: Weight = {}, Value = {}{}\n", ordinal, weight, value, mark));
    }
    out
}


#[cfg(test)]
mod test_render {
    use crate::*;

    fn example() -> (Problem, Solution) {
        let problem  = Problem::new(50, &[(10, 60), (20, 100), (30, 120)]).unwrap();
        let solution = TableSolver.solve(&problem).unwrap();
        (problem, solution)
    }

    #[test]
    fn by_default_it_prints_the_value_and_one_line_per_item() {
        let (pb, sln) = example();
        let text = render(&pb, &sln, &ReportConfig::default()).unwrap();
        assert_eq!("Maximum Value: 220\nID 2: Weight = 20, Value = 100\nID 3: Weight = 30, Value = 120\n", text);
    }
    #[test]
    fn the_builder_defaults_match_the_default_config() {
        let (pb, sln) = example();
        let built = ReportConfigBuilder::default().build().unwrap();
        assert_eq!(
            render(&pb, &sln, &ReportConfig::default()).unwrap(),
            render(&pb, &sln, &built).unwrap());
    }
    #[test]
    fn the_header_comes_right_after_the_value() {
        let (pb, sln) = example();
        let config = ReportConfigBuilder::default().show_header(true).build().unwrap();
        let text   = render(&pb, &sln, &config).unwrap();
        let lines  = text.lines().collect::<Vec<_>>();
        assert_eq!("Maximum Value: 220", lines[0]);
        assert_eq!(report::HEADER,       lines[1]);
        assert_eq!(4, lines.len());
    }
    #[test]
    fn an_empty_solution_only_shows_the_value() {
        let pb  = Problem::new(0, &[(5, 10)]).unwrap();
        let sln = TableSolver.solve(&pb).unwrap();
        assert_eq!("Maximum Value: 0\n", render(&pb, &sln, &ReportConfig::default()).unwrap());
    }
    #[test]
    fn json_carries_the_selected_items() {
        let (pb, sln) = example();
        let config = ReportConfigBuilder::default().format(OutputFormat::Json).build().unwrap();
        let json   = render(&pb, &sln, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(220, value["optimal_value"]);
        assert_eq!(50,  value["total_weight"]);
        assert_eq!(2,   value["selected"][0]["id"]);
        assert_eq!(30,  value["selected"][1]["weight"]);
        assert_eq!(120, value["selected"][1]["value"]);
    }
    #[test]
    fn the_store_listing_marks_the_selection() {
        let mut store = ItemStore::new();
        store.add(1, 2);
        store.add(3, 4);
        store.select(Ordinal(2)).unwrap();
        assert_eq!("ID 1: Weight = 1, Value = 2\nID 2: Weight = 3, Value = 4 *\n", report::render_store(&store));
    }
}
