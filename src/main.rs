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

//! This is the command line host of the knapsack solver. It either solves the
//! instance given through its arguments (or in a file), or opens an
//! interactive session where items can be added, edited and deleted before
//! asking for the optimal packing.

use std::{io, path::PathBuf, process};

use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::info;

use knapsack_dp::{
    io_utils::{parse_capacity, parse_item, read_instance, KnapsackInstance, ParseError},
    report::ReportConfigBuilderError,
    session::{Session, DEFAULT_CAPACITY},
    render, AutoSolver, Error, OutputFormat, ReportConfig, ReportConfigBuilder,
    RollingSolver, Solver, TableSolver, DEFAULT_MAX_TABLE_CELLS,
};

/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log what the solver does (repeat for more details)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve the instance given on the command line or in a file
    Solve(SolveArgs),
    /// Compose an instance interactively and solve it
    Interactive(SessionArgs),
}

#[derive(clap::Args, Debug)]
struct SolveArgs {
    /// The items, given as weight:value pairs (e.g. 10:60 20:100 30:120)
    #[clap(allow_hyphen_values = true)]
    items: Vec<String>,
    /// The capacity of the sack (defaults to 200, or to the capacity of the instance file)
    #[clap(short, long, allow_hyphen_values = true)]
    capacity: Option<String>,
    /// The path to an instance file
    #[clap(short, long, conflicts_with = "items")]
    file: Option<PathBuf>,
    #[command(flatten)]
    solver: SolverArgs,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(clap::Args, Debug)]
struct SessionArgs {
    #[command(flatten)]
    solver: SolverArgs,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(clap::Args, Debug)]
struct SolverArgs {
    /// How the dynamic programming table is kept in memory
    #[clap(short, long, value_enum, default_value_t = Strategy::Auto)]
    strategy: Strategy,
    /// The largest full table (in cells) the auto strategy accepts
    #[clap(long, default_value_t = DEFAULT_MAX_TABLE_CELLS)]
    max_table_cells: usize,
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Print the solution as json
    #[clap(long)]
    json: bool,
    /// Print a title line above the selected items
    #[clap(long)]
    header: bool,
    /// The number of blanks in front of each selected item
    #[clap(long, default_value_t = 0)]
    indent: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    /// Keep the complete table
    Table,
    /// Keep a few rows and recompute the rest
    Rolling,
    /// Use the table whenever it fits within --max-table-cells
    Auto,
}

/// The reasons why this program may give up
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid input: {0}")]
    Parse(#[from] ParseError),
    #[error("invalid instance: {0}")]
    Solve(#[from] Error),
    #[error("cannot render the solution: {0}")]
    Report(#[from] serde_json::Error),
    #[error("invalid output configuration: {0}")]
    Config(#[from] ReportConfigBuilderError),
    #[error("io error {0}")]
    Io(#[from] io::Error),
}

/// An utility function to return the solver matching the requested strategy
fn solver(args: &SolverArgs) -> Box<dyn Solver> {
    match args.strategy {
        Strategy::Table   => Box::new(TableSolver),
        Strategy::Rolling => Box::new(RollingSolver),
        Strategy::Auto    => Box::new(AutoSolver::new(args.max_table_cells)),
    }
}

fn report_config(args: &OutputArgs) -> Result<ReportConfig, CliError> {
    let format = if args.json { OutputFormat::Json } else { OutputFormat::Text };
    Ok(ReportConfigBuilder::default()
        .show_header(args.header)
        .indent(args.indent)
        .format(format)
        .build()?)
}

/// Gathers the instance from the file and/or the command line arguments
fn instance(args: &SolveArgs) -> Result<KnapsackInstance, ParseError> {
    let mut instance = match &args.file {
        Some(fname) => read_instance(fname)?,
        None        => KnapsackInstance {
            capacity: DEFAULT_CAPACITY,
            items   : args.items.iter().map(|t| parse_item(t)).collect::<Result<_, _>>()?,
        },
    };
    if let Some(capacity) = &args.capacity {
        instance.capacity = parse_capacity(capacity)?;
    }
    Ok(instance)
}

fn solve(args: SolveArgs) -> Result<(), CliError> {
    let instance = instance(&args)?;
    let problem  = instance.problem()?;
    let config   = report_config(&args.output)?;
    info!("solving {} items with capacity {}", problem.nb_items(), problem.capacity());

    let solution = solver(&args.solver).solve(&problem)?;
    print!("{}", render(&problem, &solution, &config)?);
    if args.output.json {
        println!();
    }
    Ok(())
}

fn interactive(args: SessionArgs) -> Result<(), CliError> {
    let mut session = Session::new(solver(&args.solver), report_config(&args.output)?);
    eprintln!("capacity is {} (type 'help' for the list of commands)", session.capacity());

    let stdin  = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), stdout.lock())?;
    Ok(())
}

/// This is your executable's entry point. Whatever goes wrong is reported on
/// the standard error and the process exits with a non zero status.
fn main() {
    let cli   = Cli::parse();
    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let outcome = match cli.command {
        Command::Solve(args)       => solve(args),
        Command::Interactive(args) => interactive(args),
    };
    if let Err(e) = outcome {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
