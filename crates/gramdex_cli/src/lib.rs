//! Command-line interface for gramdex.
//!
//! This crate provides:
//! - [`Cli`] / [`Command`] - Argument definitions for the `gramdex` binary
//! - [`run`] - Executes a parsed command, writing results to any [`Write`]
//! - [`init_logging`] - Installs the stderr log subscriber
//! - [`report`] - Renders an error for the terminal

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod logging;
mod output;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use gramdex_foundation::{Error, ErrorContext, ErrorKind, Result};
use gramdex_inventory::{FilterPolicy, assemble, classified_names, collect, start_symbols};
use gramdex_syntax::Tree;
use gramdex_syntax::pretty::{PrettyConfig, pretty_print_with_config};

pub use logging::{init_logging, level_for};

/// Inventory the rules declared in grammar-description files.
#[derive(Parser, Debug)]
#[command(name = "gramdex", version, about, long_about = None)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the `gramdex` binary.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the declared rule and alias names
    Names {
        /// Grammar file to read
        file: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Show each name's declared spelling, kind and markers
        #[arg(long)]
        markers: bool,
    },
    /// Print the sorted set of start symbols
    StartSymbols {
        /// Grammar file to read
        file: PathBuf,
        /// Additional start symbol (repeatable)
        #[arg(long = "extra", value_name = "NAME")]
        extra: Vec<String>,
        #[command(flatten)]
        filter: FilterArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the parsed syntax tree
    Tree {
        /// Grammar file to read
        file: PathBuf,
        /// Print `None` where an optional part was not written
        #[arg(long)]
        show_absent: bool,
        /// Spaces per indentation level
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
}

/// Flags that select which names are reported.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FilterArgs {
    /// Include names declared with `_`
    #[arg(long)]
    pub show_inner: bool,
    /// Include names declared with `?`
    #[arg(long)]
    pub show_conditional: bool,
    /// Leave out alias names
    #[arg(long)]
    pub hide_alias: bool,
    /// Leave out names declared with `!`
    #[arg(long)]
    pub hide_pinned: bool,
    /// Include every declared name
    #[arg(long, conflicts_with_all = ["show_inner", "show_conditional", "hide_alias", "hide_pinned"])]
    pub all: bool,
}

impl FilterArgs {
    /// Converts the flags into a filter policy.
    #[must_use]
    pub fn policy(&self) -> FilterPolicy {
        if self.all {
            return FilterPolicy::everything();
        }
        FilterPolicy::default()
            .with_inner(self.show_inner)
            .with_conditional(self.show_conditional)
            .with_alias(!self.hide_alias)
            .with_pinned(!self.hide_pinned)
    }
}

/// How results are printed.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// One entry per line.
    #[default]
    Text,
    /// A JSON array.
    Json,
}

/// Executes `cli`, writing results to `out`.
///
/// # Errors
///
/// Returns an error if the grammar file cannot be read or parsed, or if
/// writing to `out` fails.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Names {
            file,
            filter,
            format,
            markers,
        } => {
            let tree = load(file)?;
            let collected = collect(&tree);
            let names = classified_names(&collected, &filter.policy());
            info!(count = names.len(), "names selected");
            output::names(out, &names, *format, *markers)
        }
        Command::StartSymbols {
            file,
            extra,
            filter,
            format,
        } => {
            let tree = load(file)?;
            let names = assemble(&collect(&tree), &filter.policy());
            let symbols = start_symbols(names, extra.iter().cloned());
            info!(count = symbols.len(), "start symbols");
            output::strings(out, &symbols, *format)
        }
        Command::Tree {
            file,
            show_absent,
            indent,
        } => {
            let tree = load(file)?;
            let config = PrettyConfig::default()
                .with_indent_width(*indent)
                .with_absent(*show_absent);
            out.write_all(pretty_print_with_config(&tree, config).as_bytes())
                .map_err(Error::output)
        }
    }
}

/// Reads and parses a grammar file.
fn load(path: &Path) -> Result<Tree> {
    let source = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
    info!(file = %path.display(), bytes = source.len(), "read grammar");
    parse_named(&path.display().to_string(), &source)
}

/// Parses `source`, attaching `name` and the error position as context.
fn parse_named(name: &str, source: &str) -> Result<Tree> {
    gramdex_syntax::parse(source).map_err(|err| {
        let mut context = ErrorContext::new().with_source(name);
        if let Some((line, column)) = err.position() {
            context = context.with_position(line, column);
        }
        err.with_context(context)
    })
}

/// Renders an error as shown on the terminal.
///
/// The first line is `error: <message>`. Parse errors add the file
/// position and the offending source line.
#[must_use]
pub fn report(err: &Error) -> String {
    let mut text = format!("error: {err}");
    if let Some(context) = &err.context {
        let location = context.to_string();
        if !location.is_empty() {
            text.push_str("\n  ");
            text.push_str(&location);
        }
    }
    if let ErrorKind::ParseError { context, .. } = &err.kind {
        if !context.is_empty() {
            text.push_str("\n  | ");
            text.push_str(context);
        }
    }
    text
}
