//! Pretty-printer for syntax trees.
//!
//! Produces an indented dump with one node per line, which is mostly useful
//! for checking how a grammar was understood.
//!
//! # Example
//!
//! ```
//! use gramdex_syntax::{parse, pretty::pretty_print};
//!
//! let tree = parse("start: a -> b").unwrap();
//! let dump = pretty_print(&tree);
//! assert!(dump.starts_with("start\n  rule\n    start\n"));
//! ```

use std::fmt::Write;

use crate::token::{Token, TokenKind};
use crate::tree::{Child, Tree};

/// Configuration for pretty-printing.
#[derive(Debug, Clone)]
pub struct PrettyConfig {
    /// Number of spaces for each indentation level.
    pub indent_width: usize,
    /// Whether to print `None` for optional parts that were not written.
    pub show_absent: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_absent: false,
        }
    }
}

impl PrettyConfig {
    /// Builder method to set the indentation width.
    #[must_use]
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Builder method to print absent placeholders.
    #[must_use]
    pub fn with_absent(mut self, show_absent: bool) -> Self {
        self.show_absent = show_absent;
        self
    }
}

/// Pretty-print a tree to a string.
#[must_use]
pub fn pretty_print(tree: &Tree) -> String {
    pretty_print_with_config(tree, PrettyConfig::default())
}

/// Pretty-print a tree with custom configuration.
#[must_use]
pub fn pretty_print_with_config(tree: &Tree, config: PrettyConfig) -> String {
    let mut printer = PrettyPrinter::new(config);
    printer.print_tree(tree);
    printer.output
}

/// Pretty-printer state.
struct PrettyPrinter {
    config: PrettyConfig,
    output: String,
    indent_level: usize,
}

impl PrettyPrinter {
    fn new(config: PrettyConfig) -> Self {
        Self {
            config,
            output: String::new(),
            indent_level: 0,
        }
    }

    fn print_tree(&mut self, tree: &Tree) {
        self.line(tree.kind.name());
        self.indent_level += 1;
        for child in &tree.children {
            match child {
                Child::Tree(subtree) => self.print_tree(subtree),
                Child::Token(token) => self.line(&token_text(token)),
                Child::Absent if self.config.show_absent => self.line("None"),
                Child::Absent => {}
            }
        }
        self.indent_level -= 1;
    }

    fn line(&mut self, text: &str) {
        let indent = self.indent_level * self.config.indent_width;
        let _ = writeln!(self.output, "{:indent$}{text}", "");
    }
}

/// Renders a leaf the way it would be written in grammar text.
fn token_text(token: &Token) -> String {
    match &token.kind {
        TokenKind::Rule(name) | TokenKind::Terminal(name) => name.clone(),
        TokenKind::String {
            text,
            case_insensitive,
        } => {
            let flag = if *case_insensitive { "i" } else { "" };
            format!("\"{text}\"{flag}")
        }
        TokenKind::Regexp { pattern, flags } => format!("/{pattern}/{flags}"),
        TokenKind::Number(n) => n.to_string(),
        TokenKind::Directive(name) => format!("%{name}"),
        TokenKind::Dot => ".".to_string(),
        other => other.name().trim_matches('\'').to_string(),
    }
}
