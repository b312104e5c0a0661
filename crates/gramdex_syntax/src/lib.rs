//! Lexer, parser, and syntax tree for grammar-description files.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of grammar text
//! - [`Parser`] - Parsing tokens into a syntax [`Tree`]
//! - [`pretty`] - Indented dumps of parsed trees
//!
//! A grammar description declares rules (`expr: term "+" term`),
//! terminals (`NUMBER: /[0-9]+/`), aliases (`| atom -> value`), and
//! directives (`%import`, `%ignore`, `%declare`, `%override`, `%extend`).
//! The parser only produces structure; it never checks that referenced
//! names exist.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod span;
pub mod token;
pub mod tree;


pub use lexer::Lexer;
pub use parser::{Parser, parse};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use tree::{Child, NodeKind, Tree};
