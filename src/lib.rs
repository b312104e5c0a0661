//! gramdex - Inventory of the rules declared in grammar descriptions
//!
//! This crate re-exports all layers of the gramdex workspace for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: gramdex_cli         `gramdex` binary, argument parsing, output
//! Layer 2: gramdex_inventory   Collector, classifier, filter, start symbols
//! Layer 1: gramdex_syntax      Lexer, parser, syntax tree, tree printer
//! Layer 0: gramdex_foundation  Error, ErrorKind, Result
//! ```

pub use gramdex_cli as cli;
pub use gramdex_foundation as foundation;
pub use gramdex_inventory as inventory;
pub use gramdex_syntax as syntax;
