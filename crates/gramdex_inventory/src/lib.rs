//! Inventory of the names declared in a grammar description.
//!
//! This crate provides:
//! - [`collect`] - Gathers rule and alias spellings from a syntax tree
//! - [`decompose`] / [`classify`] - Splits a spelling into markers and base name
//! - [`FilterPolicy`] - Chooses which categories of names to keep
//! - [`assemble`] - Produces the final ordered name list
//! - [`start_symbols`] - Merges names with extra entry points
//!
//! The pipeline runs grammar text through the parser, the collector, the
//! classifier and the filter:
//!
//! ```
//! use gramdex_inventory::{FilterPolicy, rule_names};
//!
//! let grammar = "start: _item expr -> pair\n_item: \"a\"\n?expr: \"b\"\n!token: \"c\"";
//! let names = rule_names(grammar, &FilterPolicy::default()).unwrap();
//! assert_eq!(names, ["start", "token", "pair"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assemble;
pub mod classify;
pub mod collector;
pub mod declaration;
pub mod entry;
pub mod policy;

pub use assemble::{assemble, classified_names};
pub use classify::{ClassifiedName, Decomposition, Markers, Visibility, classify, decompose};
pub use collector::{CollectedDeclarations, DeclarationCollector, collect};
pub use declaration::{DeclarationKind, RawDeclaration};
pub use entry::start_symbols;
pub use policy::FilterPolicy;

use gramdex_foundation::Result;

/// Parses `source` and collects its declarations.
///
/// # Errors
///
/// Returns an error if `source` is not valid grammar text.
pub fn collect_source(source: &str) -> Result<CollectedDeclarations> {
    let tree = gramdex_syntax::parse(source)?;
    Ok(collect(&tree))
}

/// Parses `source` and returns the names admitted by `policy`.
///
/// # Errors
///
/// Returns an error if `source` is not valid grammar text.
pub fn rule_names(source: &str, policy: &FilterPolicy) -> Result<Vec<String>> {
    let collected = collect_source(source)?;
    Ok(assemble(&collected, policy))
}
