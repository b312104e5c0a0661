//! Start-symbol sets for parser construction.

use std::collections::BTreeSet;

/// Merges assembled names with extra entry points.
///
/// The result is deduplicated and sorted lexicographically, ready to be
/// handed to a parser as its set of accepted start rules.
///
/// ```
/// use gramdex_inventory::start_symbols;
///
/// let names = vec!["start".to_string(), "expr".to_string()];
/// let symbols = start_symbols(names, ["value", "expr"]);
/// assert_eq!(symbols, ["expr", "start", "value"]);
/// ```
#[must_use]
pub fn start_symbols<I, J>(names: I, extra: J) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
    J: IntoIterator,
    J::Item: Into<String>,
{
    let set: BTreeSet<String> = names
        .into_iter()
        .map(Into::into)
        .chain(extra.into_iter().map(Into::into))
        .collect();
    set.into_iter().collect()
}
