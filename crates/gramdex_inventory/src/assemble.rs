//! Turning collected declarations into the final name list.

use tracing::{debug, trace};

use crate::classify::{ClassifiedName, classify};
use crate::collector::CollectedDeclarations;
use crate::policy::FilterPolicy;

/// Classifies and filters collected declarations.
///
/// The working list is every rule spelling followed, when
/// `policy.show_alias` is set, by every alias spelling. Each is classified
/// and kept if [`FilterPolicy::admits`] it. Order is preserved.
///
/// # Panics
///
/// Panics if a spelling cannot be decomposed (see
/// [`decompose`](crate::classify::decompose)).
#[must_use]
pub fn classified_names(
    collected: &CollectedDeclarations,
    policy: &FilterPolicy,
) -> Vec<ClassifiedName> {
    let aliases = policy
        .show_alias
        .then(|| collected.aliases())
        .into_iter()
        .flatten();

    collected
        .rules()
        .chain(aliases)
        .map(|declaration| classify(&declaration))
        .filter(|name| {
            let admitted = policy.admits(name);
            if !admitted {
                trace!(name = %name.spelling(), kind = %name.kind, "filtered out");
            }
            admitted
        })
        .collect()
}

/// Produces the ordered list of base names admitted by `policy`.
///
/// Two spellings that differ only in their markers, such as `_foo` and
/// `?foo`, are distinct declarations; if both are admitted the base name
/// appears twice.
///
/// # Panics
///
/// Panics if a spelling cannot be decomposed (see
/// [`decompose`](crate::classify::decompose)).
#[must_use]
pub fn assemble(collected: &CollectedDeclarations, policy: &FilterPolicy) -> Vec<String> {
    let names: Vec<String> = classified_names(collected, policy)
        .into_iter()
        .map(|name| name.base_name)
        .collect();
    debug!(
        declared = collected.len(),
        kept = names.len(),
        "assembled names"
    );
    names
}
