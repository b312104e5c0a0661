//! Inclusion flags for assembled name lists.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classify::ClassifiedName;

/// Which categories of names make it into the output.
///
/// Each flag gates one category independently. A name is kept only if
/// every flag that applies to it is set.
///
/// ```
/// use gramdex_inventory::FilterPolicy;
///
/// let policy = FilterPolicy::default();
/// assert!(!policy.show_inner);
/// assert!(!policy.show_conditional);
/// assert!(policy.show_alias);
/// assert!(policy.show_pinned);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[allow(clippy::struct_excessive_bools)]
pub struct FilterPolicy {
    /// Keep names declared with `_`.
    pub show_inner: bool,
    /// Keep names declared with `?`.
    pub show_conditional: bool,
    /// Keep alias names at all.
    pub show_alias: bool,
    /// Keep names declared with `!`.
    pub show_pinned: bool,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            show_inner: false,
            show_conditional: false,
            show_alias: true,
            show_pinned: true,
        }
    }
}

impl FilterPolicy {
    /// A policy that keeps every name.
    #[must_use]
    pub const fn everything() -> Self {
        Self {
            show_inner: true,
            show_conditional: true,
            show_alias: true,
            show_pinned: true,
        }
    }

    /// Builder method to set `show_inner`.
    #[must_use]
    pub const fn with_inner(mut self, show: bool) -> Self {
        self.show_inner = show;
        self
    }

    /// Builder method to set `show_conditional`.
    #[must_use]
    pub const fn with_conditional(mut self, show: bool) -> Self {
        self.show_conditional = show;
        self
    }

    /// Builder method to set `show_alias`.
    #[must_use]
    pub const fn with_alias(mut self, show: bool) -> Self {
        self.show_alias = show;
        self
    }

    /// Builder method to set `show_pinned`.
    #[must_use]
    pub const fn with_pinned(mut self, show: bool) -> Self {
        self.show_pinned = show;
        self
    }

    /// Returns true if the name passes the pinned, inner and conditional gates.
    ///
    /// `show_alias` is not consulted here; alias names are dropped before
    /// classification when it is unset.
    #[must_use]
    pub const fn admits(&self, name: &ClassifiedName) -> bool {
        (!name.is_pinned() || self.show_pinned)
            && (!name.is_inner() || self.show_inner)
            && (!name.is_conditional() || self.show_conditional)
    }
}
