//! Decomposition of declared spellings into markers and a base name.
//!
//! A spelling carries at most two leading markers, read in a fixed order:
//!
//! 1. `!` marks the name as pinned (its tokens are kept in the tree).
//! 2. `_` marks it inner, or `?` marks it conditional. Never both.
//!
//! Whatever follows is the base name, which must begin with a lowercase
//! ASCII letter. Any other shape cannot come out of the lexer, so meeting
//! one is a bug upstream and panics.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::declaration::{DeclarationKind, RawDeclaration};

/// The inner/conditional category of a name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Visibility {
    /// No `_` or `?` marker.
    #[default]
    Public,
    /// `_` marker: the rule is inlined into its parent.
    Inner,
    /// `?` marker: the rule is inlined when it has a single child.
    Conditional,
}

impl Visibility {
    /// Returns the marker character, if any.
    #[must_use]
    pub const fn marker(self) -> Option<char> {
        match self {
            Self::Public => None,
            Self::Inner => Some('_'),
            Self::Conditional => Some('?'),
        }
    }
}

/// The markers found in front of a spelling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Markers {
    /// A leading `!` was present.
    pub pinned: bool,
    /// What followed the optional `!`.
    pub visibility: Visibility,
}

impl Markers {
    /// No markers at all.
    pub const NONE: Self = Self {
        pinned: false,
        visibility: Visibility::Public,
    };

    /// Creates a marker set.
    #[must_use]
    pub const fn new(pinned: bool, visibility: Visibility) -> Self {
        Self { pinned, visibility }
    }

    /// Returns true if the `_` marker was present.
    #[must_use]
    pub const fn is_inner(self) -> bool {
        matches!(self.visibility, Visibility::Inner)
    }

    /// Returns true if the `?` marker was present.
    #[must_use]
    pub const fn is_conditional(self) -> bool {
        matches!(self.visibility, Visibility::Conditional)
    }
}

/// Renders the markers the way they are written, e.g. `!_`.
impl fmt::Display for Markers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pinned {
            f.write_str("!")?;
        }
        if let Some(marker) = self.visibility.marker() {
            write!(f, "{marker}")?;
        }
        Ok(())
    }
}

/// A spelling split into its markers and base name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decomposition<'a> {
    /// The spelling with all markers removed.
    pub base_name: &'a str,
    /// The markers that were removed.
    pub markers: Markers,
}

/// Splits a spelling into markers and base name.
///
/// # Panics
///
/// Panics if the text left after the markers does not start with a
/// lowercase ASCII letter (for example `?_x`, `!!x` or a bare `_`).
/// The lexer never produces such rule names.
#[must_use]
pub fn decompose(spelling: &str) -> Decomposition<'_> {
    let (pinned, rest) = match spelling.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, spelling),
    };

    let (visibility, base_name) = if let Some(base) = rest.strip_prefix('_') {
        (Visibility::Inner, base)
    } else if let Some(base) = rest.strip_prefix('?') {
        (Visibility::Conditional, base)
    } else {
        (Visibility::Public, rest)
    };

    assert!(
        base_name.starts_with(|c: char| c.is_ascii_lowercase()),
        "cannot decode declaration markers in {spelling:?}"
    );

    Decomposition {
        base_name,
        markers: Markers::new(pinned, visibility),
    }
}

/// A declaration after marker decomposition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassifiedName {
    /// The name without markers.
    pub base_name: String,
    /// The markers the declaration carried.
    pub markers: Markers,
    /// Which construct declared it.
    pub kind: DeclarationKind,
}

impl ClassifiedName {
    /// Returns true if the name was declared with `!`.
    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        self.markers.pinned
    }

    /// Returns true if the name was declared with `_`.
    #[must_use]
    pub const fn is_inner(&self) -> bool {
        self.markers.is_inner()
    }

    /// Returns true if the name was declared with `?`.
    #[must_use]
    pub const fn is_conditional(&self) -> bool {
        self.markers.is_conditional()
    }

    /// Rebuilds the spelling as it was declared.
    #[must_use]
    pub fn spelling(&self) -> String {
        format!("{}{}", self.markers, self.base_name)
    }
}

/// Classifies one raw declaration.
///
/// # Panics
///
/// Panics under the same conditions as [`decompose`].
#[must_use]
pub fn classify(declaration: &RawDeclaration<'_>) -> ClassifiedName {
    let Decomposition { base_name, markers } = decompose(declaration.spelling);
    ClassifiedName {
        base_name: base_name.to_string(),
        markers,
        kind: declaration.kind,
    }
}
