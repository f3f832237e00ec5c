//! Fragment kinds and their rank order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a selector fragment.
///
/// Variants are declared in rank order, so the derived `Ord` is the rank:
/// `Element < Id < Class < Attribute < PseudoClass < PseudoElement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FragmentKind {
    /// Element (type) name, e.g. `div`
    Element,
    /// `#id`
    Id,
    /// `.class`
    Class,
    /// `[attribute]`
    Attribute,
    /// `:pseudo-class`
    PseudoClass,
    /// `::pseudo-element`
    PseudoElement,
}

impl FragmentKind {
    /// All kinds in rank order
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Position in the rank order, starting at 0
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Whether the kind may occur at most once per selector
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Format a raw payload the way this kind appears in a selector.
    ///
    /// The payload is inserted verbatim.
    #[must_use]
    pub fn format(self, value: &str) -> String {
        match self {
            Self::Element => value.to_string(),
            Self::Id => format!("#{value}"),
            Self::Class => format!(".{value}"),
            Self::Attribute => format!("[{value}]"),
            Self::PseudoClass => format!(":{value}"),
            Self::PseudoElement => format!("::{value}"),
        }
    }

    /// Human-readable name used in the ordering message
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
