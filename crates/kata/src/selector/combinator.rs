//! Combinators joining two complete selectors.

use std::fmt;

/// Symbol placed between two selectors by `combine`.
///
/// The four CSS combinators are named; anything else goes through
/// [`Combinator::Custom`] and is inserted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Combinator {
    /// Descendant (`' '`)
    Descendant,
    /// Next sibling (`+`)
    Adjacent,
    /// Subsequent sibling (`~`)
    Sibling,
    /// Child (`>`)
    Child,
    /// Unvalidated symbol
    Custom(String),
}

impl Combinator {
    /// Symbol as inserted into the combined text
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Descendant => " ",
            Self::Adjacent => "+",
            Self::Sibling => "~",
            Self::Child => ">",
            Self::Custom(symbol) => symbol,
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Combinator {
    fn from(symbol: &str) -> Self {
        match symbol {
            " " => Self::Descendant,
            "+" => Self::Adjacent,
            "~" => Self::Sibling,
            ">" => Self::Child,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
