//! The selector value built by a chain of fragment calls.

use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use super::kind::FragmentKind;
use crate::result::{KataError, KataResult};

/// A selector under construction.
///
/// Chains are immutable: every fragment call returns a new `Chain` and leaves
/// the receiver untouched, so a shared prefix can be extended in several
/// directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chain {
    text: String,
    kinds: Vec<FragmentKind>,
    combined: bool,
}

impl Chain {
    /// Start a chain from an already formatted fragment
    #[must_use]
    pub fn new(fragment: impl Into<String>, kind: FragmentKind) -> Self {
        let text = fragment.into();
        debug!(selector = %text, %kind, "started selector chain");
        Self {
            text,
            kinds: vec![kind],
            combined: false,
        }
    }

    /// Join two chains with a combinator.
    ///
    /// The result renders as `"<left> <combinator> <right>"` and starts with an
    /// empty kind history.
    #[must_use]
    pub fn combined(left: &Self, combinator: &str, right: &Self) -> Self {
        let text = format!("{} {combinator} {}", left.text, right.text);
        debug!(selector = %text, "combined selectors");
        Self {
            text,
            kinds: Vec::new(),
            combined: true,
        }
    }

    /// Append an already formatted fragment, enforcing rank order only.
    ///
    /// Fails with [`KataError::OrderViolation`] when `kind` ranks below the
    /// last appended fragment.
    pub fn append(&self, fragment: &str, kind: FragmentKind) -> KataResult<Self> {
        if self.last_kind().is_some_and(|last| kind < last) {
            warn!(selector = %self.text, %kind, "fragment out of order");
            return Err(KataError::OrderViolation);
        }

        let mut next = self.clone();
        next.text.push_str(fragment);
        next.kinds.push(kind);
        Ok(next)
    }

    /// Format `value` as `kind` and append it.
    ///
    /// Element, id and pseudo-element are checked for a previous occurrence
    /// before the rank check, so a repeated singleton always reports
    /// [`KataError::DuplicateSingleton`].
    pub fn extend(&self, kind: FragmentKind, value: &str) -> KataResult<Self> {
        if kind.is_singleton() && self.contains(kind) {
            warn!(selector = %self.text, %kind, "singleton fragment repeated");
            return Err(KataError::DuplicateSingleton);
        }
        self.append(&kind.format(value), kind)
    }

    /// The selector text, unescaped
    #[must_use]
    pub fn render(&self) -> &str {
        &self.text
    }

    /// Kinds appended so far, in call order
    #[must_use]
    pub fn kinds(&self) -> &[FragmentKind] {
        &self.kinds
    }

    /// Most recently appended kind
    #[must_use]
    pub fn last_kind(&self) -> Option<FragmentKind> {
        self.kinds.last().copied()
    }

    /// Whether `kind` has been appended
    #[must_use]
    pub fn contains(&self, kind: FragmentKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Number of fragments in the kind history
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the kind history is empty (only true for combined chains)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Whether this chain came from `combine`
    #[must_use]
    pub const fn is_combined(&self) -> bool {
        self.combined
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Chain> for String {
    fn from(chain: Chain) -> Self {
        chain.text
    }
}
