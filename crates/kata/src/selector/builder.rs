//! Fluent selector builder.
//!
//! [`Builder`] is the stateless entry point and [`Chain`] the in-progress
//! selector. Both implement [`Chainable`], so the same calls start a chain or
//! continue one:
//!
//! ```rust
//! use kata::prelude::*;
//!
//! # fn main() -> kata::KataResult<()> {
//! let builder = Builder::new();
//! let link = builder
//!     .element("a")?
//!     .attr(r#"href$=".png""#)?
//!     .pseudo_class("focus")?;
//! assert_eq!(link.render(), r#"a[href$=".png"]:focus"#);
//!
//! let list = builder.element("ul")?;
//! let item = builder.element("li")?.pseudo_class("first-child")?;
//! let child = builder.combine(&list, Combinator::Child, &item);
//! assert_eq!(child.render(), "ul > li:first-child");
//! # Ok(())
//! # }
//! ```

use super::chain::Chain;
use super::kind::FragmentKind;
use crate::result::KataResult;

/// Fragment and combine operations shared by the builder and its chains.
pub trait Chainable {
    /// Append (or start with) a fragment of `kind` carrying `value`
    fn fragment(&self, kind: FragmentKind, value: &str) -> KataResult<Chain>;

    /// Selector text accumulated so far
    fn render(&self) -> &str;

    /// Owned copy of [`Chainable::render`]
    fn stringify(&self) -> String {
        self.render().to_string()
    }

    /// Element name, e.g. `div`
    fn element(&self, value: &str) -> KataResult<Chain> {
        self.fragment(FragmentKind::Element, value)
    }

    /// `#value`
    fn id(&self, value: &str) -> KataResult<Chain> {
        self.fragment(FragmentKind::Id, value)
    }

    /// `.value`
    fn class(&self, value: &str) -> KataResult<Chain> {
        self.fragment(FragmentKind::Class, value)
    }

    /// `[value]`, the payload given without brackets
    fn attr(&self, value: &str) -> KataResult<Chain> {
        self.fragment(FragmentKind::Attribute, value)
    }

    /// `:value`
    fn pseudo_class(&self, value: &str) -> KataResult<Chain> {
        self.fragment(FragmentKind::PseudoClass, value)
    }

    /// `::value`
    fn pseudo_element(&self, value: &str) -> KataResult<Chain> {
        self.fragment(FragmentKind::PseudoElement, value)
    }

    /// Join two finished selectors as `"<left> <combinator> <right>"`.
    ///
    /// The combinator is inserted verbatim. The result is a new chain with an
    /// empty kind history; neither input is modified.
    fn combine(&self, left: &Chain, combinator: impl AsRef<str>, right: &Chain) -> Chain
    where
        Self: Sized,
    {
        Chain::combined(left, combinator.as_ref(), right)
    }
}

/// Stateless entry point for building selectors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Builder;

impl Builder {
    /// Create a new builder
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Chainable for Builder {
    fn fragment(&self, kind: FragmentKind, value: &str) -> KataResult<Chain> {
        Ok(Chain::new(kind.format(value), kind))
    }

    fn render(&self) -> &str {
        ""
    }
}

impl Chainable for Chain {
    fn fragment(&self, kind: FragmentKind, value: &str) -> KataResult<Chain> {
        self.extend(kind, value)
    }

    fn render(&self) -> &str {
        Self::render(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::result::KataError;
    use crate::selector::Combinator;

    // =========================================================================
    // Fresh chains
    // =========================================================================

    #[test]
    fn builder_starts_each_kind() {
        let b = Builder::new();
        assert_eq!(b.element("div").unwrap().render(), "div");
        assert_eq!(b.id("main").unwrap().render(), "#main");
        assert_eq!(b.class("btn").unwrap().render(), ".btn");
        assert_eq!(b.attr("disabled").unwrap().render(), "[disabled]");
        assert_eq!(b.pseudo_class("hover").unwrap().render(), ":hover");
        assert_eq!(b.pseudo_element("before").unwrap().render(), "::before");
    }

    #[test]
    fn builder_renders_empty() {
        assert_eq!(Builder::new().render(), "");
        assert_eq!(Builder::new().stringify(), "");
    }

    #[test]
    fn chains_from_one_builder_are_independent() {
        let b = Builder::new();
        let first = b.element("p").unwrap();
        let second = b.element("span").unwrap();
        assert_eq!(first.render(), "p");
        assert_eq!(second.render(), "span");
    }

    // =========================================================================
    // Continuation
    // =========================================================================

    #[test]
    fn id_then_classes() {
        let selector = Builder::new()
            .id("main")
            .unwrap()
            .class("container")
            .unwrap()
            .class("editable")
            .unwrap()
            .stringify();
        assert_eq!(selector, "#main.container.editable");
    }

    #[test]
    fn element_attr_pseudo_class() {
        let selector = Builder::new()
            .element("a")
            .unwrap()
            .attr(r#"href$=".png""#)
            .unwrap()
            .pseudo_class("focus")
            .unwrap();
        assert_eq!(selector.render(), r#"a[href$=".png"]:focus"#);
    }

    #[test]
    fn element_then_id_with_same_payload() {
        let selector = Builder::new().element("div").unwrap().id("div").unwrap();
        assert_eq!(selector.render(), "div#div");
    }

    #[test]
    fn element_twice_is_duplicate() {
        let err = Builder::new()
            .element("div")
            .unwrap()
            .element("div")
            .unwrap_err();
        assert!(matches!(err, KataError::DuplicateSingleton));
    }

    #[test]
    fn class_then_element_is_out_of_order() {
        let err = Builder::new().class("a").unwrap().element("b").unwrap_err();
        assert!(matches!(err, KataError::OrderViolation));
    }

    #[test]
    fn pseudo_element_closes_the_chain() {
        let chain = Builder::new().pseudo_element("after").unwrap();
        assert!(matches!(
            chain.pseudo_class("hover").unwrap_err(),
            KataError::OrderViolation
        ));
        assert!(matches!(
            chain.pseudo_element("before").unwrap_err(),
            KataError::DuplicateSingleton
        ));
    }

    // =========================================================================
    // Combination
    // =========================================================================

    #[test]
    fn combine_inserts_combinator_with_spaces() {
        let b = Builder::new();
        let left = b.element("div").unwrap().id("main").unwrap();
        let right = b.element("span").unwrap().class("x").unwrap();
        assert_eq!(b.combine(&left, "+", &right).render(), "div#main + span.x");
        assert_eq!(
            b.combine(&left, Combinator::Sibling, &right).render(),
            "div#main ~ span.x"
        );
    }

    #[test]
    fn combine_descendant_keeps_single_space_each_side() {
        let b = Builder::new();
        let left = b.element("ul").unwrap();
        let right = b.element("li").unwrap();
        assert_eq!(
            b.combine(&left, Combinator::Descendant, &right).render(),
            "ul   li"
        );
    }

    #[test]
    fn combine_is_available_on_chains() {
        let b = Builder::new();
        let left = b.element("ul").unwrap();
        let right = b.element("li").unwrap();
        let joined = left.combine(&left, ">", &right);
        assert_eq!(joined.render(), "ul > li");
        assert_eq!(left.render(), "ul");
    }

    #[test]
    fn combined_result_stays_chainable_with_reset_history() {
        // Combined selectors accept further fragments; the kind history starts
        // empty, so even an element is accepted and lands on the right-hand
        // compound verbatim.
        let b = Builder::new();
        let left = b.element("ul").unwrap();
        let right = b.element("li").unwrap();
        let joined = b.combine(&left, ">", &right);
        assert_eq!(joined.class("active").unwrap().render(), "ul > li.active");
        assert_eq!(joined.element("a").unwrap().render(), "ul > lia");
    }
}
