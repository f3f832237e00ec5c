//! Ordered CSS selector builder.
//!
//! Fragments must follow the rank order
//! `element < id < class < attribute < pseudo-class < pseudo-element`, and
//! element, id and pseudo-element may each appear once per selector. Payloads
//! are never validated or escaped.

mod builder;
mod chain;
mod combinator;
mod kind;

pub use builder::{Builder, Chainable};
pub use chain::Chain;
pub use combinator::Combinator;
pub use kind::FragmentKind;
