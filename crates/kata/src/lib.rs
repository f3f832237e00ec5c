//! Kata: ordered CSS selector builder, rectangle factory and JSON helpers.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                         KATA                               │
//! ├────────────────────────────────────────────────────────────┤
//! │   ┌──────────┐  fragment   ┌──────────┐  render            │
//! │   │ Builder  │────────────►│  Chain   │──────────► String  │
//! │   │(no state)│             │(ordered) │                    │
//! │   └──────────┘             └──────────┘                    │
//! │        │ combine(left, combinator, right)  ▲               │
//! │        └───────────────────────────────────┘               │
//! │                                                            │
//! │   Rectangle ──serialize_to_json──► JSON ──Reconstruct──►   │
//! │                                   (declared field order)   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use kata::prelude::*;
//!
//! # fn main() -> KataResult<()> {
//! let selector = Builder::new()
//!     .id("main")?
//!     .class("container")?
//!     .class("editable")?;
//! assert_eq!(selector.render(), "#main.container.editable");
//!
//! let err = Builder::new().class("a")?.element("b").unwrap_err();
//! assert!(matches!(err, KataError::OrderViolation));
//!
//! let rect = make_rectangle(10.0, 20.0);
//! let json = serialize_to_json(&rect)?;
//! let back: Rectangle = deserialize_from_prototype(&json)?;
//! assert_eq!(back.area(), 200.0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Configuration (JSON style, logging), loadable from YAML
pub mod config;

/// JSON helpers and the `Reconstruct` contract
pub mod json;

/// Tracing subscriber setup
pub mod logging;

mod rectangle;
mod result;

/// Ordered CSS selector builder
pub mod selector;

pub use config::{JsonStyle, KataConfig, LogConfig};
pub use json::{
    deserialize_from_prototype, deserialize_positional, serialize_to_json,
    serialize_to_json_with, Reconstruct,
};
pub use logging::init_tracing;
pub use rectangle::{make_rectangle, Rectangle};
pub use result::{
    KataError, KataResult, DUPLICATE_SINGLETON_MESSAGE, ORDER_VIOLATION_MESSAGE,
};
pub use selector::{Builder, Chain, Chainable, Combinator, FragmentKind};

// Paths used by `#[derive(Reconstruct)]` expansions
#[doc(hidden)]
pub mod __private {
    pub use serde_json::Value;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use super::config::{JsonStyle, KataConfig, LogConfig};
    pub use super::json::{
        deserialize_from_prototype, deserialize_positional, serialize_to_json,
        serialize_to_json_with, Reconstruct,
    };
    pub use super::rectangle::{make_rectangle, Rectangle};
    pub use super::result::{KataError, KataResult};
    pub use super::selector::{Builder, Chain, Chainable, Combinator, FragmentKind};
}
