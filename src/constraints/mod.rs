//! Built-in constraint catalog
//!
//! Stateless, immutable constraints covering null checks, equality,
//! membership, custom predicates, length bounds and text containment.
//!
//! | Constraint | Parameters | Absent value |
//! |---|---|---|
//! | [`Null`] | | valid |
//! | [`NotNull`] | | invalid |
//! | [`Equals`] / [`NotEquals`] | `value` | valid |
//! | [`In`] / [`NotIn`] | `values` | valid |
//! | [`Valid`] | | valid |
//! | [`Empty`] | | valid |
//! | [`NotEmpty`] | | invalid |
//! | [`Blank`] | | valid |
//! | [`NotBlank`] | | invalid |
//! | [`Size`] | `min`, `max` | valid |
//! | [`Contains`] / [`NotContain`] | `value` | valid |
//! | [`ContainsAll`] / [`ContainsAny`] | `values` | valid |
//! | [`NotContainAll`] / [`NotContainAny`] | `values` | valid |
//!
//! # Example
//!
//! ```rust
//! use conform::constraints::*;
//! use conform::Predicate;
//!
//! assert!(In::new([1, 2, 3]).check(&2));
//! assert!(Size::max(4).check("John"));
//! assert!(!NotBlank.check("  "));
//! ```

mod general;
mod length;
mod string;

pub use general::{Equals, In, NotEquals, NotIn, NotNull, Null, Valid};
pub use length::{Empty, Length, NotEmpty, Size};
pub use string::{
    Blank, Contains, ContainsAll, ContainsAny, NotBlank, NotContain, NotContainAll, NotContainAny,
};
