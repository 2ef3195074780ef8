//! # Conform
//!
//! Declarative object validation with localized messages.
//!
//! Describe the rules for an object as a block of property declarations.
//! Every violated rule is collected, with the full path of the offending
//! property, and returned at once; messages are resolved later for any
//! locale.
//!
//! ## Quick Example
//!
//! ```rust
//! use conform::{validate, Locale};
//!
//! #[derive(Debug)]
//! struct Dependent {
//!     id: Option<i32>,
//!     name: Option<String>,
//! }
//!
//! #[derive(Debug)]
//! struct Employee {
//!     id: Option<i32>,
//!     name: Option<String>,
//!     email: Option<String>,
//!     dependents: Option<Vec<Dependent>>,
//! }
//!
//! let employee = Employee {
//!     id: None,
//!     name: Some("John".into()),
//!     email: Some("john@company".into()),
//!     dependents: Some(vec![
//!         Dependent { id: Some(1), name: Some("Jane".into()) },
//!         Dependent { id: None, name: Some("".into()) },
//!     ]),
//! };
//!
//! let result = validate(employee, |v, e| {
//!     v.property("id", e.id.as_ref()).is_not_null();
//!     v.property("name", e.name.as_ref()).is_not_blank().has_size(2, 40);
//!     v.property("email", e.email.as_ref()).is_not_blank().contains_any([".com", ".org"]);
//!     v.each("dependents", e.dependents.as_ref(), |v, d| {
//!         v.property("id", d.id.as_ref()).is_not_null();
//!         v.property("name", d.name.as_ref()).is_not_blank();
//!     });
//! });
//!
//! let err = result.unwrap_err();
//! let messages: Vec<String> = err
//!     .messages(&Locale::ROOT)
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//!
//! assert_eq!(
//!     messages,
//!     [
//!         "id: Must not be null",
//!         "email: Must contain .com, .org",
//!         "dependents[1].id: Must not be null",
//!         "dependents[1].name: Must not be blank",
//!     ]
//! );
//! ```
//!
//! ## Features
//!
//! - `tracing`: spans and events for validation calls and message lookups
//! - `serde`: serialize violations and values, load message catalogs
//! - `proptest`: `Arbitrary` for [`Value`] and strategies in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod constraint;
pub mod constraints;
mod functions;
pub mod i18n;
pub mod path;
pub mod testing;
pub mod validator;
pub mod value;
pub mod violation;

// Re-exports
pub use constraint::{Constraint, ConstraintDescriptor, FoldCase, IgnoringCase, Predicate};
pub use i18n::{resolve, Catalog, Locale, LocalizedViolation, ParseLocaleError, Resolver};
pub use path::PropertyPath;
pub use validator::{validate, Property, Validator};
pub use value::{ToValue, Value};
pub use violation::{ConstraintViolations, Violation};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::constraint::{Constraint, IgnoringCase, Predicate};
    pub use crate::constraints::*;
    pub use crate::i18n::{Catalog, Locale, Resolver};
    pub use crate::validator::{validate, Property, Validator};
    pub use crate::value::{ToValue, Value};
    pub use crate::violation::{ConstraintViolations, Violation};
}
