//! Named checks on property handles
//!
//! Each method builds one of the [built-in constraints](crate::constraints)
//! and hands it to [`Property::validate`](crate::Property::validate), so
//! declarations read as a chain:
//!
//! ```rust
//! use conform::validate;
//!
//! struct Employee {
//!     name: Option<String>,
//!     email: Option<String>,
//! }
//!
//! let employee = Employee {
//!     name: Some("John".into()),
//!     email: Some("John@Company.com".into()),
//! };
//!
//! let result = validate(employee, |v, e| {
//!     v.property("name", e.name.as_ref())
//!         .is_not_blank()
//!         .has_size(2, 40);
//!     v.property("email", e.email.as_ref())
//!         .is_not_blank()
//!         .contains("@")
//!         .contains_any_ignoring_case([".com", ".org"]);
//! });
//!
//! assert!(result.is_ok());
//! ```
//!
//! Methods that take several values accept any `IntoIterator`, so array
//! literals, vectors and sets all work.
//!
//! The `_ignoring_case` variants compare lowercased forms of both sides but
//! report the constraint with the arguments exactly as declared.

mod general;
mod length;
mod string;
