//! Localized violation messages
//!
//! Violations carry a constraint's name, message key and parameters but no
//! text. This module turns them into messages:
//!
//! - [`Locale`] identifies a language and optional region.
//! - [`Catalog`] holds `key -> template` bundles per locale, with English
//!   and Brazilian Portuguese built in.
//! - [`Resolver`] looks templates up with fallback (exact locale, language,
//!   root) and fills `{name}` placeholders from the constraint parameters.
//!
//! # Example
//!
//! ```rust
//! use conform::{i18n, validate, Locale};
//!
//! #[derive(Debug)]
//! struct Employee {
//!     id: Option<i32>,
//!     name: Option<String>,
//! }
//!
//! let err = validate(Employee { id: None, name: Some("Jo".into()) }, |v, e| {
//!     v.property("id", e.id.as_ref()).is_not_null();
//!     v.property("name", e.name.as_ref()).has_min_size(3);
//! })
//! .unwrap_err();
//!
//! let messages: Vec<String> = i18n::resolve(&err, &Locale::parse("pt-BR").unwrap())
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//!
//! assert_eq!(
//!     messages,
//!     [
//!         "id: Não deve ser nulo",
//!         "name: O tamanho deve ser maior ou igual a 3",
//!     ]
//! );
//! ```

mod catalog;
mod locale;
mod resolver;

pub use catalog::Catalog;
pub use locale::{Locale, ParseLocaleError};
pub use resolver::{resolve, LocalizedViolation, Resolver};
