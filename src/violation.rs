//! Violations and the aggregate validation error
//!
//! A [`Violation`] records one constraint failing against one property. A
//! validation run that records at least one violation fails with
//! [`ConstraintViolations`], which carries all of them in declaration order.
//!
//! # Examples
//!
//! ```
//! use conform::constraints::NotNull;
//! use conform::{validate, Violation};
//!
//! #[derive(Debug)]
//! struct Employee {
//!     id: Option<i32>,
//! }
//!
//! let err = validate(Employee { id: None }, |v, e| {
//!     v.property("id", e.id.as_ref()).is_not_null();
//! })
//! .unwrap_err();
//!
//! assert_eq!(err.len(), 1);
//! assert_eq!(err.first(), &Violation::new("id", &NotNull));
//! assert_eq!(err.to_string(), "1 constraint violation\n  -> id: NotNull");
//! ```

use std::collections::HashSet;
use std::error::Error as StdError;
use std::fmt;

use crate::constraint::{Constraint, ConstraintDescriptor};
use crate::i18n::{Locale, LocalizedViolation};
use crate::value::{ToValue, Value};

/// A single constraint failure.
///
/// Equality is structural over the property path, the rejected value and
/// the constraint (name and parameters).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Violation {
    property: String,
    value: Option<Value>,
    constraint: ConstraintDescriptor,
}

impl Violation {
    /// Create a violation without a rejected value.
    ///
    /// # Examples
    ///
    /// ```
    /// use conform::constraints::Equals;
    /// use conform::{Value, Violation};
    ///
    /// let violation = Violation::new("id", &Equals::new(1)).with_value(2);
    /// assert_eq!(violation.property(), "id");
    /// assert_eq!(violation.value(), Some(&Value::Int(2)));
    /// assert_eq!(violation.constraint().name(), "Equals");
    /// ```
    pub fn new(property: impl Into<String>, constraint: &impl Constraint) -> Self {
        Violation {
            property: property.into(),
            value: None,
            constraint: constraint.describe(),
        }
    }

    /// Attach the rejected value.
    pub fn with_value(mut self, value: impl ToValue) -> Self {
        self.value = Some(value.to_value());
        self
    }

    pub(crate) fn from_parts(
        property: String,
        value: Option<Value>,
        constraint: ConstraintDescriptor,
    ) -> Self {
        Violation {
            property,
            value,
            constraint,
        }
    }

    /// Full path of the violating property.
    #[inline]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The rejected value, or `None` when the property was absent.
    #[inline]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// The constraint that failed.
    #[inline]
    pub fn constraint(&self) -> &ConstraintDescriptor {
        &self.constraint
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.constraint)?;
        if let Some(value) = &self.value {
            write!(f, " (rejected: {})", value)?;
        }
        Ok(())
    }
}

/// Error returned when validation records one or more violations.
///
/// Violations are ordered by declaration, depth-first, with collection
/// elements in index order. The collection is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolations {
    violations: Vec<Violation>,
}

impl ConstraintViolations {
    /// Wrap a list of violations.
    ///
    /// Returns `None` for an empty list, since a successful validation has
    /// nothing to report.
    ///
    /// # Examples
    ///
    /// ```
    /// use conform::constraints::NotNull;
    /// use conform::{ConstraintViolations, Violation};
    ///
    /// assert!(ConstraintViolations::from_vec(Vec::new()).is_none());
    ///
    /// let err = ConstraintViolations::from_vec(vec![Violation::new("id", &NotNull)]).unwrap();
    /// assert_eq!(err.len(), 1);
    /// ```
    pub fn from_vec(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(ConstraintViolations { violations })
        }
    }

    /// Number of violations (at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always `false`; present for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first recorded violation.
    #[inline]
    pub fn first(&self) -> &Violation {
        &self.violations[0]
    }

    /// Iterate over the violations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// The violations as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Violation] {
        &self.violations
    }

    /// Consume the error, returning the violations.
    pub fn into_vec(self) -> Vec<Violation> {
        self.violations
    }

    /// Find the violation recorded for a property path.
    ///
    /// There is at most one per path.
    pub fn get(&self, property: &str) -> Option<&Violation> {
        self.violations.iter().find(|v| v.property == property)
    }

    /// Resolve every violation's message in `locale` with the built-in
    /// catalog.
    ///
    /// Use a [`Resolver`](crate::Resolver) for custom catalogs.
    pub fn messages(&self, locale: &Locale) -> Vec<LocalizedViolation> {
        crate::i18n::resolve(&self.violations, locale)
    }
}

impl fmt::Display for ConstraintViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.violations.len();
        write!(
            f,
            "{} constraint violation{}",
            count,
            if count == 1 { "" } else { "s" }
        )?;
        for violation in &self.violations {
            write!(f, "\n  -> {}", violation)?;
        }
        Ok(())
    }
}

impl StdError for ConstraintViolations {}

impl IntoIterator for ConstraintViolations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConstraintViolations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl AsRef<[Violation]> for ConstraintViolations {
    fn as_ref(&self) -> &[Violation] {
        &self.violations
    }
}

/// Ordered violation collection shared by one validation call tree.
///
/// Keeps at most one violation per property path: once a path has failed,
/// later constraints on it are not evaluated again for the same call.
#[derive(Debug, Default)]
pub(crate) struct ViolationSet {
    violations: Vec<Violation>,
    failed: HashSet<String>,
}

impl ViolationSet {
    pub(crate) fn has_failed(&self, property: &str) -> bool {
        self.failed.contains(property)
    }

    /// Record a violation; ignored when its path already failed.
    pub(crate) fn record(&mut self, violation: Violation) -> bool {
        if self.failed.insert(violation.property.clone()) {
            self.violations.push(violation);
            true
        } else {
            false
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.violations.len()
    }

    pub(crate) fn into_result<T>(self, object: T) -> Result<T, ConstraintViolations> {
        match ConstraintViolations::from_vec(self.violations) {
            None => Ok(object),
            Some(violations) => Err(violations),
        }
    }
}
