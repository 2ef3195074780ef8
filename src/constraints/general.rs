//! General constraints
//!
//! Null checks, equality, membership and caller-supplied predicates. These
//! work for any property type that supports the comparison involved.

use std::fmt;

use crate::constraint::{Constraint, FoldCase, Predicate};
use crate::value::{ToValue, Value};

/// Value must be absent.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Null;

impl Constraint for Null {
    fn name(&self) -> &'static str {
        "Null"
    }
}

impl<V: ?Sized> Predicate<V> for Null {
    #[inline]
    fn check(&self, _value: &V) -> bool {
        false
    }
}

/// Value must be present.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct NotNull;

impl Constraint for NotNull {
    fn name(&self) -> &'static str {
        "NotNull"
    }
}

impl<V: ?Sized> Predicate<V> for NotNull {
    fn accepts_null(&self) -> bool {
        false
    }

    #[inline]
    fn check(&self, _value: &V) -> bool {
        true
    }
}

/// Value must equal the expected value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equals<T> {
    value: T,
}

impl<T> Equals<T> {
    /// Create the constraint.
    pub fn new(value: T) -> Self {
        Equals { value }
    }

    /// The expected value.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: ToValue> Constraint for Equals<T> {
    fn name(&self) -> &'static str {
        "Equals"
    }

    fn params(&self) -> Vec<(&'static str, Value)> {
        vec![("value", self.value.to_value())]
    }
}

impl<V: PartialEq<T> + ?Sized, T: ToValue> Predicate<V> for Equals<T> {
    #[inline]
    fn check(&self, value: &V) -> bool {
        *value == self.value
    }
}

/// Value must differ from the given value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotEquals<T> {
    value: T,
}

impl<T> NotEquals<T> {
    /// Create the constraint.
    pub fn new(value: T) -> Self {
        NotEquals { value }
    }
}

impl<T: ToValue> Constraint for NotEquals<T> {
    fn name(&self) -> &'static str {
        "NotEquals"
    }

    fn params(&self) -> Vec<(&'static str, Value)> {
        vec![("value", self.value.to_value())]
    }
}

impl<V: PartialEq<T> + ?Sized, T: ToValue> Predicate<V> for NotEquals<T> {
    #[inline]
    fn check(&self, value: &V) -> bool {
        *value != self.value
    }
}

/// Value must be one of the given values.
///
/// The values keep the order they were declared in; it is the order they
/// appear in messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct In<T> {
    values: Vec<T>,
}

impl<T> In<T> {
    /// Create the constraint from any iterable, array literals included.
    pub fn new<I: IntoIterator<Item = T>>(values: I) -> Self {
        In {
            values: values.into_iter().collect(),
        }
    }

    /// The allowed values.
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: ToValue> Constraint for In<T> {
    fn name(&self) -> &'static str {
        "In"
    }

    fn params(&self) -> Vec<(&'static str, Value)> {
        vec![("values", Value::list(&self.values))]
    }
}

impl<V: PartialEq<T> + ?Sized, T: ToValue> Predicate<V> for In<T> {
    fn check(&self, value: &V) -> bool {
        self.values.iter().any(|allowed| *value == *allowed)
    }
}

/// Value must not be any of the given values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotIn<T> {
    values: Vec<T>,
}

impl<T> NotIn<T> {
    /// Create the constraint from any iterable, array literals included.
    pub fn new<I: IntoIterator<Item = T>>(values: I) -> Self {
        NotIn {
            values: values.into_iter().collect(),
        }
    }
}

impl<T: ToValue> Constraint for NotIn<T> {
    fn name(&self) -> &'static str {
        "NotIn"
    }

    fn params(&self) -> Vec<(&'static str, Value)> {
        vec![("values", Value::list(&self.values))]
    }
}

impl<V: PartialEq<T> + ?Sized, T: ToValue> Predicate<V> for NotIn<T> {
    fn check(&self, value: &V) -> bool {
        self.values.iter().all(|denied| *value != *denied)
    }
}

/// Value must satisfy a caller-supplied predicate.
///
/// All `Valid` constraints describe the same way, since a closure has no
/// comparable identity.
#[derive(Clone, Copy)]
pub struct Valid<F> {
    predicate: F,
}

impl<F> Valid<F> {
    /// Create the constraint.
    pub fn new(predicate: F) -> Self {
        Valid { predicate }
    }
}

impl<F> fmt::Debug for Valid<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Valid").finish_non_exhaustive()
    }
}

impl<F> Constraint for Valid<F> {
    fn name(&self) -> &'static str {
        "Valid"
    }
}

impl<V: ?Sized, F: Fn(&V) -> bool> Predicate<V> for Valid<F> {
    fn check(&self, value: &V) -> bool {
        (self.predicate)(value)
    }
}

impl FoldCase for Equals<String> {
    fn fold_case(&self) -> Self {
        Equals::new(self.value.to_lowercase())
    }
}

impl FoldCase for NotEquals<String> {
    fn fold_case(&self) -> Self {
        NotEquals::new(self.value.to_lowercase())
    }
}

impl FoldCase for In<String> {
    fn fold_case(&self) -> Self {
        In::new(self.values.iter().map(|v| v.to_lowercase()))
    }
}

impl FoldCase for NotIn<String> {
    fn fold_case(&self) -> Self {
        NotIn::new(self.values.iter().map(|v| v.to_lowercase()))
    }
}
