//! Validation engine
//!
//! [`validate`] runs a block of declarations against an object. Inside the
//! block a [`Validator`] scope hands out [`Property`] handles, each bound to a
//! path and a value, on which constraints are declared in order. Nested
//! objects and collections get child scopes that extend the path and share
//! the parent's violation collection.
//!
//! Evaluation rules:
//!
//! - The first failing constraint on a property is recorded; later ones on
//!   the same path are not evaluated for the rest of the call.
//! - Absent values pass every constraint outside the null family.
//! - Descent into an absent nested object or collection is skipped.
//! - Violations come out in declaration order, depth-first, collection
//!   elements by index.
//!
//! # Example
//!
//! ```rust
//! use conform::validate;
//!
//! #[derive(Debug)]
//! struct City {
//!     id: Option<i32>,
//! }
//!
//! #[derive(Debug)]
//! struct Address {
//!     id: Option<i32>,
//!     city: Option<City>,
//! }
//!
//! #[derive(Debug)]
//! struct Company {
//!     name: Option<String>,
//!     addresses: Option<Vec<Address>>,
//! }
//!
//! let company = Company {
//!     name: None,
//!     addresses: Some(vec![
//!         Address { id: Some(1), city: Some(City { id: None }) },
//!         Address { id: None, city: None },
//!     ]),
//! };
//!
//! let err = validate(company, |v, company| {
//!     v.property("name", company.name.as_ref()).is_not_null().has_size(1, 40);
//!     v.each("addresses", company.addresses.as_ref(), |v, address| {
//!         v.property("id", address.id.as_ref()).is_not_null();
//!         v.nested("city", address.city.as_ref(), |v, city| {
//!             v.property("id", city.id.as_ref()).is_not_null();
//!         });
//!     });
//! })
//! .unwrap_err();
//!
//! let paths: Vec<&str> = err.iter().map(|v| v.property()).collect();
//! assert_eq!(paths, ["name", "addresses[0].city.id", "addresses[1].id"]);
//! ```

use crate::constraint::Predicate;
use crate::path::PropertyPath;
use crate::value::ToValue;
use crate::violation::{ConstraintViolations, Violation, ViolationSet};

/// Validate an object against a block of declarations.
///
/// Returns the object back when no constraint failed, so calls can be
/// chained; otherwise returns every recorded violation at once.
///
/// # Example
///
/// ```rust
/// use conform::validate;
///
/// struct Employee {
///     id: Option<i32>,
///     name: Option<String>,
/// }
///
/// let employee = validate(Employee { id: Some(1), name: Some("John".into()) }, |v, e| {
///     v.property("id", e.id.as_ref()).is_not_null();
///     v.property("name", e.name.as_ref()).is_not_blank();
/// })
/// .unwrap();
///
/// assert_eq!(employee.id, Some(1));
/// ```
pub fn validate<T, F>(object: T, declarations: F) -> Result<T, ConstraintViolations>
where
    F: FnOnce(&mut Validator<'_>, &T),
{
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("validate", object = std::any::type_name::<T>()).entered();

    let mut violations = ViolationSet::default();
    declarations(
        &mut Validator::new(PropertyPath::root(), &mut violations),
        &object,
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(violations = violations.len(), "validation finished");

    violations.into_result(object)
}

/// Declaration scope for one level of the object graph.
///
/// The outermost scope is created by [`validate`]; nested scopes are created
/// by [`nested`](Validator::nested) and [`each`](Validator::each) and live
/// only for the duration of their block.
#[derive(Debug)]
pub struct Validator<'a> {
    path: PropertyPath,
    violations: &'a mut ViolationSet,
}

impl<'a> Validator<'a> {
    pub(crate) fn new(path: PropertyPath, violations: &'a mut ViolationSet) -> Self {
        Validator { path, violations }
    }

    /// Path prefix of this scope; empty at the root.
    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    /// Number of violations recorded so far in the whole call.
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// Bind a property for declaring constraints.
    ///
    /// `value` is `None` when the property is absent.
    pub fn property<'p, V: ?Sized>(
        &'p mut self,
        name: &str,
        value: Option<&'p V>,
    ) -> Property<'p, V> {
        Property {
            path: self.path.child(name),
            value,
            violations: &mut *self.violations,
        }
    }

    /// Descend into a nested object.
    ///
    /// Skipped entirely when `value` is `None`.
    pub fn nested<T: ?Sized>(
        &mut self,
        name: &str,
        value: Option<&T>,
        block: impl FnOnce(&mut Validator<'_>, &T),
    ) {
        self.property(name, value).nested(block);
    }

    /// Descend into every element of a collection.
    ///
    /// Each element is validated in its own scope with path `name[index]`,
    /// in iteration order. Skipped entirely when `collection` is `None`.
    pub fn each<'p, C, T>(
        &'p mut self,
        name: &str,
        collection: Option<&'p C>,
        block: impl FnMut(&mut Validator<'_>, &T),
    ) where
        C: ?Sized,
        &'p C: IntoIterator<Item = &'p T>,
        T: 'p,
    {
        self.property(name, collection).each(block);
    }
}

/// A property bound to its path and current value.
///
/// Constraints are declared by chaining; each one is evaluated only while
/// the property has no violation in the current call.
#[derive(Debug)]
pub struct Property<'a, V: ?Sized> {
    path: PropertyPath,
    value: Option<&'a V>,
    violations: &'a mut ViolationSet,
}

impl<'a, V: ?Sized> Property<'a, V> {
    /// Full path of this property.
    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    /// Current value, `None` when absent.
    pub fn value(&self) -> Option<&'a V> {
        self.value
    }

    /// Whether a violation was already recorded for this path.
    pub fn has_violation(&self) -> bool {
        self.violations.has_failed(self.path.as_str())
    }

    /// Evaluate a constraint against the value.
    ///
    /// Does nothing when this path already failed in the current call.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conform::constraints::{Equals, In, NotNull};
    /// use conform::{validate, Violation};
    ///
    /// let err = validate(None::<i32>, |v, id| {
    ///     v.property("id", id.as_ref())
    ///         .validate(NotNull)
    ///         .validate(Equals::new(1))
    ///         .validate(In::new([1, 2, 3]));
    /// })
    /// .unwrap_err();
    ///
    /// assert_eq!(err.into_vec(), vec![Violation::new("id", &NotNull)]);
    /// ```
    pub fn validate<C>(self, constraint: C) -> Self
    where
        C: Predicate<V>,
        V: ToValue,
    {
        if self.has_violation() || constraint.test(self.value) {
            return self;
        }

        let violation = Violation::from_parts(
            self.path.to_string(),
            self.value.map(|value| value.to_value()),
            constraint.describe(),
        );

        #[cfg(feature = "tracing")]
        tracing::trace!(
            property = %violation.property(),
            constraint = %violation.constraint(),
            "constraint violated"
        );

        self.violations.record(violation);
        self
    }

    /// Descend into the object held by this property.
    ///
    /// Skipped when the value is absent.
    pub fn nested(mut self, block: impl FnOnce(&mut Validator<'_>, &V)) -> Self {
        if let Some(value) = self.value {
            block(
                &mut Validator::new(self.path.clone(), &mut *self.violations),
                value,
            );
        }
        self
    }

    /// Descend into every element of the collection held by this property.
    ///
    /// Skipped when the value is absent.
    pub fn each<T>(mut self, mut block: impl FnMut(&mut Validator<'_>, &T)) -> Self
    where
        &'a V: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        if let Some(collection) = self.value {
            for (index, element) in collection.into_iter().enumerate() {
                block(
                    &mut Validator::new(self.path.index(index), &mut *self.violations),
                    element,
                );
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{Equals, In, NotNull, Null, Size};
    use crate::Value;

    #[derive(Debug, Default)]
    struct Item {
        id: Option<i32>,
        tags: Option<Vec<Tag>>,
    }

    #[derive(Debug, Default)]
    struct Tag {
        label: Option<String>,
    }

    impl ToValue for Tag {
        fn to_value(&self) -> Value {
            Value::from(self.label.clone())
        }
    }

    #[test]
    fn returns_object_when_valid() {
        let item = validate(Item { id: Some(1), tags: None }, |v, item| {
            v.property("id", item.id.as_ref()).validate(NotNull);
        })
        .unwrap();
        assert_eq!(item.id, Some(1));
    }

    #[test]
    fn first_failure_short_circuits() {
        let err = validate(Item::default(), |v, item| {
            v.property("id", item.id.as_ref())
                .validate(NotNull)
                .validate(Equals::new(1))
                .validate(In::new([1, 2, 3]));
        })
        .unwrap_err();
        assert_eq!(err.into_vec(), vec![Violation::new("id", &NotNull)]);
    }

    #[test]
    fn later_constraints_run_while_earlier_pass() {
        let err = validate(Item { id: Some(5), tags: None }, |v, item| {
            v.property("id", item.id.as_ref())
                .validate(NotNull)
                .validate(Equals::new(5))
                .validate(In::new([1, 2, 3]))
                .validate(Null);
        })
        .unwrap_err();
        assert_eq!(
            err.into_vec(),
            vec![Violation::new("id", &In::new([1, 2, 3])).with_value(5)]
        );
    }

    #[test]
    fn redeclared_property_is_not_reported_twice() {
        let err = validate(Item { id: Some(5), tags: None }, |v, item| {
            v.property("id", item.id.as_ref()).validate(Equals::new(1));
            v.property("id", item.id.as_ref()).validate(Null);
        })
        .unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.first().constraint().name(), "Equals");
    }

    #[test]
    fn property_reports_prior_violation() {
        let _ = validate(Item::default(), |v, item| {
            let id = v.property("id", item.id.as_ref()).validate(NotNull);
            assert!(id.has_violation());
            assert_eq!(id.path().as_str(), "id");
            assert_eq!(id.value(), None);
        });
    }

    #[test]
    fn absent_nested_values_are_skipped() {
        let result = validate(Item::default(), |v, item| {
            v.each("tags", item.tags.as_ref(), |v, tag: &Tag| {
                v.property("label", tag.label.as_ref()).validate(NotNull);
            });
        });
        assert!(result.is_ok());
    }

    #[test]
    fn each_indexes_elements() {
        let item = Item {
            id: Some(1),
            tags: Some(vec![
                Tag { label: None },
                Tag {
                    label: Some("ok".to_string()),
                },
                Tag { label: None },
            ]),
        };

        let err = validate(item, |v, item| {
            v.each("tags", item.tags.as_ref(), |v, tag| {
                v.property("label", tag.label.as_ref()).validate(NotNull);
            });
        })
        .unwrap_err();

        let paths: Vec<&str> = err.iter().map(|v| v.property()).collect();
        assert_eq!(paths, ["tags[0].label", "tags[2].label"]);
    }

    #[test]
    fn constraints_and_descent_on_one_property() {
        let item = Item {
            id: None,
            tags: Some(vec![Tag { label: None }]),
        };

        let err = validate(item, |v, item| {
            v.property("tags", item.tags.as_ref())
                .validate(Size::max(0))
                .each(|v, tag: &Tag| {
                    v.property("label", tag.label.as_ref()).validate(NotNull);
                });
        })
        .unwrap_err();

        let paths: Vec<&str> = err.iter().map(|v| v.property()).collect();
        assert_eq!(paths, ["tags", "tags[0].label"]);
    }

    #[test]
    fn scope_paths() {
        let _ = validate(Item::default(), |v, _| {
            assert!(v.path().is_root());
            v.nested("outer", Some(&1), |v, _| {
                assert_eq!(v.path().as_str(), "outer");
                v.each("inner", Some(&[1, 2]), |v, _| {
                    assert!(v.path().as_str().starts_with("outer.inner["));
                });
            });
        });
    }

    #[test]
    fn violation_count_spans_scopes() {
        let _ = validate(Item::default(), |v, item| {
            v.property("id", item.id.as_ref()).validate(NotNull);
            v.nested("self", Some(item), |v, item| {
                v.property("id", item.id.as_ref()).validate(NotNull);
                assert_eq!(v.violation_count(), 2);
            });
        });
    }
}
