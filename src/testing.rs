//! Testing utilities for validation code
//!
//! Assertion macros for validation results and, with the `proptest`
//! feature, strategies for generating [`Value`](crate::Value)s.
//!
//! # Examples
//!
//! ```rust
//! use conform::constraints::NotNull;
//! use conform::{assert_invalid, assert_valid, assert_violations, validate, Violation};
//!
//! #[derive(Debug)]
//! struct Employee {
//!     id: Option<i32>,
//! }
//!
//! let check = |e: Employee| {
//!     validate(e, |v, e| {
//!         v.property("id", e.id.as_ref()).is_not_null();
//!     })
//! };
//!
//! assert_valid!(check(Employee { id: Some(1) }));
//! assert_invalid!(check(Employee { id: None }));
//! assert_violations!(check(Employee { id: None }), [Violation::new("id", &NotNull)]);
//! ```

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::value::Value;

/// Assert that a validation result is `Ok`.
///
/// Panics with the violations when it is not.
///
/// # Example
///
/// ```rust
/// use conform::{assert_valid, validate};
///
/// assert_valid!(validate(Some(1), |v, id| {
///     v.property("id", id.as_ref()).is_not_null();
/// }));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Ok(_) => {}
            ::core::result::Result::Err(violations) => {
                panic!("Expected valid, got {}", violations);
            }
        }
    };
}

/// Assert that a validation result is `Err`.
///
/// Panics with the validated object when it is not.
///
/// # Example
///
/// ```rust
/// use conform::{assert_invalid, validate};
///
/// assert_invalid!(validate(None::<i32>, |v, id| {
///     v.property("id", id.as_ref()).is_not_null();
/// }));
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Err(_) => {}
            ::core::result::Result::Ok(object) => {
                panic!("Expected violations, got valid object: {:?}", object);
            }
        }
    };
}

/// Assert that a validation result fails with exactly the given violations,
/// in order.
///
/// # Example
///
/// ```rust
/// use conform::constraints::Equals;
/// use conform::{assert_violations, validate, Violation};
///
/// assert_violations!(
///     validate(Some(2), |v, id| {
///         v.property("id", id.as_ref()).is_equal_to(1);
///     }),
///     [Violation::new("id", &Equals::new(1)).with_value(2)]
/// );
/// ```
#[macro_export]
macro_rules! assert_violations {
    ($result:expr, $expected:expr) => {
        match $result {
            ::core::result::Result::Err(violations) => {
                let actual: ::std::vec::Vec<$crate::Violation> = violations.into_vec();
                let expected: ::std::vec::Vec<$crate::Violation> =
                    ::core::iter::IntoIterator::into_iter($expected).collect();
                assert_eq!(actual, expected);
            }
            ::core::result::Result::Ok(object) => {
                panic!(
                    "Expected violations {:?}, got valid object: {:?}",
                    $expected, object
                );
            }
        }
    };
}

/// Strategy for non-list values.
#[cfg(feature = "proptest")]
pub fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<u64>().prop_map(Value::UInt),
        any::<f64>().prop_map(Value::Float),
        any::<char>().prop_map(Value::Char),
        ".{0,12}".prop_map(Value::Text),
    ]
}

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        scalar_value()
            .prop_recursive(3, 24, 6, |inner| {
                prop::collection::vec(inner, 0..6).prop_map(Value::List)
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::constraints::{NotNull, Null};
    use crate::{validate, Violation};

    fn check(id: Option<i32>) -> Result<Option<i32>, crate::ConstraintViolations> {
        validate(id, |v, id| {
            v.property("id", id.as_ref()).is_not_null();
        })
    }

    #[test]
    fn assert_valid_macro() {
        assert_valid!(check(Some(1)));
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(check(None));
    }

    #[test]
    fn assert_violations_macro() {
        assert_violations!(check(None), vec![Violation::new("id", &NotNull)]);
    }

    #[test]
    #[should_panic(expected = "Expected valid, got 1 constraint violation")]
    fn assert_valid_panics_on_violations() {
        assert_valid!(check(None));
    }

    #[test]
    #[should_panic(expected = "Expected violations, got valid object")]
    fn assert_invalid_panics_on_valid() {
        assert_invalid!(check(Some(1)));
    }

    #[test]
    #[should_panic]
    fn assert_violations_panics_on_mismatch() {
        assert_violations!(check(None), [Violation::new("id", &Null)]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::super::scalar_value;
        use crate::Value;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn scalar_values_are_never_lists(value in scalar_value()) {
                prop_assert!(value.as_list().is_none());
            }

            #[test]
            fn arbitrary_values_equal_their_clones(value in any::<Value>()) {
                prop_assert_eq!(value.clone(), value);
            }
        }
    }
}
