//! Checks available on every property type.

use crate::constraints::{Equals, In, NotEquals, NotIn, NotNull, Null, Valid};
use crate::value::ToValue;
use crate::validator::Property;

impl<'a, V: ToValue + ?Sized> Property<'a, V> {
    /// Value must be absent.
    pub fn is_null(self) -> Self {
        self.validate(Null)
    }

    /// Value must be present.
    pub fn is_not_null(self) -> Self {
        self.validate(NotNull)
    }

    /// Value must equal `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conform::validate;
    ///
    /// let err = validate(Some(2), |v, id| {
    ///     v.property("id", id.as_ref()).is_equal_to(1);
    /// })
    /// .unwrap_err();
    ///
    /// assert_eq!(err.first().constraint().to_string(), "Equals(value=1)");
    /// ```
    pub fn is_equal_to<T>(self, value: T) -> Self
    where
        V: PartialEq<T>,
        T: ToValue,
    {
        self.validate(Equals::new(value))
    }

    /// Value must differ from `value`.
    pub fn is_not_equal_to<T>(self, value: T) -> Self
    where
        V: PartialEq<T>,
        T: ToValue,
    {
        self.validate(NotEquals::new(value))
    }

    /// Value must be one of `values`.
    pub fn is_in<I, T>(self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        V: PartialEq<T>,
        T: ToValue,
    {
        self.validate(In::new(values))
    }

    /// Value must be none of `values`.
    pub fn is_not_in<I, T>(self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        V: PartialEq<T>,
        T: ToValue,
    {
        self.validate(NotIn::new(values))
    }

    /// Value must satisfy `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conform::validate;
    ///
    /// let result = validate(Some(7), |v, n| {
    ///     v.property("n", n.as_ref()).is_valid(|n| n % 2 == 1);
    /// });
    ///
    /// assert!(result.is_ok());
    /// ```
    pub fn is_valid<F>(self, predicate: F) -> Self
    where
        F: Fn(&V) -> bool,
    {
        self.validate(Valid::new(predicate))
    }
}
