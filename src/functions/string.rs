//! Checks for text properties.

use crate::constraint::IgnoringCase;
use crate::constraints::{
    Blank, Contains, ContainsAll, ContainsAny, Equals, In, NotBlank, NotContain, NotContainAll,
    NotContainAny, NotEquals, NotIn,
};
use crate::value::ToValue;
use crate::validator::Property;

impl<'a, V: ToValue + AsRef<str> + ?Sized> Property<'a, V> {
    /// Value must be empty or whitespace only.
    pub fn is_blank(self) -> Self {
        self.validate(Blank)
    }

    /// Value must be present and contain a non-whitespace character.
    pub fn is_not_blank(self) -> Self {
        self.validate(NotBlank)
    }

    /// Value must equal `value`, ignoring case.
    pub fn is_equal_to_ignoring_case(self, value: impl Into<String>) -> Self {
        self.validate(IgnoringCase::new(Equals::new(value.into())))
    }

    /// Value must differ from `value`, ignoring case.
    pub fn is_not_equal_to_ignoring_case(self, value: impl Into<String>) -> Self {
        self.validate(IgnoringCase::new(NotEquals::new(value.into())))
    }

    /// Value must be one of `values`, ignoring case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conform::{validate, Value};
    ///
    /// let err = validate("a".to_string(), |v, name| {
    ///     v.property("name", Some(name)).is_in_ignoring_case(["B", "c"]);
    /// })
    /// .unwrap_err();
    ///
    /// assert_eq!(
    ///     err.first().constraint().param("values"),
    ///     Some(&Value::list(["B", "c"]))
    /// );
    /// ```
    pub fn is_in_ignoring_case<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.validate(IgnoringCase::new(In::new(
            values.into_iter().map(Into::into),
        )))
    }

    /// Value must be none of `values`, ignoring case.
    pub fn is_not_in_ignoring_case<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.validate(IgnoringCase::new(NotIn::new(
            values.into_iter().map(Into::into),
        )))
    }

    /// Value must contain `value`.
    pub fn contains(self, value: impl Into<String>) -> Self {
        self.validate(Contains::new(value))
    }

    /// Value must contain `value`, ignoring case.
    pub fn contains_ignoring_case(self, value: impl Into<String>) -> Self {
        self.validate(IgnoringCase::new(Contains::new(value)))
    }

    /// Value must contain every one of `values`.
    pub fn contains_all<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.validate(ContainsAll::new(values))
    }

    /// Value must contain every one of `values`, ignoring case.
    pub fn contains_all_ignoring_case<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.validate(IgnoringCase::new(ContainsAll::new(values)))
    }

    /// Value must contain at least one of `values`.
    pub fn contains_any<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.validate(ContainsAny::new(values))
    }

    /// Value must contain at least one of `values`, ignoring case.
    pub fn contains_any_ignoring_case<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.validate(IgnoringCase::new(ContainsAny::new(values)))
    }

    /// Value must not contain `value`.
    pub fn does_not_contain(self, value: impl Into<String>) -> Self {
        self.validate(NotContain::new(value))
    }

    /// Value must not contain `value`, ignoring case.
    pub fn does_not_contain_ignoring_case(self, value: impl Into<String>) -> Self {
        self.validate(IgnoringCase::new(NotContain::new(value)))
    }

    /// Value must not contain all of `values` at once.
    pub fn does_not_contain_all<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.validate(NotContainAll::new(values))
    }

    /// Value must not contain all of `values` at once, ignoring case.
    pub fn does_not_contain_all_ignoring_case<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.validate(IgnoringCase::new(NotContainAll::new(values)))
    }

    /// Value must contain none of `values`.
    pub fn does_not_contain_any<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.validate(NotContainAny::new(values))
    }

    /// Value must contain none of `values`, ignoring case.
    pub fn does_not_contain_any_ignoring_case<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.validate(IgnoringCase::new(NotContainAny::new(values)))
    }
}
