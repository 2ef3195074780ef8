//! Text constraints
//!
//! Blankness and substring containment over anything that is `AsRef<str>`.
//! All checks are case-sensitive; wrap them in
//! [`IgnoringCase`](crate::IgnoringCase) for the case-insensitive forms.

use crate::constraint::{Constraint, FoldCase, Predicate};
use crate::value::Value;

#[inline]
fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// Value must be empty or whitespace only.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Blank;

impl Constraint for Blank {
    fn name(&self) -> &'static str {
        "Blank"
    }
}

impl<V: AsRef<str> + ?Sized> Predicate<V> for Blank {
    #[inline]
    fn check(&self, value: &V) -> bool {
        is_blank(value.as_ref())
    }
}

/// Value must be present and contain a non-whitespace character.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct NotBlank;

impl Constraint for NotBlank {
    fn name(&self) -> &'static str {
        "NotBlank"
    }
}

impl<V: AsRef<str> + ?Sized> Predicate<V> for NotBlank {
    fn accepts_null(&self) -> bool {
        false
    }

    #[inline]
    fn check(&self, value: &V) -> bool {
        !is_blank(value.as_ref())
    }
}

// Single-substring constraints share their shape.
macro_rules! substring_constraint {
    ($(#[$doc:meta])* $name:ident, $label:literal, |$text:ident, $needle:ident| $check:expr) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            value: String,
        }

        impl $name {
            /// Create the constraint.
            pub fn new(value: impl Into<String>) -> Self {
                $name {
                    value: value.into(),
                }
            }
        }

        impl Constraint for $name {
            fn name(&self) -> &'static str {
                $label
            }

            fn params(&self) -> Vec<(&'static str, Value)> {
                vec![("value", Value::Text(self.value.clone()))]
            }
        }

        impl<V: AsRef<str> + ?Sized> Predicate<V> for $name {
            fn check(&self, value: &V) -> bool {
                let $text = value.as_ref();
                let $needle = self.value.as_str();
                $check
            }
        }

        impl FoldCase for $name {
            fn fold_case(&self) -> Self {
                $name::new(self.value.to_lowercase())
            }
        }
    };
}

// Substring-set constraints; the values keep their declared order.
macro_rules! substrings_constraint {
    ($(#[$doc:meta])* $name:ident, $label:literal, |$text:ident, $needles:ident| $check:expr) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            values: Vec<String>,
        }

        impl $name {
            /// Create the constraint from any iterable, array literals included.
            pub fn new<I>(values: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<String>,
            {
                $name {
                    values: values.into_iter().map(Into::into).collect(),
                }
            }
        }

        impl Constraint for $name {
            fn name(&self) -> &'static str {
                $label
            }

            fn params(&self) -> Vec<(&'static str, Value)> {
                vec![("values", Value::list(&self.values))]
            }
        }

        impl<V: AsRef<str> + ?Sized> Predicate<V> for $name {
            fn check(&self, value: &V) -> bool {
                let $text = value.as_ref();
                let $needles = &self.values;
                $check
            }
        }

        impl FoldCase for $name {
            fn fold_case(&self) -> Self {
                $name::new(self.values.iter().map(|v| v.to_lowercase()))
            }
        }
    };
}

substring_constraint!(
    /// Value must contain the substring.
    Contains, "Contains", |text, needle| text.contains(needle)
);

substring_constraint!(
    /// Value must not contain the substring.
    NotContain, "NotContain", |text, needle| !text.contains(needle)
);

substrings_constraint!(
    /// Value must contain every substring.
    ContainsAll, "ContainsAll", |text, needles| needles.iter().all(|n| text.contains(n.as_str()))
);

substrings_constraint!(
    /// Value must contain at least one of the substrings.
    ContainsAny, "ContainsAny", |text, needles| needles.iter().any(|n| text.contains(n.as_str()))
);

substrings_constraint!(
    /// Value must not contain every one of the substrings at once.
    NotContainAll, "NotContainAll", |text, needles| !needles.iter().all(|n| text.contains(n.as_str()))
);

substrings_constraint!(
    /// Value must contain none of the substrings.
    NotContainAny, "NotContainAny", |text, needles| !needles.iter().any(|n| text.contains(n.as_str()))
);
