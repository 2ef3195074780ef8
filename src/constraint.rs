//! Constraint protocol
//!
//! A constraint is a named, parameterized rule. Its identity (name, message
//! key and parameters) is described by [`Constraint`]; its behavior over a
//! property value of type `V` by [`Predicate<V>`].
//!
//! Splitting the two lets a violation keep a type-erased
//! [`ConstraintDescriptor`] while the validator stays fully typed.
//!
//! # Example
//!
//! ```rust
//! use conform::{Constraint, Predicate, Value};
//!
//! /// Value must be even
//! #[derive(Debug, Clone, Copy)]
//! struct Even;
//!
//! impl Constraint for Even {
//!     fn name(&self) -> &'static str {
//!         "Even"
//!     }
//! }
//!
//! impl Predicate<i32> for Even {
//!     fn check(&self, value: &i32) -> bool {
//!         value % 2 == 0
//!     }
//! }
//!
//! assert!(Even.test(Some(&4)));
//! assert!(!Even.test(Some(&3)));
//! assert!(Even.test(None)); // absence is not a failure
//! assert_eq!(Even.describe().name(), "Even");
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::value::Value;

/// Identity of a constraint: its name, message key and parameters.
pub trait Constraint {
    /// Constraint name, e.g. `"NotNull"`.
    fn name(&self) -> &'static str;

    /// Key used to look up the message template.
    ///
    /// Defaults to [`name`](Constraint::name). Constraints whose message
    /// depends on which parameters are set override it.
    fn message_key(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.name())
    }

    /// Named parameters, in interpolation order.
    fn params(&self) -> Vec<(&'static str, Value)> {
        Vec::new()
    }

    /// Snapshot this constraint's identity.
    fn describe(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: self.name(),
            message_key: self.message_key(),
            params: self.params(),
        }
    }
}

/// Behavior of a constraint over property values of type `V`.
///
/// Absent values are handled by [`accepts_null`](Predicate::accepts_null)
/// so that implementations of [`check`](Predicate::check) only ever see a
/// present value.
pub trait Predicate<V: ?Sized>: Constraint {
    /// Whether an absent value satisfies this constraint.
    ///
    /// Only the null family (`NotNull`, `NotEmpty`, `NotBlank`) rejects
    /// absence; everything else treats it as valid.
    fn accepts_null(&self) -> bool {
        true
    }

    /// Check a present value.
    fn check(&self, value: &V) -> bool;

    /// Check a possibly absent value.
    #[inline]
    fn test(&self, value: Option<&V>) -> bool {
        match value {
            Some(value) => self.check(value),
            None => self.accepts_null(),
        }
    }
}

impl<C: Constraint + ?Sized> Constraint for &C {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn message_key(&self) -> Cow<'static, str> {
        (**self).message_key()
    }

    fn params(&self) -> Vec<(&'static str, Value)> {
        (**self).params()
    }
}

impl<V: ?Sized, P: Predicate<V> + ?Sized> Predicate<V> for &P {
    fn accepts_null(&self) -> bool {
        (**self).accepts_null()
    }

    fn check(&self, value: &V) -> bool {
        (**self).check(value)
    }
}

/// Type-erased snapshot of a constraint stored in a violation.
///
/// Two descriptors are equal when their names and parameters are equal.
/// The message key is derived from those and does not take part.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConstraintDescriptor {
    name: &'static str,
    #[cfg_attr(feature = "serde", serde(skip))]
    message_key: Cow<'static, str>,
    params: Vec<(&'static str, Value)>,
}

impl ConstraintDescriptor {
    /// Constraint name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Message template key.
    #[inline]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Parameters in interpolation order.
    #[inline]
    pub fn params(&self) -> &[(&'static str, Value)] {
        &self.params
    }

    /// Look up a parameter by name.
    ///
    /// # Examples
    ///
    /// ```
    /// use conform::constraints::Size;
    /// use conform::{Constraint, Value};
    ///
    /// let size = Size::min(5).describe();
    /// assert_eq!(size.param("min"), Some(&Value::UInt(5)));
    /// assert_eq!(size.param("max"), None);
    /// ```
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

impl PartialEq for ConstraintDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.params == other.params
    }
}

impl Eq for ConstraintDescriptor {}

impl std::hash::Hash for ConstraintDescriptor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.params.hash(state);
    }
}

impl fmt::Display for ConstraintDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        if self.params.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match value {
                Value::List(_) => write!(f, "{}=[{}]", key, value)?,
                _ => write!(f, "{}={}", key, value)?,
            }
        }
        f.write_str(")")
    }
}

/// Constraints that can produce a lowercase copy of their own arguments.
pub trait FoldCase {
    /// Copy of this constraint with every text argument lowercased.
    fn fold_case(&self) -> Self;
}

/// Case-insensitive adapter over a case-sensitive text constraint.
///
/// Identity (name, parameters, message) comes from the wrapped constraint as
/// declared, so `is_equal_to_ignoring_case("B")` still reports `Equals(B)`.
/// Checking runs the case-folded copy against the lowercased value.
///
/// # Example
///
/// ```rust
/// use conform::constraints::Equals;
/// use conform::{Constraint, IgnoringCase, Predicate};
///
/// let equals = IgnoringCase::new(Equals::new("John".to_string()));
/// assert!(equals.check("JOHN"));
/// assert!(!equals.check("jane"));
/// assert_eq!(equals.describe(), Equals::new("John").describe());
/// ```
#[derive(Debug, Clone)]
pub struct IgnoringCase<C> {
    declared: C,
    folded: C,
}

impl<C: FoldCase> IgnoringCase<C> {
    /// Wrap a case-sensitive constraint.
    pub fn new(constraint: C) -> Self {
        let folded = constraint.fold_case();
        IgnoringCase {
            declared: constraint,
            folded,
        }
    }
}

impl<C> IgnoringCase<C> {
    /// The constraint as declared.
    pub fn inner(&self) -> &C {
        &self.declared
    }
}

impl<C: Constraint> Constraint for IgnoringCase<C> {
    fn name(&self) -> &'static str {
        self.declared.name()
    }

    fn message_key(&self) -> Cow<'static, str> {
        self.declared.message_key()
    }

    fn params(&self) -> Vec<(&'static str, Value)> {
        self.declared.params()
    }
}

impl<V, C> Predicate<V> for IgnoringCase<C>
where
    V: AsRef<str> + ?Sized,
    C: Predicate<str>,
{
    fn accepts_null(&self) -> bool {
        self.declared.accepts_null()
    }

    fn check(&self, value: &V) -> bool {
        self.folded.check(value.as_ref().to_lowercase().as_str())
    }
}
