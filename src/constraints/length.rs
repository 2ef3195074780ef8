//! Length constraints
//!
//! Emptiness and size bounds for anything with a [`Length`]: text (counted
//! in characters) and the standard collections.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::constraint::{Constraint, Predicate};
use crate::value::{ToValue, Value};

/// Number of elements in a value.
pub trait Length {
    /// The element count. Text counts `char`s, not bytes.
    fn length(&self) -> usize;
}

impl<T: Length + ?Sized> Length for &T {
    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }
}

impl Length for str {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl Length for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }
}

impl<T> Length for [T] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    #[inline]
    fn length(&self) -> usize {
        N
    }
}

macro_rules! impl_length {
    ($($ty:ident<$($p:ident),+>),+) => {
        $(
            impl<$($p),+> Length for $ty<$($p),+> {
                #[inline]
                fn length(&self) -> usize {
                    self.len()
                }
            }
        )+
    };
}

impl_length!(Vec<T>, VecDeque<T>, BTreeSet<T>, BTreeMap<K, V>, HashSet<T, S>, HashMap<K, V, S>);

/// Value must have no elements.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Empty;

impl Constraint for Empty {
    fn name(&self) -> &'static str {
        "Empty"
    }
}

impl<V: Length + ?Sized> Predicate<V> for Empty {
    #[inline]
    fn check(&self, value: &V) -> bool {
        value.length() == 0
    }
}

/// Value must be present and have at least one element.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct NotEmpty;

impl Constraint for NotEmpty {
    fn name(&self) -> &'static str {
        "NotEmpty"
    }
}

impl<V: Length + ?Sized> Predicate<V> for NotEmpty {
    fn accepts_null(&self) -> bool {
        false
    }

    #[inline]
    fn check(&self, value: &V) -> bool {
        value.length() > 0
    }
}

/// Value length must lie within optional inclusive bounds.
///
/// Each combination of bounds has its own message key: `Size.min`,
/// `Size.max`, `Size.between`, or plain `Size` when unbounded. Only the
/// bounds that are set appear as parameters.
///
/// # Example
///
/// ```rust
/// use conform::constraints::Size;
/// use conform::{Constraint, Predicate};
///
/// let size = Size::between(1, 3);
/// assert!(size.check("ab"));
/// assert!(!size.check("abcd"));
/// assert_eq!(size.message_key(), "Size.between");
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Size {
    min: Option<usize>,
    max: Option<usize>,
}

impl Size {
    /// Create the constraint from optional bounds.
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Size { min, max }
    }

    /// Lower bound only.
    pub fn min(min: usize) -> Self {
        Size::new(Some(min), None)
    }

    /// Upper bound only.
    pub fn max(max: usize) -> Self {
        Size::new(None, Some(max))
    }

    /// Both bounds, inclusive.
    pub fn between(min: usize, max: usize) -> Self {
        Size::new(Some(min), Some(max))
    }

    /// The lower bound.
    pub fn lower(&self) -> Option<usize> {
        self.min
    }

    /// The upper bound.
    pub fn upper(&self) -> Option<usize> {
        self.max
    }
}

impl Constraint for Size {
    fn name(&self) -> &'static str {
        "Size"
    }

    fn message_key(&self) -> Cow<'static, str> {
        Cow::Borrowed(match (self.min, self.max) {
            (Some(_), Some(_)) => "Size.between",
            (Some(_), None) => "Size.min",
            (None, Some(_)) => "Size.max",
            (None, None) => "Size",
        })
    }

    fn params(&self) -> Vec<(&'static str, Value)> {
        let mut params = Vec::with_capacity(2);
        if let Some(min) = self.min {
            params.push(("min", min.to_value()));
        }
        if let Some(max) = self.max {
            params.push(("max", max.to_value()));
        }
        params
    }
}

impl<V: Length + ?Sized> Predicate<V> for Size {
    fn check(&self, value: &V) -> bool {
        let len = value.length();
        self.min.is_none_or(|min| len >= min) && self.max.is_none_or(|max| len <= max)
    }
}
