//! Snapshot values
//!
//! Violations remember the value that was rejected, and constraints expose
//! their parameters for message interpolation. Both are captured as a
//! [`Value`]: an owned, comparable, hashable snapshot that outlives the
//! object graph it was taken from.
//!
//! Types opt in through [`ToValue`]. Primitives, strings, options and the
//! standard collections are covered; domain types that carry constraints of
//! their own can implement it directly.
//!
//! # Examples
//!
//! ```
//! use conform::{ToValue, Value};
//!
//! assert_eq!(42.to_value(), Value::Int(42));
//! assert_eq!("john".to_value(), Value::Text("john".to_string()));
//! assert_eq!(vec![1, 2].to_value().to_string(), "1, 2");
//! assert_eq!(None::<i32>.to_value(), Value::Null);
//! ```

use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An owned snapshot of a property value or constraint parameter.
///
/// Floats compare and hash by their bit pattern so that `Value` can be used
/// as a set member; `NaN` equals itself and `0.0` differs from `-0.0`.
///
/// `Display` renders text without quotes and lists joined by `", "`, which
/// is the form messages interpolate.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Absent value
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Single character
    Char(char),
    /// Text
    Text(String),
    /// Ordered sequence of values
    List(Vec<Value>),
}

impl Value {
    /// Check if this is [`Value::Null`].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The text content, if this is [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The elements, if this is [`Value::List`].
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(values) => Some(values),
            _ => None,
        }
    }

    /// Build a list value from anything that converts element-wise.
    ///
    /// # Examples
    ///
    /// ```
    /// use conform::Value;
    ///
    /// let list = Value::list(["b", "c"]);
    /// assert_eq!(list.to_string(), "b, c");
    /// ```
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToValue,
    {
        Value::List(values.into_iter().map(|v| v.to_value()).collect())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            Value::UInt(u) => u.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Char(c) => c.hash(state),
            Value::Text(s) => s.hash(state),
            Value::List(values) => values.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::UInt(u) => write!(f, "{}", u),
            Value::Float(x) => write!(f, "{}", x),
            Value::Char(c) => write!(f, "{}", c),
            Value::Text(s) => f.write_str(s),
            Value::List(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                Ok(())
            }
        }
    }
}

/// Conversion of a borrowed value into an owned [`Value`] snapshot.
///
/// # Example
///
/// ```
/// use conform::{ToValue, Value};
///
/// struct Money {
///     cents: i64,
/// }
///
/// impl ToValue for Money {
///     fn to_value(&self) -> Value {
///         Value::Int(self.cents)
///     }
/// }
///
/// assert_eq!(Money { cents: 150 }.to_value(), Value::Int(150));
/// ```
pub trait ToValue {
    /// Take a snapshot of this value.
    fn to_value(&self) -> Value;
}

impl<T: ToValue + ?Sized> ToValue for &T {
    #[inline]
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

macro_rules! impl_to_value {
    ($variant:ident as $repr:ty: $($ty:ty),+) => {
        $(
            impl ToValue for $ty {
                #[inline]
                fn to_value(&self) -> Value {
                    Value::$variant(*self as $repr)
                }
            }

            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    value.to_value()
                }
            }
        )+
    };
}

impl_to_value!(Int as i64: i8, i16, i32, i64, isize);
impl_to_value!(UInt as u64: u8, u16, u32, u64, usize);
impl_to_value!(Float as f64: f64);

impl ToValue for f32 {
    /// Widens through the shortest decimal form, so `1.1f32` snapshots as
    /// `1.1` rather than `1.100000023841858`.
    fn to_value(&self) -> Value {
        let widened = self.to_string().parse().unwrap_or(f64::from(*self));
        Value::Float(widened)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        value.to_value()
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Char(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::list(self)
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        Value::list(self)
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::list(self)
    }
}

impl<T: ToValue> ToValue for VecDeque<T> {
    fn to_value(&self) -> Value {
        Value::list(self)
    }
}

impl<T: ToValue> ToValue for BTreeSet<T> {
    fn to_value(&self) -> Value {
        Value::list(self)
    }
}

impl<T: ToValue, S> ToValue for HashSet<T, S> {
    fn to_value(&self) -> Value {
        Value::list(self)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
