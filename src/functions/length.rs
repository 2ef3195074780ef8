//! Checks for text and collections with a length.

use crate::constraints::{Empty, Length, NotEmpty, Size};
use crate::value::ToValue;
use crate::validator::Property;

impl<'a, V: ToValue + Length + ?Sized> Property<'a, V> {
    /// Value must have no elements.
    pub fn is_empty(self) -> Self {
        self.validate(Empty)
    }

    /// Value must be present and have at least one element.
    pub fn is_not_empty(self) -> Self {
        self.validate(NotEmpty)
    }

    /// Length must be within `min..=max`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conform::{validate, Value};
    ///
    /// let err = validate(vec!["a", "b", "c"], |v, tags| {
    ///     v.property("tags", Some(tags)).has_size(1, 2);
    /// })
    /// .unwrap_err();
    ///
    /// let size = err.first().constraint();
    /// assert_eq!(size.message_key(), "Size.between");
    /// assert_eq!(size.param("max"), Some(&Value::UInt(2)));
    /// ```
    pub fn has_size(self, min: usize, max: usize) -> Self {
        self.validate(Size::between(min, max))
    }

    /// Length must be at least `min`.
    pub fn has_min_size(self, min: usize) -> Self {
        self.validate(Size::min(min))
    }

    /// Length must be at most `max`.
    pub fn has_max_size(self, max: usize) -> Self {
        self.validate(Size::max(max))
    }
}

#[cfg(test)]
mod tests {
    use crate::validate;

    #[derive(Debug, Default)]
    struct Employee {
        name: Option<String>,
        tags: Option<Vec<String>>,
    }

    #[test]
    fn emptiness() {
        let employee = Employee {
            name: Some(String::new()),
            tags: Some(vec!["a".to_string()]),
        };

        let err = validate(employee, |v, e| {
            v.property("name", e.name.as_ref()).is_not_empty();
            v.property("tags", e.tags.as_ref()).is_empty();
        })
        .unwrap_err();

        let names: Vec<_> = err.iter().map(|v| v.constraint().name()).collect();
        assert_eq!(names, ["NotEmpty", "Empty"]);
    }

    #[test]
    fn not_empty_rejects_absence() {
        let err = validate(Employee::default(), |v, e| {
            v.property("name", e.name.as_ref()).is_not_empty();
            v.property("tags", e.tags.as_ref()).is_empty();
        })
        .unwrap_err();

        assert_eq!(err.len(), 1);
        assert_eq!(err.first().property(), "name");
    }

    #[test]
    fn size_variants() {
        let employee = Employee {
            name: Some("John".to_string()),
            tags: None,
        };

        assert!(validate(&employee, |v, e| {
            v.property("name", e.name.as_ref())
                .has_size(4, 4)
                .has_min_size(4)
                .has_max_size(4);
            v.property("tags", e.tags.as_ref()).has_min_size(1);
        })
        .is_ok());

        let err = validate(&employee, |v, e| {
            v.property("name", e.name.as_ref()).has_min_size(5);
        })
        .unwrap_err();
        assert_eq!(err.first().constraint().message_key(), "Size.min");

        let err = validate(&employee, |v, e| {
            v.property("name", e.name.as_ref()).has_max_size(3);
        })
        .unwrap_err();
        assert_eq!(err.first().constraint().message_key(), "Size.max");
    }
}
