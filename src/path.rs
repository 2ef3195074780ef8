//! Property paths
//!
//! A [`PropertyPath`] is the dotted/indexed address of a property inside the
//! object graph being validated. Paths are built one segment at a time while
//! the validator descends into nested objects and collections.
//!
//! # Examples
//!
//! ```
//! use conform::PropertyPath;
//!
//! let path = PropertyPath::root()
//!     .child("company")
//!     .child("addresses")
//!     .index(2)
//!     .child("city")
//!     .child("id");
//!
//! assert_eq!(path.as_str(), "company.addresses[2].city.id");
//! ```

use std::fmt;

/// Dotted/indexed path of a property relative to the validated root.
///
/// Property names are taken as-is; no escaping is performed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyPath(String);

impl PropertyPath {
    /// The empty path of the validated root itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use conform::PropertyPath;
    ///
    /// assert!(PropertyPath::root().is_root());
    /// assert_eq!(PropertyPath::root().as_str(), "");
    /// ```
    pub fn root() -> Self {
        PropertyPath(String::new())
    }

    /// Extend the path with a property name.
    ///
    /// The separating dot is omitted when this path is the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use conform::PropertyPath;
    ///
    /// let id = PropertyPath::root().child("id");
    /// assert_eq!(id.as_str(), "id");
    ///
    /// let nested = PropertyPath::root().child("address").child("id");
    /// assert_eq!(nested.as_str(), "address.id");
    /// ```
    pub fn child(&self, name: &str) -> Self {
        if self.0.is_empty() {
            PropertyPath(name.to_string())
        } else {
            let mut path = String::with_capacity(self.0.len() + name.len() + 1);
            path.push_str(&self.0);
            path.push('.');
            path.push_str(name);
            PropertyPath(path)
        }
    }

    /// Extend the path with a collection index.
    ///
    /// # Examples
    ///
    /// ```
    /// use conform::PropertyPath;
    ///
    /// let path = PropertyPath::root().child("dependents").index(0);
    /// assert_eq!(path.as_str(), "dependents[0]");
    /// ```
    pub fn index(&self, index: usize) -> Self {
        PropertyPath(format!("{}[{}]", self.0, index))
    }

    /// Check if this is the root path.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the path, returning the underlying string.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PropertyPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PropertyPath> for String {
    fn from(path: PropertyPath) -> Self {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_empty() {
        let root = PropertyPath::root();
        assert!(root.is_root());
        assert_eq!(root.to_string(), "");
    }

    #[test]
    fn child_of_root_has_no_leading_dot() {
        assert_eq!(PropertyPath::root().child("name").as_str(), "name");
    }

    #[test]
    fn index_of_root() {
        // A root collection has no name, only the index.
        assert_eq!(PropertyPath::root().index(3).as_str(), "[3]");
    }

    #[test]
    fn deep_composition() {
        let path = PropertyPath::root()
            .child("address")
            .child("city")
            .child("state")
            .child("country")
            .child("id");
        assert_eq!(path.as_str(), "address.city.state.country.id");
    }

    #[test]
    fn nested_indices() {
        let path = PropertyPath::root()
            .child("matrix")
            .index(1)
            .index(2)
            .child("cell");
        assert_eq!(path.as_str(), "matrix[1][2].cell");
    }

    #[test]
    fn parent_is_untouched() {
        let parent = PropertyPath::root().child("company");
        let _ = parent.child("id");
        let _ = parent.index(0);
        assert_eq!(parent.as_str(), "company");
    }
}
