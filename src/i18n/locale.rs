//! Locale tags

use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;

/// A language with an optional region, e.g. `pt-BR`.
///
/// The empty tag is the root locale, which selects the default catalog.
/// Parsing accepts `-` or `_` as separator and normalizes case, so `pt_br`
/// and `PT-BR` are the same locale.
///
/// # Example
///
/// ```rust
/// use conform::Locale;
///
/// let locale = Locale::parse("pt_br").unwrap();
/// assert_eq!(locale.to_string(), "pt-BR");
/// assert_eq!(locale.language_only().to_string(), "pt");
/// assert_eq!(Locale::parse("").unwrap(), Locale::ROOT);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// The root locale, selecting the default catalog.
    pub const ROOT: Locale = Locale {
        language: String::new(),
        region: None,
    };

    /// Parse a tag such as `en`, `pt-BR` or `pt_BR`.
    ///
    /// The empty string parses to [`Locale::ROOT`].
    pub fn parse(tag: &str) -> Result<Self, ParseLocaleError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Ok(Locale::ROOT);
        }

        let mut subtags = tag.split(['-', '_']);
        let language = subtags.next().unwrap_or_default();
        let region = subtags.next();

        let language_ok = (2..=8).contains(&language.len())
            && language.chars().all(|c| c.is_ascii_alphabetic());
        let region_ok = region.is_none_or(|region| {
            (2..=3).contains(&region.len()) && region.chars().all(|c| c.is_ascii_alphanumeric())
        });

        if !language_ok || !region_ok || subtags.next().is_some() {
            return Err(ParseLocaleError {
                tag: tag.to_string(),
            });
        }

        Ok(Locale {
            language: language.to_ascii_lowercase(),
            region: region.map(str::to_ascii_uppercase),
        })
    }

    /// Language subtag; empty for the root locale.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Region subtag, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Whether this is the root locale.
    pub fn is_root(&self) -> bool {
        self.language.is_empty()
    }

    /// This locale without its region.
    pub fn language_only(&self) -> Locale {
        Locale {
            language: self.language.clone(),
            region: None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(region) = &self.region {
            write!(f, "-{}", region)?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Locale::parse(tag)
    }
}

/// Error returned for a malformed locale tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLocaleError {
    tag: String,
}

impl ParseLocaleError {
    /// The rejected tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for ParseLocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid locale tag: {:?}", self.tag)
    }
}

impl StdError for ParseLocaleError {}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Locale;

    impl Serialize for Locale {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Locale {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let tag = String::deserialize(deserializer)?;
            Locale::parse(&tag).map_err(serde::de::Error::custom)
        }
    }
}
