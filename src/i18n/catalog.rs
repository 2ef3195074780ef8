//! Message catalogs
//!
//! A [`Catalog`] maps locales to bundles of `message key -> template`.
//! Templates use `{name}` placeholders filled from constraint parameters.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::locale::Locale;

/// Invariant default templates; also registered for `en`.
const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("Null", "Must be null"),
    ("NotNull", "Must not be null"),
    ("Equals", "Must be equal to {value}"),
    ("NotEquals", "Must not be equal to {value}"),
    ("In", "Must be in {values}"),
    ("NotIn", "Must not be in {values}"),
    ("Valid", "Must be valid"),
    ("Empty", "Must be empty"),
    ("NotEmpty", "Must not be empty"),
    ("Blank", "Must be blank"),
    ("NotBlank", "Must not be blank"),
    ("Size", "Must have a valid size"),
    ("Size.min", "Size must be greater than or equal to {min}"),
    ("Size.max", "Size must be less than or equal to {max}"),
    ("Size.between", "Size must be between {min} and {max}"),
    ("Contains", "Must contain {value}"),
    ("ContainsAll", "Must contain {values}"),
    ("ContainsAny", "Must contain {values}"),
    ("NotContain", "Must not contain {value}"),
    ("NotContainAll", "Must not contain {values}"),
    ("NotContainAny", "Must not contain {values}"),
];

const PT_BR_MESSAGES: &[(&str, &str)] = &[
    ("Null", "Deve ser nulo"),
    ("NotNull", "Não deve ser nulo"),
    ("Equals", "Deve ser igual a {value}"),
    ("NotEquals", "Não deve ser igual a {value}"),
    ("In", "Deve ser um desses: {values}"),
    ("NotIn", "Não deve ser um desses: {values}"),
    ("Valid", "Deve ser válido"),
    ("Empty", "Deve ser vazio"),
    ("NotEmpty", "Não deve ser vazio"),
    ("Blank", "Deve estar em branco"),
    ("NotBlank", "Não deve estar em branco"),
    ("Size", "O tamanho deve ser válido"),
    ("Size.min", "O tamanho deve ser maior ou igual a {min}"),
    ("Size.max", "O tamanho deve ser menor ou igual a {max}"),
    ("Size.between", "O tamanho deve estar entre {min} e {max}"),
    ("Contains", "Deve conter {value}"),
    ("ContainsAll", "Deve conter {values}"),
    ("ContainsAny", "Deve conter {values}"),
    ("NotContain", "Não deve conter {value}"),
    ("NotContainAll", "Não deve conter {values}"),
    ("NotContainAny", "Não deve conter {values}"),
];

/// Locale-indexed message templates.
///
/// Lookups fall back from the exact locale to its language, then to the
/// root locale. Catalogs are read-only once built and can be shared freely
/// between threads.
///
/// # Example
///
/// ```rust
/// use conform::{Catalog, Locale};
///
/// let fr = Locale::parse("fr").unwrap();
/// let catalog = Catalog::builtin().with_bundle(fr.clone(), [("NotNull", "Ne doit pas être nul")]);
///
/// assert_eq!(catalog.template(&fr, "NotNull"), Some("Ne doit pas être nul"));
/// // missing in `fr`, found in the root bundle
/// assert_eq!(catalog.template(&fr, "Null"), Some("Must be null"));
/// // `fr-CA` falls back to `fr`
/// let fr_ca = Locale::parse("fr-CA").unwrap();
/// assert_eq!(catalog.template(&fr_ca, "NotNull"), Some("Ne doit pas être nul"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Catalog {
    bundles: HashMap<Locale, HashMap<String, String>>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// The built-in catalog: English as the root and `en` bundles, and
    /// Brazilian Portuguese as `pt-BR`.
    pub fn builtin() -> Self {
        shared().clone()
    }

    /// Add or replace one template.
    ///
    /// Returns the template it replaced.
    pub fn insert(
        &mut self,
        locale: Locale,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Option<String> {
        self.bundles
            .entry(locale)
            .or_default()
            .insert(key.into(), template.into())
    }

    /// Add or replace templates for a locale.
    pub fn with_bundle<I, K, T>(mut self, locale: Locale, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<String>,
    {
        let bundle = self.bundles.entry(locale).or_default();
        bundle.extend(
            entries
                .into_iter()
                .map(|(key, template)| (key.into(), template.into())),
        );
        self
    }

    /// Overlay another catalog; its templates win on conflict.
    pub fn merge(mut self, other: Catalog) -> Self {
        for (locale, bundle) in other.bundles {
            self = self.with_bundle(locale, bundle);
        }
        self
    }

    /// Locales with at least one template.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.bundles.keys()
    }

    /// Find the template for `key`, falling back through the locale's
    /// language and then the root locale.
    pub fn template(&self, locale: &Locale, key: &str) -> Option<&str> {
        let language = locale.language_only();
        let root = Locale::ROOT;
        let candidates = [locale, &language, &root];
        candidates
            .iter()
            .find_map(|candidate| self.lookup(candidate, key))
    }

    fn lookup(&self, locale: &Locale, key: &str) -> Option<&str> {
        self.bundles
            .get(locale)
            .and_then(|bundle| bundle.get(key))
            .map(String::as_str)
    }

    /// Deserialize a catalog from a `locale tag -> { key -> template }` map.
    ///
    /// The result holds only what was deserialized; combine it with
    /// [`Catalog::builtin`] through [`merge`](Catalog::merge) to keep the
    /// defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(feature = "serde")]
    /// # {
    /// use conform::{Catalog, Locale};
    ///
    /// let json = r#"{ "de": { "NotNull": "Darf nicht null sein" } }"#;
    /// let mut deserializer = serde_json::Deserializer::from_str(json);
    /// let catalog = Catalog::builtin().merge(Catalog::from_bundles(&mut deserializer).unwrap());
    ///
    /// let de = Locale::parse("de").unwrap();
    /// assert_eq!(catalog.template(&de, "NotNull"), Some("Darf nicht null sein"));
    /// # }
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_bundles<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Catalog as serde::Deserialize>::deserialize(deserializer)
    }
}

/// The built-in catalog, built once.
pub(crate) fn shared() -> &'static Catalog {
    static BUILTIN: OnceLock<Catalog> = OnceLock::new();
    BUILTIN.get_or_init(|| {
        Catalog::new()
            .with_bundle(Locale::ROOT, DEFAULT_MESSAGES.iter().copied())
            .with_bundle(locale("en"), DEFAULT_MESSAGES.iter().copied())
            .with_bundle(locale("pt-BR"), PT_BR_MESSAGES.iter().copied())
    })
}

fn locale(tag: &str) -> Locale {
    Locale::parse(tag).unwrap_or_default()
}
