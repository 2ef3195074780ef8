//! Violation message resolution

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use super::catalog::{self, Catalog};
use super::locale::Locale;
use crate::constraint::ConstraintDescriptor;
use crate::value::Value;
use crate::violation::Violation;

/// A violation together with its resolved message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocalizedViolation {
    property: String,
    value: Option<Value>,
    constraint: ConstraintDescriptor,
    message: String,
}

impl LocalizedViolation {
    /// Full path of the violating property.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The rejected value, or `None` when the property was absent.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// The constraint that failed.
    pub fn constraint(&self) -> &ConstraintDescriptor {
        &self.constraint
    }

    /// The resolved message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LocalizedViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.message)
    }
}

/// Turns violations into messages using a [`Catalog`].
///
/// Resolution is pure: the same violations and locale always produce the
/// same messages, in the same order.
///
/// # Example
///
/// ```rust
/// use conform::constraints::{In, Size};
/// use conform::{Locale, Resolver, Violation};
///
/// let resolver = Resolver::default();
/// let pt_br = Locale::parse("pt-BR").unwrap();
///
/// let violations = [
///     Violation::new("name", &Size::between(5, 10)).with_value("John"),
///     Violation::new("role", &In::new(["admin", "user"])).with_value("guest"),
/// ];
///
/// let messages: Vec<String> = resolver
///     .resolve(&violations, &pt_br)
///     .into_iter()
///     .map(|v| v.message().to_string())
///     .collect();
///
/// assert_eq!(
///     messages,
///     [
///         "O tamanho deve estar entre 5 e 10",
///         "Deve ser um desses: admin, user",
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Catalog,
    default_locale: Locale,
}

impl Resolver {
    /// Resolver over `catalog`, defaulting to the root locale.
    pub fn new(catalog: Catalog) -> Self {
        Resolver {
            catalog,
            default_locale: Locale::ROOT,
        }
    }

    /// Set the locale used by [`resolve_default`](Resolver::resolve_default).
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    /// The catalog templates come from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The configured default locale.
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Message for one constraint in `locale`.
    ///
    /// When no bundle has a template for the constraint's message key, the
    /// key itself is used as the template.
    pub fn message(&self, constraint: &ConstraintDescriptor, locale: &Locale) -> String {
        let key = constraint.message_key();
        let template = match self.catalog.template(locale, key) {
            Some(template) => template,
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(key, %locale, "no message template for constraint");
                key
            }
        };
        interpolate(template, constraint)
    }

    /// Resolve one violation.
    pub fn resolve_one(&self, violation: &Violation, locale: &Locale) -> LocalizedViolation {
        LocalizedViolation {
            property: violation.property().to_string(),
            value: violation.value().cloned(),
            constraint: violation.constraint().clone(),
            message: self.message(violation.constraint(), locale),
        }
    }

    /// Resolve violations in order.
    ///
    /// Repeated violations are resolved once, at their first position.
    pub fn resolve<'v, I>(&self, violations: I, locale: &Locale) -> Vec<LocalizedViolation>
    where
        I: IntoIterator<Item = &'v Violation>,
    {
        let mut seen = HashSet::new();
        violations
            .into_iter()
            .filter(|violation| seen.insert(*violation))
            .map(|violation| self.resolve_one(violation, locale))
            .collect()
    }

    /// Resolve violations in the default locale.
    pub fn resolve_default<'v, I>(&self, violations: I) -> Vec<LocalizedViolation>
    where
        I: IntoIterator<Item = &'v Violation>,
    {
        self.resolve(violations, &self.default_locale)
    }
}

impl Default for Resolver {
    /// Resolver over the built-in catalog.
    fn default() -> Self {
        Resolver::new(Catalog::builtin())
    }
}

/// Resolve violations in `locale` with the built-in catalog.
///
/// # Example
///
/// ```rust
/// use conform::constraints::NotNull;
/// use conform::{i18n, Locale, Violation};
///
/// let violations = [Violation::new("id", &NotNull)];
/// let messages = i18n::resolve(&violations, &Locale::parse("pt-BR").unwrap());
/// assert_eq!(messages[0].message(), "Não deve ser nulo");
/// ```
pub fn resolve<'v, I>(violations: I, locale: &Locale) -> Vec<LocalizedViolation>
where
    I: IntoIterator<Item = &'v Violation>,
{
    static BUILTIN: OnceLock<Resolver> = OnceLock::new();
    BUILTIN
        .get_or_init(|| Resolver::new(catalog::shared().clone()))
        .resolve(violations, locale)
}

/// Fill `{name}` placeholders from the constraint parameters.
///
/// Placeholders without a matching parameter are kept as written.
fn interpolate(template: &str, constraint: &ConstraintDescriptor) -> String {
    let mut message = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        message.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let param = after
            .find('}')
            .and_then(|close| constraint.param(&after[..close]).map(|value| (close, value)));

        match param {
            Some((close, value)) => {
                message.push_str(&value.to_string());
                rest = &after[close + 1..];
            }
            None => {
                message.push('{');
                rest = after;
            }
        }
    }

    message.push_str(rest);
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Constraint;
    use crate::constraints::{ContainsAll, Equals, NotNull, Size};

    fn locale(tag: &str) -> Locale {
        Locale::parse(tag).unwrap()
    }

    #[derive(Debug)]
    struct Even;

    impl Constraint for Even {
        fn name(&self) -> &'static str {
            "Even"
        }
    }

    #[test]
    fn test_not_null_in_each_locale() {
        let resolver = Resolver::default();
        let violation = Violation::new("id", &NotNull);

        let message = |tag| resolver.resolve_one(&violation, &locale(tag)).message;
        assert_eq!(message(""), "Must not be null");
        assert_eq!(message("en"), "Must not be null");
        assert_eq!(message("en-GB"), "Must not be null");
        assert_eq!(message("pt-BR"), "Não deve ser nulo");
        assert_eq!(message("de"), "Must not be null");
    }

    #[test]
    fn test_size_messages_follow_bounds() {
        let resolver = Resolver::default();
        let en = locale("en");
        let message = |size: Size| resolver.message(&size.describe(), &en);

        assert_eq!(message(Size::min(5)), "Size must be greater than or equal to 5");
        assert_eq!(message(Size::max(15)), "Size must be less than or equal to 15");
        assert_eq!(message(Size::between(5, 3)), "Size must be between 5 and 3");
        assert_eq!(message(Size::default()), "Must have a valid size");
    }

    #[test]
    fn test_list_parameters_join_in_order() {
        let message = Resolver::default().message(
            &ContainsAll::new(["j", "o", "h", "n", "k"]).describe(),
            &Locale::ROOT,
        );
        assert_eq!(message, "Must contain j, o, h, n, k");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(Resolver::default().message(&Even.describe(), &Locale::ROOT), "Even");
    }

    #[test]
    fn test_custom_templates() {
        let catalog = Catalog::builtin().with_bundle(Locale::ROOT, [("Even", "Must be even")]);
        let resolver = Resolver::new(catalog).with_default_locale(locale("pt-BR"));

        let violations = [Violation::new("n", &Even), Violation::new("id", &NotNull)];
        let messages: Vec<_> = resolver
            .resolve_default(&violations)
            .into_iter()
            .map(|v| v.to_string())
            .collect();

        assert_eq!(messages, ["n: Must be even", "id: Não deve ser nulo"]);
        assert_eq!(resolver.default_locale(), &locale("pt-BR"));
    }

    #[test]
    fn test_interpolation_keeps_unknown_placeholders() {
        let equals = Equals::new(1).describe();
        assert_eq!(interpolate("{value} vs {other}", &equals), "1 vs {other}");
        assert_eq!(interpolate("{value", &equals), "{value");
        assert_eq!(interpolate("{{value}}", &equals), "{1}");
        assert_eq!(interpolate("no placeholders", &equals), "no placeholders");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let violations = [Violation::new("id", &Equals::new(1)).with_value(2)];
        let first = resolve(&violations, &locale("pt-BR"));
        let second = resolve(&violations, &locale("pt-BR"));
        assert_eq!(first, second);
        assert_eq!(first[0].message(), "Deve ser igual a 1");
        assert_eq!(first[0].value(), Some(&Value::Int(2)));
    }

    #[test]
    fn test_repeated_violations_resolve_once() {
        let id = Violation::new("id", &NotNull);
        let name = Violation::new("name", &NotNull);

        let messages: Vec<_> = resolve([&id, &name, &id, &name], &Locale::ROOT)
            .into_iter()
            .map(|v| v.to_string())
            .collect();

        assert_eq!(messages, ["id: Must not be null", "name: Must not be null"]);
        assert_eq!(Resolver::default().resolve_default([&id, &id]).len(), 1);
    }

    #[test]
    fn test_f32_parameters_interpolate_in_shortest_form() {
        let violations = [Violation::new("ratio", &Equals::new(1.1f32)).with_value(0.1f32)];
        let messages = resolve(&violations, &Locale::ROOT);
        assert_eq!(messages[0].message(), "Must be equal to 1.1");
        assert_eq!(messages[0].value().map(Value::to_string).as_deref(), Some("0.1"));
    }

    #[test]
    fn test_resolver_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Resolver>();
        assert_send_sync::<LocalizedViolation>();
    }
}
