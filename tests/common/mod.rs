//! Shared object model for integration tests
#![allow(dead_code)]

use conform::{Locale, ToValue, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Employee {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub company: Option<Company>,
    pub address: Option<Address>,
    pub dependents: Option<Vec<Dependent>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dependent {
    pub id: Option<i32>,
    pub name: Option<String>,
}

impl ToValue for Dependent {
    fn to_value(&self) -> Value {
        self.id.to_value()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Company {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub addresses: Option<Vec<Address>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub id: Option<i32>,
    pub street: Option<String>,
    pub number: Option<i32>,
    pub city: Option<City>,
}

impl ToValue for Address {
    fn to_value(&self) -> Value {
        self.id.to_value()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct City {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub state: Option<State>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub country: Option<Country>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Country {
    pub id: Option<i32>,
    pub name: Option<String>,
}

/// An employee with the given name and everything else absent.
pub fn named(name: &str) -> Employee {
    Employee {
        name: Some(name.to_string()),
        ..Employee::default()
    }
}

/// The root locale, `en` and `pt-BR`.
pub fn supported_locales() -> [Locale; 3] {
    [
        Locale::ROOT,
        Locale::parse("en").unwrap(),
        Locale::parse("pt-BR").unwrap(),
    ]
}

/// Messages for `violations` in every supported locale, in locale order.
pub fn messages_by_locale(violations: &conform::ConstraintViolations) -> Vec<Vec<String>> {
    supported_locales()
        .iter()
        .map(|locale| {
            violations
                .messages(locale)
                .into_iter()
                .map(|v| v.message().to_string())
                .collect()
        })
        .collect()
}
