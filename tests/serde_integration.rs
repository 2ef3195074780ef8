//! Serialization of violations, values and catalogs
#![cfg(feature = "serde")]

mod common;

use common::*;
use conform::constraints::{In, NotNull, Size};
use conform::{validate, Catalog, Locale, Value, Violation};
use serde_json::json;

#[test]
fn values_serialize_untagged() {
    assert_eq!(serde_json::to_value(Value::Null).unwrap(), json!(null));
    assert_eq!(serde_json::to_value(Value::Int(-3)).unwrap(), json!(-3));
    assert_eq!(serde_json::to_value(Value::from("a")).unwrap(), json!("a"));
    assert_eq!(
        serde_json::to_value(Value::list(["a", "b"])).unwrap(),
        json!(["a", "b"])
    );
}

#[test]
fn violations_serialize_with_constraint_parameters() {
    let violation = Violation::new("name", &Size::between(5, 10)).with_value("John");

    assert_eq!(
        serde_json::to_value(&violation).unwrap(),
        json!({
            "property": "name",
            "value": "John",
            "constraint": {
                "name": "Size",
                "params": [["min", 5], ["max", 10]]
            }
        })
    );
}

#[test]
fn absent_values_serialize_as_null() {
    let violation = Violation::new("id", &NotNull);
    let json = serde_json::to_value(&violation).unwrap();
    assert_eq!(json["value"], json!(null));
    assert_eq!(json["constraint"]["params"], json!([]));
}

#[test]
fn localized_violations_serialize_with_message() {
    let err = validate(named("a"), |v, e| {
        v.property("name", e.name.as_ref()).is_in(["b", "c"]);
    })
    .unwrap_err();

    let localized = err.messages(&Locale::parse("pt-BR").unwrap());
    let json = serde_json::to_value(&localized).unwrap();

    assert_eq!(json[0]["property"], json!("name"));
    assert_eq!(json[0]["message"], json!("Deve ser um desses: b, c"));
    assert_eq!(
        json[0]["constraint"],
        serde_json::to_value(Violation::new("name", &In::new(["b", "c"])).constraint()).unwrap()
    );
}

#[test]
fn locales_serialize_as_tags() {
    let locale = Locale::parse("pt_br").unwrap();
    assert_eq!(serde_json::to_value(&locale).unwrap(), json!("pt-BR"));

    let parsed: Locale = serde_json::from_value(json!("en")).unwrap();
    assert_eq!(parsed, Locale::parse("en").unwrap());

    assert!(serde_json::from_value::<Locale>(json!("not a tag")).is_err());
}

#[test]
fn catalogs_load_from_json() {
    let json = r#"{
        "": { "NotNull": "is required" },
        "de": { "NotNull": "Darf nicht null sein", "Null": "Muss null sein" }
    }"#;

    let loaded: Catalog = serde_json::from_str(json).unwrap();
    let catalog = Catalog::builtin().merge(loaded);

    let de = Locale::parse("de").unwrap();
    assert_eq!(catalog.template(&de, "Null"), Some("Muss null sein"));
    assert_eq!(catalog.template(&Locale::ROOT, "NotNull"), Some("is required"));
    assert_eq!(catalog.template(&de, "Blank"), Some("Must be blank"));
}

#[test]
fn catalogs_load_through_a_deserializer() {
    let mut deserializer = serde_json::Deserializer::from_str(r#"{ "fr": { "Null": "Doit être nul" } }"#);
    let catalog = Catalog::from_bundles(&mut deserializer).unwrap();
    assert_eq!(
        catalog.template(&Locale::parse("fr-CA").unwrap(), "Null"),
        Some("Doit être nul")
    );
}
