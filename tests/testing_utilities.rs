//! Tests and examples for the testing utilities
//!
//! Demonstrates patterns for testing code that declares validations.

use conform::constraints::{ContainsAll, NotBlank, NotNull, Size};
use conform::prelude::*;
use conform::{assert_invalid, assert_valid, assert_violations};

// Example domain types for testing
#[derive(Debug, Clone, PartialEq, Default)]
struct User {
    email: Option<String>,
    age: Option<u32>,
    roles: Option<Vec<Role>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct Role {
    name: Option<String>,
}

impl User {
    fn valid() -> Self {
        User {
            email: Some("user@example.com".to_string()),
            age: Some(25),
            roles: Some(vec![Role {
                name: Some("admin".to_string()),
            }]),
        }
    }
}

// Declarations under test
fn validate_user(user: User) -> Result<User, ConstraintViolations> {
    validate(user, |v, u| {
        v.property("email", u.email.as_ref())
            .is_not_blank()
            .contains_all(["@", "."]);
        v.property("age", u.age.as_ref())
            .is_not_null()
            .is_valid(|age| *age >= 18);
        v.each("roles", u.roles.as_ref(), |v, role| {
            v.property("name", role.name.as_ref())
                .is_not_blank()
                .has_max_size(16);
        });
    })
}

// Tests demonstrating assertion macros

#[test]
fn test_assert_valid_with_valid_user() {
    assert_valid!(validate_user(User::valid()));
}

#[test]
fn test_assert_invalid_with_empty_user() {
    assert_invalid!(validate_user(User::default()));
}

#[test]
fn test_assert_violations_with_specific_violations() {
    let user = User {
        email: Some("user-at-example".to_string()),
        ..User::valid()
    };

    assert_violations!(
        validate_user(user),
        [Violation::new("email", &ContainsAll::new(["@", "."])).with_value("user-at-example")]
    );
}

#[test]
fn test_violations_accumulate_across_properties() {
    let result = validate_user(User::default());

    assert_violations!(
        result,
        vec![
            Violation::new("email", &NotBlank),
            Violation::new("age", &NotNull),
        ]
    );
}

#[test]
fn test_nested_violations_carry_index() {
    let user = User {
        roles: Some(vec![
            Role {
                name: Some("admin".to_string()),
            },
            Role {
                name: Some("a-role-name-that-is-far-too-long".to_string()),
            },
            Role { name: None },
        ]),
        ..User::valid()
    };

    assert_violations!(
        validate_user(user),
        [
            Violation::new("roles[1].name", &Size::max(16))
                .with_value("a-role-name-that-is-far-too-long"),
            Violation::new("roles[2].name", &NotBlank),
        ]
    );
}

#[test]
fn test_successful_validation_returns_the_object() {
    let user = validate_user(User::valid()).unwrap();
    assert_eq!(user, User::valid());
}

#[test]
fn test_underage_fails_custom_predicate() {
    let user = User {
        age: Some(15),
        ..User::valid()
    };

    let err = validate_user(user).unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.first().property(), "age");
    assert_eq!(err.first().constraint().name(), "Valid");
    assert_eq!(err.first().value(), Some(&Value::UInt(15)));
}
