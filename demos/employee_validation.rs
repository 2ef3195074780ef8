//! Employee Validation Example
//!
//! Declares constraints for an employee record with a nested company and a
//! list of dependents, then prints every violation.
//!
//! Run with: cargo run --example employee_validation

use conform::prelude::*;

#[derive(Debug)]
struct Employee {
    id: Option<i32>,
    name: Option<String>,
    email: Option<String>,
    company: Option<Company>,
    dependents: Option<Vec<Dependent>>,
}

#[derive(Debug)]
struct Company {
    id: Option<i32>,
    name: Option<String>,
}

#[derive(Debug)]
struct Dependent {
    name: Option<String>,
    age: Option<u8>,
}

fn validate_employee(employee: Employee) -> Result<Employee, ConstraintViolations> {
    validate(employee, |v, e| {
        v.property("id", e.id.as_ref()).is_not_null();
        v.property("name", e.name.as_ref())
            .is_not_blank()
            .has_size(2, 40);
        v.property("email", e.email.as_ref())
            .is_not_blank()
            .contains("@")
            .does_not_contain_any_ignoring_case(["spam", "test"]);
        v.nested("company", e.company.as_ref(), |v, company| {
            v.property("id", company.id.as_ref()).is_not_null();
            v.property("name", company.name.as_ref()).is_not_blank();
        });
        v.each("dependents", e.dependents.as_ref(), |v, dependent| {
            v.property("name", dependent.name.as_ref()).is_not_blank();
            v.property("age", dependent.age.as_ref())
                .is_not_null()
                .is_valid(|age| *age < 21);
        });
    })
}

fn main() {
    println!("=== Valid employee ===");
    let valid = Employee {
        id: Some(1),
        name: Some("John".to_string()),
        email: Some("john@company.com".to_string()),
        company: Some(Company {
            id: Some(10),
            name: Some("ACME".to_string()),
        }),
        dependents: Some(vec![Dependent {
            name: Some("Jane".to_string()),
            age: Some(8),
        }]),
    };

    match validate_employee(valid) {
        Ok(employee) => println!("✓ {:?} passed", employee.name),
        Err(err) => println!("✗ {}", err),
    }

    println!("\n=== Invalid employee ===");
    let invalid = Employee {
        id: None,
        name: Some("J".to_string()),
        email: Some("test@Spam.com".to_string()),
        company: Some(Company {
            id: None,
            name: Some(" ".to_string()),
        }),
        dependents: Some(vec![
            Dependent {
                name: Some("Jane".to_string()),
                age: Some(30),
            },
            Dependent {
                name: None,
                age: None,
            },
        ]),
    };

    match validate_employee(invalid) {
        Ok(_) => println!("✓ unexpectedly valid"),
        Err(err) => {
            println!("{}", err);

            println!("\n--- Rejected values ---");
            for violation in &err {
                match violation.value() {
                    Some(value) => println!("  {} = {}", violation.property(), value),
                    None => println!("  {} is absent", violation.property()),
                }
            }
        }
    }
}
