//! Localized Messages Example
//!
//! Resolves the same violations in several locales, including one added at
//! runtime, and a custom constraint with its own template.
//!
//! Run with: cargo run --example localized_messages

use conform::prelude::*;

/// Value must be a multiple of the divisor
#[derive(Debug, Clone, Copy)]
struct MultipleOf(u32);

impl Constraint for MultipleOf {
    fn name(&self) -> &'static str {
        "MultipleOf"
    }

    fn params(&self) -> Vec<(&'static str, Value)> {
        vec![("divisor", self.0.to_value())]
    }
}

impl Predicate<u32> for MultipleOf {
    fn check(&self, value: &u32) -> bool {
        value % self.0 == 0
    }
}

#[derive(Debug)]
struct Order {
    customer: Option<String>,
    quantity: Option<u32>,
    coupon: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let order = Order {
        customer: None,
        quantity: Some(7),
        coupon: Some("SUMMER".to_string()),
    };

    let err = validate(order, |v, o| {
        v.property("customer", o.customer.as_ref()).is_not_blank();
        v.property("quantity", o.quantity.as_ref()).validate(MultipleOf(6));
        v.property("coupon", o.coupon.as_ref())
            .is_in_ignoring_case(["spring", "winter"]);
    })
    .unwrap_err();

    let es = Locale::parse("es")?;
    let catalog = Catalog::builtin()
        .with_bundle(Locale::ROOT, [("MultipleOf", "Must be a multiple of {divisor}")])
        .with_bundle(Locale::parse("pt-BR")?, [("MultipleOf", "Deve ser múltiplo de {divisor}")])
        .with_bundle(
            es.clone(),
            [
                ("NotBlank", "No debe estar en blanco"),
                ("In", "Debe ser uno de: {values}"),
            ],
        );
    let resolver = Resolver::new(catalog);

    for locale in [Locale::ROOT, Locale::parse("pt-BR")?, es] {
        println!("=== locale {:?} ===", locale.to_string());
        for localized in resolver.resolve(&err, &locale) {
            println!("  {}", localized);
        }
    }

    Ok(())
}
