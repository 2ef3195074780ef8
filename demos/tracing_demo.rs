//! Demonstrates tracing integration with validation
//!
//! Run with: cargo run --example tracing_demo --features tracing

use conform::prelude::*;

struct Account {
    username: Option<String>,
    tags: Option<Vec<String>>,
}

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    let account = Account {
        username: Some("root".to_string()),
        tags: Some(vec!["ok".to_string(), " ".to_string()]),
    };

    let result = validate(account, |v, a| {
        v.property("username", a.username.as_ref())
            .is_not_blank()
            .is_not_in(["root", "admin"]);
        v.each("tags", a.tags.as_ref(), |v, tag| {
            v.property("value", Some(tag)).is_not_blank();
        });
    });

    match result {
        Ok(_) => tracing::info!("Account is valid"),
        Err(err) => {
            tracing::error!("Validation failed: {} violation(s)", err.len());

            // Unknown message keys are logged as warnings
            let custom = Catalog::new();
            let resolver = Resolver::new(custom);
            for localized in resolver.resolve(&err, &Locale::ROOT) {
                tracing::info!("{}", localized);
            }
        }
    }
}
