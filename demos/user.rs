//! Validated User Fields
//!
//! This example declares a `User` type whose `age` and `name` fields are
//! guarded by rules. The name blacklist is configuration loaded from JSON
//! and moved into the rule when the field is declared.
//!
//! Run with: RUST_LOG=debug cargo run --example user

use fieldguard::config::ExclusionList;
use fieldguard::core::{Field, FieldDecl};
use fieldguard::rules::non_empty;
use fieldguard::{rule, RuleViolation};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const BLACKLIST_JSON: &str = r#"{ "entries": ["佐藤", "優美清春香菜"] }"#;

struct UserFields {
    age: Arc<FieldDecl<u32>>,
    name: Arc<FieldDecl<String>>,
}

struct User {
    age: Field<u32>,
    name: Field<String>,
}

impl User {
    fn new(fields: &UserFields, age: u32, name: &str) -> Result<Self, RuleViolation> {
        Ok(Self {
            age: Field::new(Arc::clone(&fields.age), age)?,
            name: Field::new(Arc::clone(&fields.name), name.to_string())?,
        })
    }
}

fn declare_user(blacklist: ExclusionList<String>) -> Result<UserFields, Box<dyn std::error::Error>> {
    let age = FieldDecl::builder("User", "age")
        .attach(rule!(
            |age: &u32| (18..=60).contains(age),
            "Value is out of range 18~60"
        ))
        .build()?;

    let name = FieldDecl::builder("User", "name")
        .attach(non_empty("Value is must not be empty"))
        .attach(blacklist.rule("This user is included in blacklist"))
        .build()?;

    Ok(UserFields { age, name })
}

fn report<T>(label: &str, result: Result<T, RuleViolation>) {
    match result {
        Ok(_) => println!("  {label}: ok"),
        Err(err) => println!("  {label}: Error: {err}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Validated User Fields ===\n");

    let blacklist = ExclusionList::from_json(BLACKLIST_JSON)?;
    println!("Loaded blacklist with {} entries\n", blacklist.len());

    let fields = declare_user(blacklist)?;
    let mut user = User::new(&fields, 18, "田中")?;
    println!("Created user: age={}, name={}\n", *user.age, *user.name);

    println!("Writes:");
    report("age = 5", user.age.set(5));
    report("name = \"佐藤\"", user.name.set("佐藤".to_string()));
    report("name = \"\"", user.name.set(String::new()));
    report("age = 30", user.age.set(30));

    println!("\nAfter writes: age={}, name={}", *user.age, *user.name);

    println!("\n=== Example Complete ===");
    Ok(())
}
