//! Fieldguard: ordered validation rules attached to struct fields
//!
//! A field is declared once with the rules it must satisfy. Every write to
//! the field runs those rules in the order they were declared and stops at
//! the first one that fails. A rejected write returns a [`RuleViolation`]
//! and leaves the stored value as it was.
//!
//! # Core Concepts
//!
//! - **Rule**: a pure predicate plus an optional message
//! - **FieldDecl**: the rule chain (and optional custom writer) of one field
//! - **Field**: a value guarded by its declaration
//! - **RuleViolation**: the error returned by a rejected write
//!
//! # Example
//!
//! ```rust
//! use fieldguard::core::{Field, FieldDecl};
//! use fieldguard::rules::{non_empty, not_in};
//!
//! let name = FieldDecl::<String>::builder("User", "name")
//!     .attach(non_empty("Value is must not be empty"))
//!     .attach(not_in(
//!         ["佐藤".to_string(), "優美清春香菜".to_string()],
//!         "This user is included in blacklist",
//!     ))
//!     .build()
//!     .unwrap();
//!
//! let mut user_name = Field::new(name, "田中".to_string()).unwrap();
//!
//! let err = user_name.set("佐藤".to_string()).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "(in property of User.name) This user is included in blacklist: \"佐藤\""
//! );
//! assert_eq!(user_name.get(), "田中");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use builder::{BuildError, FieldBuilder};
pub use self::core::{rule, Field, FieldDecl, Rule, RuleViolation};
