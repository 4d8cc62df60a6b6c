//! Core validated-field types.
//!
//! This module contains the rule engine:
//! - Rules: pure predicates with an optional message
//! - Rule chains evaluated in declaration order, failing fast
//! - Field declarations shared by every instance of a type
//! - Fields that own their value and route every write through the chain
//!
//! Rule evaluation is pure; the only mutation is the final store into a
//! field's own slot.

mod chain;
mod field;
mod render;
mod rule;
mod violation;

pub use chain::RuleChain;
pub use field::{Field, FieldDecl, Writer};
pub use render::RenderValue;
pub use rule::{rule, Predicate, Rule};
pub use violation::RuleViolation;
