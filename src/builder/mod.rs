//! Builder API for declaring validated fields.
//!
//! A field is declared once, with its rules in the order they should run,
//! and the resulting [`FieldDecl`](crate::core::FieldDecl) is shared by
//! every instance of the owning type.

pub mod error;
pub mod field;
pub mod macros;

pub use error::BuildError;
pub use field::FieldBuilder;

use crate::core::{FieldDecl, Rule};
use std::sync::Arc;

/// Declare a field from a list of rules.
///
/// # Example
///
/// ```
/// use fieldguard::builder::declare;
/// use fieldguard::core::Rule;
///
/// let score = declare::<u8>(
///     "Exam",
///     "score",
///     vec![Rule::with_message(|s: &u8| *s <= 100, "Score is at most 100")],
/// )
/// .unwrap();
///
/// assert_eq!(score.rules().len(), 1);
/// ```
pub fn declare<T>(
    type_name: &str,
    field_name: &str,
    rules: impl IntoIterator<Item = Rule<T>>,
) -> Result<Arc<FieldDecl<T>>, BuildError> {
    FieldBuilder::new(type_name, field_name).rules(rules).build()
}
