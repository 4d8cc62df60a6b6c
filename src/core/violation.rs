//! The error raised when a write fails a field's rule chain.

use serde::Serialize;
use thiserror::Error;

/// A write rejected by a rule.
///
/// Carries the owning type's name, the field's name, the failing rule's
/// description and the rendered rejected value. The display form is
/// `(in property of <Type>.<field>) <description>: <value>`.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[error("(in property of {type_name}.{field_name}) {description}: {value}")]
pub struct RuleViolation {
    type_name: String,
    field_name: String,
    description: String,
    value: String,
}

impl RuleViolation {
    pub fn new(
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        description: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            field_name: field_name.into(),
            description: description.into(),
            value: value.into(),
        }
    }

    /// Name of the type that owns the field.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Message of the failing rule, or its name when it has no message.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The rejected value, quoted if it was text.
    pub fn value(&self) -> &str {
        &self.value
    }
}
