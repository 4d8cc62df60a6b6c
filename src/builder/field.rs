//! Builder for declaring a field's rule chain.

use crate::builder::error::BuildError;
use crate::core::{FieldDecl, Rule, RuleChain, Writer};
use std::sync::Arc;

/// Builder for a [`FieldDecl`] with a fluent API.
///
/// Rules are evaluated in the order they are attached. A writer, if any,
/// always runs after the last rule no matter where `.writer()` is called.
pub struct FieldBuilder<T> {
    type_name: String,
    field_name: String,
    rules: RuleChain<T>,
    writer: Option<Writer<T>>,
    writer_conflict: bool,
}

impl<T> FieldBuilder<T> {
    /// Create a new builder for `type_name.field_name`.
    pub fn new(type_name: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            field_name: field_name.into(),
            rules: RuleChain::new(),
            writer: None,
            writer_conflict: false,
        }
    }

    /// Attach a prebuilt rule.
    pub fn attach(mut self, rule: Rule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Attach a predicate with an error message.
    pub fn rule<F>(self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.attach(Rule::with_message(predicate, message))
    }

    /// Attach a predicate without a message.
    pub fn check<F>(self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.attach(Rule::new(predicate))
    }

    /// Attach several rules, in iteration order.
    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule<T>>) -> Self {
        for rule in rules {
            self.rules.push(rule);
        }
        self
    }

    /// Install custom write behaviour behind the rules (optional).
    pub fn writer<W>(mut self, writer: W) -> Self
    where
        W: Fn(T) -> T + Send + Sync + 'static,
    {
        if self.writer.is_some() {
            self.writer_conflict = true;
        }
        self.writer = Some(Box::new(writer));
        self
    }

    /// Build the declaration.
    pub fn build(self) -> Result<Arc<FieldDecl<T>>, BuildError> {
        if self.type_name.is_empty() {
            return Err(BuildError::EmptyTypeName);
        }
        if self.field_name.is_empty() {
            return Err(BuildError::EmptyFieldName);
        }
        if self.writer_conflict {
            return Err(BuildError::ConflictingWriter {
                type_name: self.type_name,
                field_name: self.field_name,
            });
        }

        tracing::debug!(
            type_name = %self.type_name,
            field = %self.field_name,
            rules = self.rules.len(),
            writer = self.writer.is_some(),
            "field declared",
        );

        Ok(Arc::new(FieldDecl::from_parts(
            self.type_name,
            self.field_name,
            self.rules,
            self.writer,
        )))
    }
}
