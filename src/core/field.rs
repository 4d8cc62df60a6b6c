//! Field declarations and validated field storage.

use crate::builder::FieldBuilder;
use crate::core::chain::RuleChain;
use crate::core::render::RenderValue;
use crate::core::violation::RuleViolation;
use std::fmt;
use std::mem;
use std::ops::Deref;
use std::sync::Arc;

/// Custom write behaviour that runs after every rule has passed.
///
/// It receives the raw value and returns what is stored.
pub type Writer<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// Definition of one field of a type: its rule chain and optional writer.
///
/// A declaration is built once, before any instance exists, and shared by
/// every [`Field`] of the owning type.
pub struct FieldDecl<T> {
    type_name: String,
    field_name: String,
    rules: RuleChain<T>,
    writer: Option<Writer<T>>,
}

impl<T> FieldDecl<T> {
    /// Start declaring `field_name` on `type_name`.
    pub fn builder(type_name: impl Into<String>, field_name: impl Into<String>) -> FieldBuilder<T> {
        FieldBuilder::new(type_name, field_name)
    }

    pub(crate) fn from_parts(
        type_name: String,
        field_name: String,
        rules: RuleChain<T>,
        writer: Option<Writer<T>>,
    ) -> Self {
        Self {
            type_name,
            field_name,
            rules,
            writer,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn rules(&self) -> &RuleChain<T> {
        &self.rules
    }

    /// Whether a custom writer sits behind the rules.
    pub fn has_writer(&self) -> bool {
        self.writer.is_some()
    }

    /// Run the rule chain, then the writer. Returns the value to store.
    ///
    /// Every store into a [`Field`] goes through here.
    pub(crate) fn admit(&self, value: T) -> Result<T, RuleViolation>
    where
        T: RenderValue,
    {
        self.rules
            .enforce(&self.type_name, &self.field_name, &value)?;
        let value = match &self.writer {
            Some(write) => write(value),
            None => value,
        };
        tracing::trace!(
            type_name = %self.type_name,
            field = %self.field_name,
            "value stored",
        );
        Ok(value)
    }
}

impl<T> fmt::Debug for FieldDecl<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDecl")
            .field("type_name", &self.type_name)
            .field("field_name", &self.field_name)
            .field("rules", &self.rules)
            .field("has_writer", &self.writer.is_some())
            .finish()
    }
}

/// A field value guarded by its declaration's rules.
///
/// Every write goes through the rule chain. A rejected write leaves the
/// stored value untouched.
///
/// # Example
///
/// ```rust
/// use fieldguard::core::{Field, FieldDecl};
///
/// let age = FieldDecl::<u32>::builder("User", "age")
///     .rule(|age: &u32| (18..=60).contains(age), "Value is out of range 18~60")
///     .build()
///     .unwrap();
///
/// let mut field = Field::new(age, 18).unwrap();
///
/// let err = field.set(5).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "(in property of User.age) Value is out of range 18~60: 5"
/// );
/// assert_eq!(*field.get(), 18);
///
/// field.set(30).unwrap();
/// assert_eq!(*field, 30);
/// ```
pub struct Field<T> {
    decl: Arc<FieldDecl<T>>,
    value: T,
}

impl<T: RenderValue> Field<T> {
    /// Create a field, routing `initial` through the full write path.
    pub fn new(decl: Arc<FieldDecl<T>>, initial: T) -> Result<Self, RuleViolation> {
        let value = decl.admit(initial)?;
        Ok(Self { decl, value })
    }

    /// Write `value` if every rule accepts it.
    pub fn set(&mut self, value: T) -> Result<(), RuleViolation> {
        self.replace(value).map(|_| ())
    }

    /// Write `value` if every rule accepts it, returning the previous value.
    pub fn replace(&mut self, value: T) -> Result<T, RuleViolation> {
        let value = self.decl.admit(value)?;
        Ok(mem::replace(&mut self.value, value))
    }
}

impl<T> Field<T> {
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn decl(&self) -> &FieldDecl<T> {
        &self.decl
    }
}

impl<T> Deref for Field<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            decl: Arc::clone(&self.decl),
            value: self.value.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("type_name", &self.decl.type_name)
            .field("field_name", &self.decl.field_name)
            .field("value", &self.value)
            .finish()
    }
}
