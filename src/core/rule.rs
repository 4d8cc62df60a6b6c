//! Rules: pure predicates attached to a field.
//!
//! A rule pairs a predicate with an optional message. Rules are immutable
//! once created and are evaluated synchronously on every write attempt.

use std::fmt;

/// Boxed predicate over a field's value type.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Pure predicate that decides whether a value may be written to a field.
///
/// # Example
///
/// ```rust
/// use fieldguard::core::Rule;
///
/// let adult = Rule::with_message(
///     |age: &u32| (18..=60).contains(age),
///     "Value is out of range 18~60",
/// );
///
/// assert!(adult.check(&30));
/// assert!(!adult.check(&5));
/// assert_eq!(adult.message(), Some("Value is out of range 18~60"));
/// ```
pub struct Rule<T> {
    predicate: Predicate<T>,
    message: Option<String>,
    name: Option<String>,
}

impl<T> Rule<T> {
    /// Create a rule without a message.
    ///
    /// When it rejects a value the error describes it by its name, or by
    /// its position in the chain if it has none.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Rule {
            predicate: Box::new(predicate),
            message: None,
            name: None,
        }
    }

    /// Create a rule that reports `message` when it rejects a value.
    pub fn with_message<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Rule::new(predicate).describe(message)
    }

    /// Create a rule identified by `name`.
    pub fn named<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Rule::new(predicate).label(name)
    }

    /// Set the message reported on rejection.
    pub fn describe(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the rule's name.
    pub fn label(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Evaluate the predicate.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Text used in a violation: the message, else the name.
    ///
    /// Rules registered on a field always have one of the two, since the
    /// builder names anonymous rules after their position.
    pub fn description(&self) -> &str {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    pub(crate) fn has_description(&self) -> bool {
        !self.description().is_empty()
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Create a rule from a predicate and an optional message.
///
/// This is the definition-time entry point: the returned rule is attached
/// to a field with [`FieldBuilder::attach`](crate::builder::FieldBuilder::attach).
///
/// ```rust
/// use fieldguard::rule;
///
/// let not_empty = rule(|s: &String| !s.is_empty(), Some("Value is must not be empty"));
/// assert!(!not_empty.check(&String::new()));
/// ```
pub fn rule<T, F>(predicate: F, message: Option<&str>) -> Rule<T>
where
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    let rule = Rule::new(predicate);
    match message {
        Some(m) => rule.describe(m),
        None => rule,
    }
}
