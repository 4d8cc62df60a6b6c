//! Ordered rule chains.

use crate::core::render::RenderValue;
use crate::core::rule::Rule;
use crate::core::violation::RuleViolation;
use std::fmt;

/// Rules attached to one field, kept in declaration order.
///
/// The chain is only appended to while a field is being declared. Writes
/// walk it front to back and stop at the first rule that rejects the value.
///
/// Outside the crate a chain can only be inspected. Rules run as part of a
/// write, never on their own:
///
/// ```compile_fail
/// use fieldguard::core::FieldDecl;
///
/// let age = FieldDecl::<u32>::builder("User", "age")
///     .check(|age: &u32| *age >= 18)
///     .build()
///     .unwrap();
///
/// let _ = age.rules().enforce("User", "age", &5);
/// ```
///
/// ```compile_fail
/// use fieldguard::core::RuleChain;
///
/// let _ = RuleChain::<u32>::new();
/// ```
pub struct RuleChain<T> {
    rules: Vec<Rule<T>>,
}

impl<T> RuleChain<T> {
    pub(crate) fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule, naming it after its position if it has no
    /// message and no name.
    pub(crate) fn push(&mut self, rule: Rule<T>) {
        let rule = if rule.has_description() {
            rule
        } else {
            let position = self.rules.len() + 1;
            rule.label(format!("rule #{position}"))
        };
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule<T>> {
        self.rules.iter()
    }

    /// First rule, in declaration order, that rejects `value`.
    pub(crate) fn first_failure(&self, value: &T) -> Option<(usize, &Rule<T>)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| !rule.check(value))
    }

    /// Run every rule against `value`, failing fast.
    pub(crate) fn enforce(
        &self,
        type_name: &str,
        field_name: &str,
        value: &T,
    ) -> Result<(), RuleViolation>
    where
        T: RenderValue,
    {
        match self.first_failure(value) {
            None => Ok(()),
            Some((index, rule)) => {
                tracing::debug!(
                    type_name,
                    field = field_name,
                    rule = index + 1,
                    description = rule.description(),
                    "write rejected",
                );
                Err(RuleViolation::new(
                    type_name,
                    field_name,
                    rule.description(),
                    value.render(),
                ))
            }
        }
    }
}

impl<T> fmt::Debug for RuleChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rules.iter()).finish()
    }
}
