//! Externally supplied rule configuration.
//!
//! Values that rules close over, such as a blacklist of forbidden names,
//! are loaded here and moved into the predicate when the field is declared.
//! Nothing is kept in process-wide state.

use crate::core::Rule;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigError;

/// Values a field must never take.
///
/// # Example
///
/// ```rust
/// use fieldguard::config::ExclusionList;
///
/// let blacklist: ExclusionList<String> =
///     ExclusionList::from_json(r#"{ "entries": ["佐藤", "優美清春香菜"] }"#).unwrap();
///
/// let rule = blacklist.rule("This user is included in blacklist");
/// assert!(!rule.check(&"佐藤".to_string()));
/// assert!(rule.check(&"田中".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExclusionList<T> {
    #[serde(default = "Vec::new")]
    pub entries: Vec<T>,
}

impl<T> ExclusionList<T> {
    pub fn new(entries: impl IntoIterator<Item = T>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.entries.contains(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Turn the list into a rule that rejects any listed value.
    pub fn rule(self, message: impl Into<String>) -> Rule<T>
    where
        T: PartialEq + Send + Sync + 'static,
    {
        Rule::with_message(move |value: &T| !self.contains(value), message)
    }
}

impl<T> ExclusionList<T>
where
    T: for<'de> Deserialize<'de>,
{
    /// Load a list from JSON of the form `{ "entries": [...] }`.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl<T> Default for ExclusionList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> FromIterator<T> for ExclusionList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}
