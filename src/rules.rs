//! Ready-made rules for common field constraints.

use crate::config::ExclusionList;
use crate::core::Rule;
use std::ops::RangeBounds;

/// Reject empty text.
pub fn non_empty<T>(message: impl Into<String>) -> Rule<T>
where
    T: AsRef<str> + 'static,
{
    Rule::with_message(|value: &T| !value.as_ref().is_empty(), message)
}

/// Reject values outside `range`.
///
/// ```rust
/// use fieldguard::rules::in_range;
///
/// let adult = in_range(18u32..=60, "Value is out of range 18~60");
/// assert!(adult.check(&18));
/// assert!(!adult.check(&61));
/// ```
pub fn in_range<T, R>(range: R, message: impl Into<String>) -> Rule<T>
where
    T: PartialOrd + 'static,
    R: RangeBounds<T> + Send + Sync + 'static,
{
    Rule::with_message(move |value: &T| range.contains(value), message)
}

/// Reject any of `values`.
pub fn not_in<T>(values: impl IntoIterator<Item = T>, message: impl Into<String>) -> Rule<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    ExclusionList::new(values).rule(message)
}

/// Reject text longer than `max` characters.
pub fn max_chars<T>(max: usize, message: impl Into<String>) -> Rule<T>
where
    T: AsRef<str> + 'static,
{
    Rule::with_message(move |value: &T| value.as_ref().chars().count() <= max, message)
}
