//! Macros for declaring rules.

/// Create a rule whose fallback description is the predicate's source text.
///
/// With a message, the message is reported on rejection; without one, the
/// stringified predicate is.
///
/// # Example
///
/// ```
/// use fieldguard::core::{Field, FieldDecl};
/// use fieldguard::rule;
///
/// let decl = FieldDecl::builder("User", "age")
///     .attach(rule!(|age: &u32| *age >= 18))
///     .build()
///     .unwrap();
///
/// let mut age = Field::new(decl, 20).unwrap();
/// let err = age.set(3).unwrap_err();
/// assert!(err.description().contains("*age >= 18"));
/// ```
#[macro_export]
macro_rules! rule {
    ($predicate:expr $(,)?) => {
        $crate::core::Rule::named(stringify!($predicate), $predicate)
    };
    ($predicate:expr, $message:expr $(,)?) => {
        $crate::core::Rule::named(stringify!($predicate), $predicate).describe($message)
    };
}
