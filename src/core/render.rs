//! Rendering of rejected values for violation messages.
//!
//! Textual values are quoted, everything else uses its plain display form.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// Trait for values that can appear in a [`RuleViolation`](crate::core::RuleViolation).
///
/// # Example
///
/// ```rust
/// use fieldguard::core::RenderValue;
///
/// assert_eq!(5u32.render(), "5");
/// assert_eq!("佐藤".to_string().render(), "\"佐藤\"");
/// assert_eq!(None::<i32>.render(), "null");
/// ```
pub trait RenderValue {
    /// Render the value as it appears after the description.
    fn render(&self) -> String;
}

fn quoted(text: &str) -> String {
    format!("\"{text}\"")
}

macro_rules! render_plain {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RenderValue for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

render_plain!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Non-finite values use their common spelled-out names and negative zero
// renders as `0`.
macro_rules! render_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RenderValue for $ty {
                fn render(&self) -> String {
                    if self.is_nan() {
                        "NaN".to_string()
                    } else if self.is_infinite() {
                        let name = if self.is_sign_positive() { "Infinity" } else { "-Infinity" };
                        name.to_string()
                    } else if *self == 0.0 {
                        "0".to_string()
                    } else {
                        self.to_string()
                    }
                }
            }
        )*
    };
}

render_float!(f32, f64);

impl RenderValue for str {
    fn render(&self) -> String {
        quoted(self)
    }
}

impl RenderValue for String {
    fn render(&self) -> String {
        quoted(self)
    }
}

impl RenderValue for char {
    fn render(&self) -> String {
        let mut buf = [0u8; 4];
        quoted(self.encode_utf8(&mut buf))
    }
}

impl RenderValue for Cow<'_, str> {
    fn render(&self) -> String {
        quoted(self)
    }
}

impl RenderValue for Box<str> {
    fn render(&self) -> String {
        quoted(self)
    }
}

impl RenderValue for Arc<str> {
    fn render(&self) -> String {
        quoted(self)
    }
}

impl RenderValue for Rc<str> {
    fn render(&self) -> String {
        quoted(self)
    }
}

impl<T: RenderValue + ?Sized> RenderValue for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: RenderValue> RenderValue for Option<T> {
    fn render(&self) -> String {
        match self {
            Some(value) => value.render(),
            None => "null".to_string(),
        }
    }
}
