//! Class-name composition for `class` attributes.
//!
//! Components build their class lists from literal tokens, conditional flags
//! and computed selections. [`ClassValue`] models every accepted shape and
//! [`compose`] folds a list of them into one space-joined string.
//!
//! # Example
//!
//! ```rust
//! use morr_site::{class_map, cn};
//!
//! let active = true;
//! let class = cn!("btn", 0, false, class_map! { "btn-active" => active, "btn-muted" => false });
//! assert_eq!(class, "btn btn-active");
//! ```
//!
//! Nested lists are composed first and contribute their joined result as a
//! single token, so `cn!(class_list!["a", "b"], "c")` yields `"a b c"`.

use std::borrow::Cow;
use std::fmt;

/// A value accepted by [`compose`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ClassValue {
    /// Literal token, used verbatim when non-empty.
    Text(String),
    /// Numeric token, rendered in decimal when non-zero.
    Number(f64),
    /// Flags have no textual form and never contribute a token.
    Bool(bool),
    /// Absence marker (`None`, `()`).
    #[default]
    Absent,
    /// Ordered sequence, composed recursively.
    List(Vec<ClassValue>),
    /// Ordered key/selector pairs; a key is kept when its selector is truthy.
    Map(Vec<(String, ClassValue)>),
}

impl ClassValue {
    /// Build a [`ClassValue::Map`] from key/selector pairs, keeping their order.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<ClassValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        ClassValue::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Whether this value switches a map key on.
    ///
    /// Lists and maps are always truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            ClassValue::Text(text) => !text.is_empty(),
            ClassValue::Number(n) => number_is_truthy(*n),
            ClassValue::Bool(flag) => *flag,
            ClassValue::Absent => false,
            ClassValue::List(_) | ClassValue::Map(_) => true,
        }
    }

    fn collect_into<'a>(&'a self, classes: &mut Vec<Cow<'a, str>>) {
        match self {
            ClassValue::Text(text) if !text.is_empty() => classes.push(Cow::Borrowed(text.as_str())),
            ClassValue::Number(n) if number_is_truthy(*n) => {
                classes.push(Cow::Owned(format_number(*n)))
            }
            ClassValue::List(items) => {
                let nested = compose(items);
                if !nested.is_empty() {
                    classes.push(Cow::Owned(nested));
                }
            }
            ClassValue::Map(entries) => {
                for (key, selector) in entries {
                    if !key.is_empty() && selector.is_truthy() {
                        classes.push(Cow::Borrowed(key.as_str()));
                    }
                }
            }
            ClassValue::Text(_) | ClassValue::Number(_) | ClassValue::Bool(_) | ClassValue::Absent => {}
        }
    }
}

/// Join the tokens contributed by `values`, in order, with single spaces.
///
/// Empty text, zero, `NaN`, flags and absent values contribute nothing; the
/// result never has leading, trailing or doubled spaces.
pub fn compose(values: &[ClassValue]) -> String {
    let mut classes: Vec<Cow<'_, str>> = Vec::with_capacity(values.len());
    for value in values {
        value.collect_into(&mut classes);
    }
    classes.join(" ")
}

fn number_is_truthy(n: f64) -> bool {
    n != 0.0 && !n.is_nan()
}

fn format_number(n: f64) -> String {
    if n.is_infinite() {
        let sign = if n.is_sign_negative() { "-" } else { "" };
        format!("{sign}Infinity")
    } else {
        // f64's Display drops the fractional part of integral values ("3", not "3.0")
        n.to_string()
    }
}

impl fmt::Display for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&compose(std::slice::from_ref(self)))
    }
}

impl From<&str> for ClassValue {
    fn from(text: &str) -> Self {
        ClassValue::Text(text.to_owned())
    }
}

impl From<String> for ClassValue {
    fn from(text: String) -> Self {
        ClassValue::Text(text)
    }
}

impl From<&String> for ClassValue {
    fn from(text: &String) -> Self {
        ClassValue::Text(text.clone())
    }
}

impl From<Cow<'_, str>> for ClassValue {
    fn from(text: Cow<'_, str>) -> Self {
        ClassValue::Text(text.into_owned())
    }
}

impl From<bool> for ClassValue {
    fn from(flag: bool) -> Self {
        ClassValue::Bool(flag)
    }
}

impl From<()> for ClassValue {
    fn from(_: ()) -> Self {
        ClassValue::Absent
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ClassValue {
                fn from(n: $ty) -> Self {
                    ClassValue::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Absent, Into::into)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(items: Vec<T>) -> Self {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(items: [T; N]) -> Self {
        ClassValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>> FromIterator<T> for ClassValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ClassValue::List(iter.into_iter().map(Into::into).collect())
    }
}

/// Compose class values into a `String`.
///
/// Each argument is converted with `ClassValue::from`, so literals, flags,
/// options, numbers, [`class_list!`] and [`class_map!`] values mix freely.
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::classnames::compose(&[$($crate::classnames::ClassValue::from($value)),+])
    };
}

/// Build a heterogeneous [`ClassValue::List`].
#[macro_export]
macro_rules! class_list {
    () => {
        $crate::classnames::ClassValue::List(::std::vec::Vec::new())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::classnames::ClassValue::List(::std::vec![$($crate::classnames::ClassValue::from($value)),+])
    };
}

/// Build a [`ClassValue::Map`] from `key => selector` pairs.
#[macro_export]
macro_rules! class_map {
    () => {
        $crate::classnames::ClassValue::Map(::std::vec::Vec::new())
    };
    ($($key:expr => $selector:expr),+ $(,)?) => {
        $crate::classnames::ClassValue::Map(::std::vec![
            $((::std::string::String::from($key), $crate::classnames::ClassValue::from($selector))),+
        ])
    };
}
