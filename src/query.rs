//! Query parameters and query-key escaping.

use std::borrow::Cow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use crate::constants::QUERY_KEY_ESCAPES;
use crate::error::BuilderError;

/// A query-parameter value.
///
/// Values are written with their plain `Display` text and are never escaped.
///
/// # Examples
///
/// ```
/// use uri_builder::ParamValue;
///
/// assert_eq!(ParamValue::from(true).to_string(), "true");
/// assert_eq!(ParamValue::from(-3).to_string(), "-3");
/// assert_eq!(ParamValue::from("a&b").to_string(), "a&b");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ParamValue {
    /// Text value
    Str(String),
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// Floating-point number
    Float(f64),
    /// Boolean
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f32> for ParamValue {
    fn from(n: f32) -> Self {
        Self::Float(f64::from(n))
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

macro_rules! impl_from_int {
    ($variant:ident => $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for ParamValue {
                fn from(n: $t) -> Self {
                    Self::$variant(<$wide>::from(n))
                }
            }
        )+
    };
}

impl_from_int!(Int => i64: i8, i16, i32, i64);
impl_from_int!(UInt => u64: u8, u16, u32, u64);

impl From<isize> for ParamValue {
    fn from(n: isize) -> Self {
        i64::try_from(n).map_or_else(|_| Self::Str(n.to_string()), Self::Int)
    }
}

impl From<usize> for ParamValue {
    fn from(n: usize) -> Self {
        u64::try_from(n).map_or_else(|_| Self::Str(n.to_string()), Self::UInt)
    }
}

/// Escapes a query-parameter key using [`QUERY_KEY_ESCAPES`].
///
/// Only the characters in the table are replaced. Everything else, including
/// `%` and non-ASCII text, passes through unchanged. Returns a borrowed string
/// when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use uri_builder::escape_query_key;
///
/// assert_eq!(escape_query_key("queu&#eId"), "queu%26%23eId");
/// assert_eq!(escape_query_key("plain key"), "plain key");
/// ```
#[must_use]
pub fn escape_query_key(key: &str) -> Cow<'_, str> {
    if !key.chars().any(|c| escape_for(c).is_some()) {
        return Cow::Borrowed(key);
    }

    let mut escaped = String::with_capacity(key.len() + 8);
    for c in key.chars() {
        match escape_for(c) {
            Some(e) => escaped.push_str(e),
            None => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn escape_for(c: char) -> Option<&'static str> {
    QUERY_KEY_ESCAPES
        .binary_search_by_key(&c, |&(k, _)| k)
        .ok()
        .map(|i| QUERY_KEY_ESCAPES[i].1)
}

/// Query parameters of a built address.
///
/// Each key can be set once. Iteration and serialization order is
/// unspecified and may differ between runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryParams {
    params: HashMap<String, ParamValue>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::ParameterAlreadySet`] if the key is present.
    /// The existing value is kept.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Result<(), BuilderError> {
        match self.params.entry(key.into()) {
            Entry::Occupied(e) => Err(BuilderError::ParameterAlreadySet {
                key: e.key().clone(),
            }
            .traced()),
            Entry::Vacant(e) => {
                e.insert(value.into());
                Ok(())
            }
        }
    }

    /// Returns the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the parameters in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Writes `key=value` pairs joined by `&`, without a leading `?`.
impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={value}", escape_query_key(key))?;
        }
        Ok(())
    }
}
