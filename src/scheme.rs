//! Address scheme.

use std::fmt;
use std::str::FromStr;

use crate::error::SchemeError;

/// The scheme of a built address.
///
/// Only the two web schemes are supported. The builder falls back to
/// [`Scheme::Https`] when no scheme has been set.
///
/// # Examples
///
/// ```
/// use uri_builder::Scheme;
///
/// assert_eq!(Scheme::Http.as_str(), "http");
/// assert_eq!("HTTPS".parse::<Scheme>().unwrap(), Scheme::Https);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scheme {
    /// `http://`
    Http,
    /// `https://`
    #[default]
    Https,
}

impl Scheme {
    /// Returns the lower-case scheme name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("http") {
            Ok(Self::Http)
        } else if s.eq_ignore_ascii_case("https") {
            Ok(Self::Https)
        } else {
            Err(SchemeError::Unsupported {
                scheme: s.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_https() {
        assert_eq!(Scheme::default(), Scheme::Https);
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Scheme::Http.to_string(), "http");
        assert_eq!(Scheme::Https.to_string(), "https");
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!("Http".parse::<Scheme>(), Ok(Scheme::Http));
        assert_eq!("https".parse::<Scheme>(), Ok(Scheme::Https));
    }

    #[test]
    fn parse_unsupported_fails() {
        let result = "ftp".parse::<Scheme>();
        assert_eq!(
            result,
            Err(SchemeError::Unsupported {
                scheme: "ftp".to_string()
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Scheme::Http).unwrap(), "\"http\"");
        let parsed: Scheme = serde_json::from_str("\"https\"").unwrap();
        assert_eq!(parsed, Scheme::Https);
    }
}
