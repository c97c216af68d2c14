//! Error types for address building.

use std::fmt;

/// Errors raised while supplying components to a [`UriBuilder`] or
/// serializing it.
///
/// [`UriBuilder`]: crate::UriBuilder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// Host contains a forbidden character (`/` or `:`)
    InvalidHost {
        /// The rejected host
        host: String,
        /// The first forbidden character found
        char: char,
    },
    /// User name contains `@`
    InvalidUser {
        /// The rejected user name
        user: String,
    },
    /// A path segment contains a forbidden character
    InvalidPathSegment {
        /// The rejected segment
        segment: String,
        /// Index of the segment in the supplied sequence
        index: usize,
        /// Which character made it invalid
        reason: PathSegmentError,
    },
    /// The path was already set on this builder
    PathAlreadySet,
    /// A query parameter with this key was already set
    ParameterAlreadySet {
        /// The duplicated key, unescaped
        key: String,
    },
    /// Serialization was requested before a host was set
    MissingHost,
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHost { host, char } => {
                write!(
                    f,
                    "invalid host '{host}': contains '{char}'; pass the port and path separately"
                )
            }
            Self::InvalidUser { user } => {
                write!(f, "invalid user '{user}': user names cannot contain '@'")
            }
            Self::InvalidPathSegment {
                segment,
                index,
                reason,
            } => {
                write!(f, "invalid path segment '{segment}' at index {index}: {reason}")
            }
            Self::PathAlreadySet => {
                write!(f, "path is already set; a builder accepts one path")
            }
            Self::ParameterAlreadySet { key } => {
                write!(f, "query parameter '{key}' is already set")
            }
            Self::MissingHost => {
                write!(f, "missing required component: host")
            }
        }
    }
}

impl BuilderError {
    /// Emits a debug event for the error when the `tracing` feature is on.
    pub(crate) fn traced(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %self, "address component rejected");
        self
    }
}

impl std::error::Error for BuilderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPathSegment { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Errors for a single path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegmentError {
    /// Segment contains `/`
    ContainsSlash,
    /// Segment contains `#`
    ContainsHash,
    /// Segment contains `?`
    ContainsQuestionMark,
}

impl PathSegmentError {
    /// Returns the character this error rejects.
    #[must_use]
    pub const fn forbidden_char(self) -> char {
        match self {
            Self::ContainsSlash => '/',
            Self::ContainsHash => '#',
            Self::ContainsQuestionMark => '?',
        }
    }
}

impl fmt::Display for PathSegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "segment contains '{}'; pass each segment as a separate argument",
            self.forbidden_char()
        )
    }
}

impl std::error::Error for PathSegmentError {}

/// Errors for scheme parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// Scheme is neither `http` nor `https`
    Unsupported {
        /// The scheme that was found
        scheme: String,
    },
}

impl fmt::Display for SchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { scheme } => {
                write!(f, "unsupported scheme '{scheme}'; expected 'http' or 'https'")
            }
        }
    }
}

impl std::error::Error for SchemeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn path_segment_error_is_source() {
        let err = BuilderError::InvalidPathSegment {
            segment: "a#b".to_string(),
            index: 1,
            reason: PathSegmentError::ContainsHash,
        };
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), PathSegmentError::ContainsHash.to_string());
    }

    #[test]
    fn display_names_offending_value() {
        let err = BuilderError::InvalidHost {
            host: "a.com:80".to_string(),
            char: ':',
        };
        assert!(err.to_string().contains("'a.com:80'"));

        let err = BuilderError::ParameterAlreadySet {
            key: "page".to_string(),
        };
        assert_eq!(err.to_string(), "query parameter 'page' is already set");
    }

    #[test]
    fn forbidden_chars() {
        assert_eq!(PathSegmentError::ContainsSlash.forbidden_char(), '/');
        assert_eq!(PathSegmentError::ContainsHash.forbidden_char(), '#');
        assert_eq!(PathSegmentError::ContainsQuestionMark.forbidden_char(), '?');
    }
}
