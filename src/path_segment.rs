//! Path segments and path joining.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::constants::PATH_SEPARATOR;
use crate::error::{BuilderError, PathSegmentError};

/// A validated path segment.
///
/// A segment may hold any text except `/`, `#` and `?`. Segments are written
/// verbatim, without percent-encoding.
///
/// # Examples
///
/// ```
/// use uri_builder::{PathSegment, PathSegmentError};
///
/// let seg = PathSegment::parse("queues").unwrap();
/// assert_eq!(seg.as_str(), "queues");
///
/// assert_eq!(PathSegment::parse("a?b"), Err(PathSegmentError::ContainsQuestionMark));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment(String);

impl PathSegment {
    /// Parses a path segment from a string.
    ///
    /// # Errors
    ///
    /// Returns `PathSegmentError` if the segment contains `/`, `#` or `?`.
    /// Characters are checked in that order.
    pub fn parse(input: &str) -> Result<Self, PathSegmentError> {
        Self::check(input)?;
        Ok(Self(input.to_string()))
    }

    /// Returns the segment as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn check(input: &str) -> Result<(), PathSegmentError> {
        for reason in [
            PathSegmentError::ContainsSlash,
            PathSegmentError::ContainsHash,
            PathSegmentError::ContainsQuestionMark,
        ] {
            if input.contains(reason.forbidden_char()) {
                return Err(reason);
            }
        }
        Ok(())
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PathSegment {
    type Err = PathSegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PathSegment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validates every segment, stopping at the first invalid one.
pub(crate) fn parse_segments<I, S>(segments: I) -> Result<Vec<PathSegment>, BuilderError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .enumerate()
        .map(|(index, seg)| {
            let seg = seg.as_ref();
            PathSegment::parse(seg).map_err(|reason| {
                BuilderError::InvalidPathSegment {
                    segment: seg.to_string(),
                    index,
                    reason,
                }
                .traced()
            })
        })
        .collect()
}

/// Writes segments separated by `/`, with no leading separator.
pub(crate) fn write_joined(f: &mut impl fmt::Write, segments: &[PathSegment]) -> fmt::Result {
    for (i, seg) in segments.iter().enumerate() {
        if i > 0 {
            f.write_char(PATH_SEPARATOR)?;
        }
        f.write_str(seg.as_str())?;
    }
    Ok(())
}

/// Validates path segments and joins them with `/`.
///
/// The result has no leading separator. Use this when only a path fragment
/// is needed, without building a full address.
///
/// # Errors
///
/// Returns [`BuilderError::InvalidPathSegment`] for the first segment that
/// contains `/`, `#` or `?`.
///
/// # Examples
///
/// ```
/// use uri_builder::join_path;
///
/// assert_eq!(join_path(["api", "v2", "resource"]).unwrap(), "api/v2/resource");
/// assert!(join_path(["api", "v2/resource"]).is_err());
/// ```
pub fn join_path<I, S>(segments: I) -> Result<String, BuilderError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let segments = parse_segments(segments)?;
    let mut joined = String::new();
    // Writing to a String cannot fail.
    let _ = write_joined(&mut joined, &segments);
    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_segment() {
        let seg = PathSegment::parse("resource").unwrap();
        assert_eq!(seg.as_str(), "resource");
    }

    #[test]
    fn parse_allows_unreserved_and_other_text() {
        for input in ["", "a b", "100%", "ünïcode", "a&b=c", "x:y@z"] {
            assert_eq!(PathSegment::parse(input).unwrap().as_str(), input);
        }
    }

    #[test]
    fn parse_slash_fails() {
        assert_eq!(PathSegment::parse("a/b"), Err(PathSegmentError::ContainsSlash));
    }

    #[test]
    fn parse_hash_fails() {
        assert_eq!(PathSegment::parse("a#b"), Err(PathSegmentError::ContainsHash));
    }

    #[test]
    fn parse_question_mark_fails() {
        assert_eq!(
            PathSegment::parse("a?b"),
            Err(PathSegmentError::ContainsQuestionMark)
        );
    }

    #[test]
    fn slash_is_reported_before_hash_and_question_mark() {
        assert_eq!(
            PathSegment::parse("abc/def?ghi#123"),
            Err(PathSegmentError::ContainsSlash)
        );
        assert_eq!(PathSegment::parse("def?ghi#123"), Err(PathSegmentError::ContainsHash));
    }

    #[test]
    fn join_without_leading_separator() {
        assert_eq!(join_path(["123", "abc", "42", "foo"]).unwrap(), "123/abc/42/foo");
    }

    #[test]
    fn join_single_and_empty() {
        assert_eq!(join_path(["only"]).unwrap(), "only");
        assert_eq!(join_path(Vec::<String>::new()).unwrap(), "");
    }

    #[test]
    fn join_reports_first_invalid_segment() {
        let err = join_path(["api", "a#b", "c?d"]).unwrap_err();
        assert_eq!(
            err,
            BuilderError::InvalidPathSegment {
                segment: "a#b".to_string(),
                index: 1,
                reason: PathSegmentError::ContainsHash,
            }
        );
    }

    #[test]
    fn join_accepts_owned_strings() {
        let owned = vec!["a".to_string(), "b".to_string()];
        assert_eq!(join_path(&owned).unwrap(), "a/b");
    }
}
