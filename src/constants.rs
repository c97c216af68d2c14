//! Constants for address assembly and query-key escaping.

use crate::scheme::Scheme;

/// Scheme used when none has been set on the builder.
pub const DEFAULT_SCHEME: Scheme = Scheme::Https;

/// Separator between the scheme and the rest of the address.
pub const SCHEME_SEPARATOR: &str = "://";

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

/// Characters rejected in a host.
pub const FORBIDDEN_HOST_CHARS: [char; 2] = ['/', ':'];

/// Character rejected in a user name.
pub const FORBIDDEN_USER_CHAR: char = '@';

/// Escapes applied to query-parameter keys, sorted by character.
///
/// Characters absent from this table are written verbatim, including `%`,
/// whitespace and non-ASCII text.
pub const QUERY_KEY_ESCAPES: [(char, &str); 18] = [
    ('!', "%21"),
    ('#', "%23"),
    ('$', "%24"),
    ('&', "%26"),
    ('\'', "%27"),
    ('(', "%28"),
    (')', "%29"),
    ('*', "%2A"),
    ('+', "%2B"),
    (',', "%2C"),
    ('/', "%2F"),
    (':', "%3A"),
    (';', "%3B"),
    ('=', "%3D"),
    ('?', "%3F"),
    ('@', "%40"),
    ('[', "%5B"),
    (']', "%5D"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_table_is_sorted_for_binary_search() {
        assert!(QUERY_KEY_ESCAPES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn escape_table_matches_code_points() {
        for (c, escaped) in QUERY_KEY_ESCAPES {
            assert_eq!(escaped, format!("%{:02X}", c as u32));
        }
    }
}
