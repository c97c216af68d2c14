//! Builder for address strings.
//!
//! Each component is validated when it is supplied, so a builder never holds
//! an invalid component. Serialization reads the current state and can be
//! repeated.

use std::fmt::{self, Write as _};

use crate::constants::{
    DEFAULT_SCHEME, FORBIDDEN_HOST_CHARS, FORBIDDEN_USER_CHAR, PATH_SEPARATOR, SCHEME_SEPARATOR,
};
use crate::error::BuilderError;
use crate::path_segment::{self, PathSegment};
use crate::query::{ParamValue, QueryParams};
use crate::scheme::Scheme;

/// A builder for `http://` and `https://` address strings.
///
/// Setters take `&mut self` and return the builder again, so calls can be
/// chained. Fallible setters return a `Result`; chain them with `?`. A
/// setter that fails leaves the builder unchanged.
///
/// The output is assembled as
///
/// ```text
/// scheme://[user@]host[:port][/path][?query][#fragment]
/// ```
///
/// Only query-parameter keys are escaped (see [`escape_query_key`]). Paths,
/// values and fragments are written as given. The order of query parameters
/// is unspecified.
///
/// [`escape_query_key`]: crate::escape_query_key
///
/// # Examples
///
/// ```
/// use uri_builder::UriBuilder;
///
/// let uri = UriBuilder::new().host("qudini.com")?.build()?;
/// assert_eq!(uri, "https://qudini.com");
///
/// let mut builder = UriBuilder::new();
/// builder
///     .host("qudini.com")?
///     .user("qudini")?
///     .port(8080)
///     .path(["api", "queues", "add"])?
///     .param("activate", true)?
///     .fragment("section-2");
///
/// assert_eq!(
///     builder.build()?,
///     "https://qudini@qudini.com:8080/api/queues/add?activate=true#section-2"
/// );
/// # Ok::<(), uri_builder::BuilderError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UriBuilder {
    scheme: Option<Scheme>,
    user: Option<String>,
    host: Option<String>,
    port: Option<u64>,
    path: Option<Vec<PathSegment>>,
    params: QueryParams,
    fragment: Option<String>,
}

impl UriBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scheme. The last value wins.
    pub fn scheme(&mut self, scheme: Scheme) -> &mut Self {
        self.scheme = Some(scheme);
        self
    }

    /// Sets the user name written before `@`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidUser`] if the user name contains `@`.
    pub fn user(&mut self, user: impl Into<String>) -> Result<&mut Self, BuilderError> {
        let user = user.into();
        if user.contains(FORBIDDEN_USER_CHAR) {
            return Err(BuilderError::InvalidUser { user }.traced());
        }
        self.user = Some(user);
        Ok(self)
    }

    /// Sets the host.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidHost`] if the host contains `/` or `:`.
    /// Ports and paths have their own setters.
    pub fn host(&mut self, host: impl Into<String>) -> Result<&mut Self, BuilderError> {
        let host = host.into();
        if let Some(char) = host.chars().find(|c| FORBIDDEN_HOST_CHARS.contains(c)) {
            return Err(BuilderError::InvalidHost { host, char }.traced());
        }
        self.host = Some(host);
        Ok(self)
    }

    /// Sets the port. Any value is accepted.
    pub fn port(&mut self, port: u64) -> &mut Self {
        self.port = Some(port);
        self
    }

    /// Sets the path from its segments.
    ///
    /// A builder accepts one path. Segments are written as given, joined by
    /// `/`.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::PathAlreadySet`] if a path was set before
    /// - [`BuilderError::InvalidPathSegment`] for the first segment that
    ///   contains `/`, `#` or `?`
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_builder::{BuilderError, UriBuilder};
    ///
    /// let mut builder = UriBuilder::new();
    /// builder.host("example.com")?.path(["api", "v2"])?;
    ///
    /// assert_eq!(builder.path(["v3"]).unwrap_err(), BuilderError::PathAlreadySet);
    /// assert_eq!(builder.build()?, "https://example.com/api/v2");
    /// # Ok::<(), BuilderError>(())
    /// ```
    pub fn path<I, S>(&mut self, segments: I) -> Result<&mut Self, BuilderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.path.is_some() {
            return Err(BuilderError::PathAlreadySet.traced());
        }
        self.path = Some(path_segment::parse_segments(segments)?);
        Ok(self)
    }

    /// Adds a query parameter.
    ///
    /// The key is escaped on output; the value is written with its plain
    /// text form.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::ParameterAlreadySet`] if the key was set
    /// before. The first value is kept.
    pub fn param(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Result<&mut Self, BuilderError> {
        self.params.insert(key, value)?;
        Ok(self)
    }

    /// Sets the fragment written after `#`. The last value wins.
    pub fn fragment(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.fragment = Some(fragment.into());
        self
    }

    /// Sets the user name if provided, otherwise leaves it unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidUser`] if the user name contains `@`.
    pub fn maybe_user(&mut self, user: Option<impl Into<String>>) -> Result<&mut Self, BuilderError> {
        match user {
            Some(u) => self.user(u),
            None => Ok(self),
        }
    }

    /// Sets the port if provided, otherwise leaves it unchanged.
    pub fn maybe_port(&mut self, port: Option<u64>) -> &mut Self {
        match port {
            Some(p) => self.port(p),
            None => self,
        }
    }

    /// Sets the fragment if provided, otherwise leaves it unchanged.
    pub fn maybe_fragment(&mut self, fragment: Option<impl Into<String>>) -> &mut Self {
        match fragment {
            Some(f) => self.fragment(f),
            None => self,
        }
    }

    /// Returns the scheme that will be written, [`Scheme::Https`] by default.
    #[must_use]
    pub fn scheme_or_default(&self) -> Scheme {
        self.scheme.unwrap_or(DEFAULT_SCHEME)
    }

    /// Returns the user name, if set.
    #[must_use]
    pub fn user_str(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the host, if set.
    #[must_use]
    pub fn host_str(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the port, if set.
    #[must_use]
    pub const fn port_number(&self) -> Option<u64> {
        self.port
    }

    /// Returns the path segments, if a path was set.
    #[must_use]
    pub fn path_segments(&self) -> Option<&[PathSegment]> {
        self.path.as_deref()
    }

    /// Returns the query parameters.
    #[must_use]
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Returns the fragment, if set.
    #[must_use]
    pub fn fragment_str(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Assembles the address string.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::MissingHost`] if no host was set.
    pub fn build(&self) -> Result<String, BuilderError> {
        let host = self
            .host
            .as_deref()
            .ok_or_else(|| BuilderError::MissingHost.traced())?;
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_to(&mut out, host);
        Ok(out)
    }

    fn write_to(&self, out: &mut impl fmt::Write, host: &str) -> fmt::Result {
        write!(out, "{}{SCHEME_SEPARATOR}", self.scheme_or_default())?;

        if let Some(user) = &self.user {
            write!(out, "{user}{FORBIDDEN_USER_CHAR}")?;
        }

        out.write_str(host)?;

        if let Some(port) = self.port {
            write!(out, ":{port}")?;
        }

        if let Some(segments) = &self.path {
            out.write_char(PATH_SEPARATOR)?;
            path_segment::write_joined(out, segments)?;
        }

        if !self.params.is_empty() {
            write!(out, "?{}", self.params)?;
        }

        if let Some(fragment) = &self.fragment {
            write!(out, "#{fragment}")?;
        }

        Ok(())
    }
}

/// Writes the address string.
///
/// A builder without a host is a caller error: formatting fails, and
/// `to_string()` panics. Use [`UriBuilder::build`] to get a `Result` instead.
impl fmt::Display for UriBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.host.as_deref() {
            Some(host) => self.write_to(f, host),
            None => {
                let _ = BuilderError::MissingHost.traced();
                Err(fmt::Error)
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UriBuilder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let uri = self.build().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&uri)
    }
}
