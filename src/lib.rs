//! Builder for escaped `http://` and `https://` address strings.
//!
//! This crate assembles addresses from typed components instead of string
//! concatenation. Each component is checked for characters that would break
//! the address structure at the moment it is supplied.
//!
//! # Overview
//!
//! Built addresses have the structure:
//!
//! ```text
//! scheme://[user@]host[:port][/segment/...][?key=value&...][#fragment]
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use uri_builder::{join_path, Scheme, UriBuilder};
//!
//! let mut builder = UriBuilder::new();
//! builder
//!     .scheme(Scheme::Http)
//!     .host("qudini.com")?
//!     .port(8080)
//!     .path(["api", "queues"])?
//!     .param("queu&#eId", 1)?;
//!
//! assert_eq!(builder.build()?, "http://qudini.com:8080/api/queues?queu%26%23eId=1");
//!
//! // Paths can also be joined on their own
//! assert_eq!(join_path(["api", "v2", "resource"])?, "api/v2/resource");
//! # Ok::<(), uri_builder::BuilderError>(())
//! ```
//!
//! # Component Rules
//!
//! | Component | Rejected characters | Escaped on output |
//! |-----------|---------------------|-------------------|
//! | Host | `/` `:` | no |
//! | User | `@` | no |
//! | Path segment | `/` `#` `?` | no |
//! | Query key | none | yes, see [`QUERY_KEY_ESCAPES`] |
//! | Query value | none | no |
//! | Fragment | none | no |
//!
//! A path and each query key can be set once per builder. The order of query
//! parameters in the output is unspecified.
//!
//! # Features
//!
//! - `serde`: serialization for [`Scheme`], [`ParamValue`] and [`UriBuilder`]
//! - `tracing`: debug events for rejected components

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod constants;
mod error;
mod path_segment;
pub mod prelude;
mod query;
mod scheme;

pub use builder::UriBuilder;
pub use constants::{
    DEFAULT_SCHEME, FORBIDDEN_HOST_CHARS, FORBIDDEN_USER_CHAR, PATH_SEPARATOR, QUERY_KEY_ESCAPES,
    SCHEME_SEPARATOR,
};
pub use error::{BuilderError, PathSegmentError, SchemeError};
pub use path_segment::{join_path, PathSegment};
pub use query::{escape_query_key, ParamValue, QueryParams};
pub use scheme::Scheme;
