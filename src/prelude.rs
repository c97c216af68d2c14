//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use uri_builder::prelude::*;
//!
//! let mut builder = UriBuilder::new();
//! builder.scheme(Scheme::Http).host("example.com")?;
//! assert_eq!(builder.build()?, "http://example.com");
//! # Ok::<(), BuilderError>(())
//! ```

pub use crate::{
    // Builder
    UriBuilder,
    // Components
    ParamValue, PathSegment, QueryParams, Scheme,
    // Free functions
    escape_query_key, join_path,
    // Errors
    BuilderError, PathSegmentError, SchemeError,
};
