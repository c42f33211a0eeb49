//! Error types for markup binding and configuration.
//!
//! None of these reach the end user. Markup errors are logged while headers
//! are bound and the offending header is left unwired.

use thiserror::Error;

/// A `data-type` value that is not one of `string`, `number`, `date`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown column type tag '{0}'")]
pub struct ParseColumnTypeError(pub String);

/// Problems found in a sortable header's declared attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("header '{header}' has no column index")]
    MissingColumnIndex { header: String },

    #[error("header '{header}' has invalid column index '{value}'")]
    InvalidColumnIndex { header: String, value: String },

    #[error("header '{header}': {source}")]
    UnknownTypeTag {
        header: String,
        #[source]
        source: ParseColumnTypeError,
    },
}

/// Invalid engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("config field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("config fields '{0}' and '{1}' must name different attributes")]
    AttributeClash(&'static str, &'static str),
}
