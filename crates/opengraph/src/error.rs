//! Error types for OpenGraph fetching and extraction

use thiserror::Error;

/// Errors that can occur while fetching a page and extracting its
/// OpenGraph metadata
#[derive(Debug, Error)]
pub enum Error {
    /// No URL was supplied
    #[error("URL must be specified")]
    MissingUrl,

    /// URL could not be parsed
    #[error("invalid URL {url:?}")]
    MalformedUrl {
        /// The raw input that failed to parse
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Request could not be sent (connection refused, timeout, ...)
    #[error("request failed")]
    Network(#[source] reqwest::Error),

    /// Response body could not be read to completion
    #[error("failed to read response body")]
    Read(#[source] reqwest::Error),

    /// HTML input could not be scanned for meta tags
    #[error("failed to parse HTML: {0}")]
    Parse(String),

    /// Base URL is invalid, relative references cannot be resolved
    #[error("invalid base URL {base:?}")]
    UrlResolution {
        /// The base the caller supplied for resolution
        base: String,
        #[source]
        source: url::ParseError,
    },
}
