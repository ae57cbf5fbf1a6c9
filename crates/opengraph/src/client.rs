//! Fetch intents and the HTTP entry points
//!
//! [`Intent`] bundles everything needed for one fetch: the normalized
//! target URL, the custom header map, and an optional caller-supplied
//! HTTP client. [`fetch`] is the convenience wrapper for the common
//! case of a bare URL with no customization.

use crate::error::Error;
use crate::extract::extract;
use crate::types::OpenGraph;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, warn};
use url::Url;

/// A prepared fetch: target URL, custom headers, and HTTP client
///
/// Built once per fetch and consumed by [`Intent::fetch`]. Headers are
/// applied insert-style, so the last occurrence of a duplicate name is
/// the one sent on the wire.
#[derive(Debug, Clone)]
pub struct Intent {
    url: Url,
    headers: Vec<(String, String)>,
    client: Option<reqwest::Client>,
}

impl Intent {
    /// Create an intent from a raw URL string
    ///
    /// A missing scheme defaults to `https`, so `example.com` fetches
    /// `https://example.com/`. Fails with [`Error::MissingUrl`] on an
    /// empty string and [`Error::MalformedUrl`] if the result still
    /// cannot be parsed.
    pub fn new(raw: &str) -> Result<Self, Error> {
        if raw.is_empty() {
            return Err(Error::MissingUrl);
        }
        // A bare host like "example.com" is a relative reference to the
        // url crate, so the default scheme is prepended before parsing.
        let candidate = if raw.contains("://") {
            raw.to_string()
        } else {
            format!("https://{raw}")
        };
        let url = Url::parse(&candidate).map_err(|source| Error::MalformedUrl {
            url: raw.to_string(),
            source,
        })?;
        Ok(Self {
            url,
            headers: Vec::new(),
            client: None,
        })
    }

    /// The normalized URL this intent will fetch
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Add a custom request header
    ///
    /// Repeated names overwrite at send time; the last value wins.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add every entry of a header mapping
    pub fn headers<I>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.headers.extend(headers);
        self
    }

    /// Replace the default HTTP client
    ///
    /// Lets callers control timeouts, redirect policy, or inject
    /// headers at the transport layer via `default_headers`.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Issue the GET request and extract OpenGraph metadata from the body
    ///
    /// The body is read and scanned regardless of status code: a 403
    /// error page is parsed for `og:` tags like any other page and
    /// yields an empty record rather than an error. This mirrors the
    /// reference tooling and is a documented limitation, not an
    /// oversight.
    pub async fn fetch(&self) -> Result<OpenGraph, Error> {
        let client = match &self.client {
            Some(client) => client.clone(),
            None => reqwest::Client::builder().build().map_err(Error::Network)?,
        };

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let Ok(name) = HeaderName::from_bytes(name.as_bytes()) else {
                warn!(name = %name, "skipping header with invalid name");
                continue;
            };
            let Ok(value) = HeaderValue::from_str(value) else {
                warn!(%name, "skipping header with invalid value");
                continue;
            };
            // insert, not append: duplicate names overwrite
            headers.insert(name, value);
        }

        debug!(url = %self.url, "sending request");
        let response = client
            .get(self.url.clone())
            .headers(headers)
            .send()
            .await
            .map_err(Error::Network)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %self.url, "non-success status, body will still be scanned");
        }

        let body = response.bytes().await.map_err(Error::Read)?;
        let html = String::from_utf8_lossy(&body);
        extract(&html)
    }
}

/// Fetch a URL and extract its OpenGraph metadata
///
/// Equivalent to `Intent::new(url)?.fetch().await`.
pub async fn fetch(url: &str) -> Result<OpenGraph, Error> {
    Intent::new(url)?.fetch().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_scheme_defaults_to_https() {
        let intent = Intent::new("example.com").unwrap();
        assert_eq!(intent.url().scheme(), "https");
        assert_eq!(intent.url().as_str(), "https://example.com/");
    }

    #[test]
    fn test_explicit_scheme_kept() {
        let intent = Intent::new("http://example.com/page").unwrap();
        assert_eq!(intent.url().scheme(), "http");
    }

    #[test]
    fn test_empty_url() {
        assert!(matches!(Intent::new(""), Err(Error::MissingUrl)));
    }

    #[test]
    fn test_malformed_url() {
        let err = Intent::new("http://[").unwrap_err();
        assert!(matches!(err, Error::MalformedUrl { .. }));
    }

    #[test]
    fn test_duplicate_headers_last_wins() {
        let intent = Intent::new("example.com")
            .unwrap()
            .header("User-Agent", "Bot")
            .header("User-Agent", "RealBrowser");

        // replicate the send-time HeaderMap construction
        let mut map = HeaderMap::new();
        for (name, value) in &intent.headers {
            map.insert(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        assert_eq!(map.get("user-agent").unwrap(), "RealBrowser");
        assert_eq!(map.len(), 1);
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // port 1 is unassigned and closed in any sane test environment
        let err = fetch("http://127.0.0.1:1/").await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }
}
