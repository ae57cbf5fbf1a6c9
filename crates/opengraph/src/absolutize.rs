//! Relative-to-absolute URL rewriting
//!
//! Pages frequently publish `og:image` and friends as relative
//! references. Resolving them against the page's own URL turns the
//! record into something a consumer can use without knowing where the
//! page came from.

use crate::error::Error;
use crate::types::OpenGraph;
use url::Url;

impl OpenGraph {
    /// Rewrite every relative URL field to an absolute URL
    ///
    /// Resolution follows the standard reference-resolution rules, so
    /// scheme-relative, path-relative, and query/fragment-only
    /// references all work. Already-absolute values are left untouched
    /// and references the base cannot resolve are skipped, which makes
    /// the operation idempotent. Fails only if `base` itself is not an
    /// absolute URL.
    pub fn to_absolute(&mut self, base: &str) -> Result<(), Error> {
        let base = Url::parse(base).map_err(|source| Error::UrlResolution {
            base: base.to_string(),
            source,
        })?;

        absolutize(&mut self.url, &base);
        absolutize(&mut self.favicon, &base);
        for image in &mut self.image {
            absolutize(&mut image.url, &base);
        }
        for video in &mut self.video {
            absolutize(&mut video.url, &base);
        }
        for audio in &mut self.audio {
            absolutize(&mut audio.url, &base);
        }
        Ok(())
    }
}

/// Resolve a single reference in place
///
/// Empty fields, absolute URLs, and unresolvable references are left
/// unchanged.
fn absolutize(field: &mut String, base: &Url) {
    if field.is_empty() || Url::parse(field).is_ok() {
        return;
    }
    if let Ok(resolved) = base.join(field) {
        *field = resolved.to_string();
    }
}
