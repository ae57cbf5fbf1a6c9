//! Structured OpenGraph metadata types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// OpenGraph metadata extracted from a page
///
/// Scalar string fields default to the empty string when the page does
/// not carry the corresponding tag, matching the serialized form of the
/// protocol's reference tooling. Sub-record vectors preserve source
/// order. Properties under the `og:` prefix that have no dedicated
/// field are preserved in [`extra`](Self::extra).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenGraph {
    /// `og:title`, falling back to the `<title>` element
    pub title: String,

    /// `og:type` (e.g. "website", "article")
    #[serde(rename = "type")]
    pub r#type: String,

    /// `og:url`, the canonical URL of the page
    pub url: String,

    /// `og:site_name`
    pub site_name: String,

    /// `og:description`, falling back to `<meta name="description">`
    pub description: String,

    /// `og:determiner`
    pub determiner: String,

    /// `og:locale`
    pub locale: String,

    /// `og:locale:alternate`, in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locale_alternate: Vec<String>,

    /// First `<link rel="icon">` (or `rel="shortcut icon"`) href
    pub favicon: String,

    /// `og:image` sub-records, in source order
    #[serde(default)]
    pub image: Vec<Image>,

    /// `og:video` sub-records, in source order
    #[serde(default)]
    pub video: Vec<Video>,

    /// `og:audio` sub-records, in source order
    #[serde(default)]
    pub audio: Vec<Audio>,

    /// Unrecognized `og:*` properties, keyed by full property name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

/// An `og:image` structured property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// `og:image` / `og:image:url`
    pub url: String,

    /// `og:image:secure_url`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secure_url: String,

    /// `og:image:type` (MIME type)
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub r#type: String,

    /// `og:image:width` in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// `og:image:height` in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// `og:image:alt`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alt: String,
}

/// An `og:video` structured property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// `og:video` / `og:video:url`
    pub url: String,

    /// `og:video:secure_url`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secure_url: String,

    /// `og:video:type` (MIME type)
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub r#type: String,

    /// `og:video:width` in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// `og:video:height` in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// `og:video:duration` in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

/// An `og:audio` structured property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Audio {
    /// `og:audio` / `og:audio:url`
    pub url: String,

    /// `og:audio:secure_url`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secure_url: String,

    /// `og:audio:type` (MIME type)
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub r#type: String,
}
