//! OpenGraph meta-tag extraction
//!
//! A single pass over the document's `<meta>` elements in source order.
//! Array-valued properties (`og:image`, `og:video`, `og:audio`) start a
//! new sub-record; continuation keys (`og:image:width`, ...) attach to
//! the most recent sub-record of their kind, so source order determines
//! association. Unrecognized `og:*` properties are kept as free-form
//! key/value pairs.

use crate::error::Error;
use crate::types::{Audio, Image, OpenGraph, Video};
use scraper::{Html, Selector};

/// Extract OpenGraph metadata from raw HTML
///
/// Malformed HTML is not an error: the tokenizer recovers from
/// anything, and only meta/link/title elements are looked at.
pub fn extract(html: &str) -> Result<OpenGraph, Error> {
    let document = Html::parse_document(html);
    let mut og = OpenGraph::default();

    // Fallback policy: the <title> element fills `title` and
    // <meta name="description"> fills `description`, each only when the
    // page carries no og: equivalent. No other non-prefixed names are
    // recognized.
    let mut meta_description = String::new();

    for element in document.select(&selector("meta")?) {
        let attrs = element.value();
        let Some(property) = attrs.attr("property").or_else(|| attrs.attr("name")) else {
            continue;
        };
        let Some(content) = attrs.attr("content") else {
            continue;
        };
        if let Some(key) = property.strip_prefix("og:") {
            apply(&mut og, key, content);
        } else if property == "description" && meta_description.is_empty() {
            meta_description = content.to_string();
        }
    }

    if og.title.is_empty() {
        if let Some(element) = document.select(&selector("title")?).next() {
            og.title = element.text().collect();
        }
    }
    if og.description.is_empty() {
        og.description = meta_description;
    }

    for element in document.select(&selector("link")?) {
        let attrs = element.value();
        let (Some(rel), Some(href)) = (attrs.attr("rel"), attrs.attr("href")) else {
            continue;
        };
        if rel
            .split_whitespace()
            .any(|token| token.eq_ignore_ascii_case("icon"))
        {
            og.favicon = href.to_string();
            break;
        }
    }

    Ok(og)
}

/// Apply one `og:` property (prefix already stripped) to the record
fn apply(og: &mut OpenGraph, key: &str, content: &str) {
    let content = content.to_string();
    match key {
        "title" => og.title = content,
        "type" => og.r#type = content,
        "url" => og.url = content,
        "site_name" => og.site_name = content,
        "description" => og.description = content,
        "determiner" => og.determiner = content,
        "locale" => og.locale = content,
        "locale:alternate" => og.locale_alternate.push(content),

        "image" => og.image.push(Image {
            url: content,
            ..Default::default()
        }),
        // og:image:url is an alias for og:image but updates the current
        // sub-record when one is already open
        "image:url" => match og.image.last_mut() {
            Some(image) => image.url = content,
            None => og.image.push(Image {
                url: content,
                ..Default::default()
            }),
        },
        "image:secure_url" => {
            if let Some(image) = og.image.last_mut() {
                image.secure_url = content;
            }
        }
        "image:type" => {
            if let Some(image) = og.image.last_mut() {
                image.r#type = content;
            }
        }
        "image:width" => {
            if let (Some(image), Ok(width)) = (og.image.last_mut(), content.parse()) {
                image.width = Some(width);
            }
        }
        "image:height" => {
            if let (Some(image), Ok(height)) = (og.image.last_mut(), content.parse()) {
                image.height = Some(height);
            }
        }
        "image:alt" => {
            if let Some(image) = og.image.last_mut() {
                image.alt = content;
            }
        }

        "video" => og.video.push(Video {
            url: content,
            ..Default::default()
        }),
        "video:url" => match og.video.last_mut() {
            Some(video) => video.url = content,
            None => og.video.push(Video {
                url: content,
                ..Default::default()
            }),
        },
        "video:secure_url" => {
            if let Some(video) = og.video.last_mut() {
                video.secure_url = content;
            }
        }
        "video:type" => {
            if let Some(video) = og.video.last_mut() {
                video.r#type = content;
            }
        }
        "video:width" => {
            if let (Some(video), Ok(width)) = (og.video.last_mut(), content.parse()) {
                video.width = Some(width);
            }
        }
        "video:height" => {
            if let (Some(video), Ok(height)) = (og.video.last_mut(), content.parse()) {
                video.height = Some(height);
            }
        }
        "video:duration" => {
            if let (Some(video), Ok(duration)) = (og.video.last_mut(), content.parse()) {
                video.duration = Some(duration);
            }
        }

        "audio" => og.audio.push(Audio {
            url: content,
            ..Default::default()
        }),
        "audio:url" => match og.audio.last_mut() {
            Some(audio) => audio.url = content,
            None => og.audio.push(Audio {
                url: content,
                ..Default::default()
            }),
        },
        "audio:secure_url" => {
            if let Some(audio) = og.audio.last_mut() {
                audio.secure_url = content;
            }
        }
        "audio:type" => {
            if let Some(audio) = og.audio.last_mut() {
                audio.r#type = content;
            }
        }

        _ => {
            og.extra.insert(format!("og:{key}"), content);
        }
    }
}

fn selector(css: &str) -> Result<Selector, Error> {
    Selector::parse(css).map_err(|e| Error::Parse(e.to_string()))
}
