//! OpenGraph fetch-and-extract library
//!
//! Fetches a web page and extracts the OpenGraph metadata embedded in
//! its `<meta property="og:*">` tags into a structured, serializable
//! record, optionally rewriting relative URL fields to absolute ones.
//!
//! ```no_run
//! use opengraph::Intent;
//!
//! # async fn example() -> Result<(), opengraph::Error> {
//! let intent = Intent::new("example.com")?
//!     .header("User-Agent", "Mozilla/5.0 (compatible; MyBot/1.0)");
//! let mut og = intent.fetch().await?;
//! og.to_absolute(intent.url().as_str())?;
//! println!("{}: {}", og.title, og.description);
//! # Ok(())
//! # }
//! ```
//!
//! Two behaviors worth knowing up front:
//!
//! - A URL without a scheme defaults to `https`.
//! - Non-2xx responses are not errors: the body is scanned for `og:`
//!   tags like any other page. A bot-protection page returning 403 will
//!   yield an empty record, not a failure (see [`Intent::fetch`]).

mod absolutize;
mod client;
mod error;
mod extract;
mod types;

pub use client::{fetch, Intent};
pub use error::Error;
pub use extract::extract;
pub use types::{Audio, Image, OpenGraph, Video};
