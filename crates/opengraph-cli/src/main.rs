//! ogp - fetch a URL and print its OpenGraph metadata as JSON

use clap::Parser;
use opengraph::{Error, Intent, OpenGraph};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Fetch URL and extract OpenGraph meta information
#[derive(Parser, Debug)]
#[command(name = "ogp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL to fetch (scheme defaults to https if omitted)
    url: Option<String>,

    /// Populate relative URLs to absolute URLs
    #[arg(short = 'A')]
    absolute: bool,

    /// Custom header, repeatable (format: "Header: Value")
    #[arg(short = 'H', value_name = "HEADER")]
    header: Vec<String>,
}

/// Raw header strings collected from repeated -H flags
#[derive(Debug, Default)]
struct HeaderList(Vec<String>);

impl fmt::Display for HeaderList {
    // display-only join of the raw entries, not the form sent downstream
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

impl HeaderList {
    /// Parse raw entries into a name -> value map
    ///
    /// Each entry is split once on the first colon; entries without a
    /// colon are silently dropped; names and values are trimmed; the
    /// last occurrence of a duplicate name wins.
    fn into_map(self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        for entry in self.0 {
            if let Some((name, value)) = entry.split_once(':') {
                map.insert(name.trim().to_string(), value.trim().to_string());
            }
        }
        map
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(json) => println!("{json}"),
        Err(e) => {
            // errors go to stdout, matching the original tool
            println!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Fetch, optionally absolutize, and render; no process exit in here
async fn run(cli: Cli) -> Result<String, Error> {
    let url = cli.url.ok_or(Error::MissingUrl)?;

    let intent = Intent::new(&url)?.headers(HeaderList(cli.header).into_map());
    let base = intent.url().to_string();

    let mut og = intent.fetch().await?;
    if cli.absolute {
        og.to_absolute(&base)?;
    }

    Ok(render(&og))
}

/// Serialize with tab indentation, matching the original tool's output
fn render(og: &OpenGraph) -> String {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    if let Err(e) = og.serialize(&mut ser) {
        eprintln!("Error serializing metadata: {e}");
        std::process::exit(1);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "ogp",
            "-A",
            "-H",
            "User-Agent: MyBot",
            "-H",
            "Accept-Language: en-US",
            "example.com",
        ])
        .unwrap();

        assert!(cli.absolute);
        assert_eq!(cli.url.as_deref(), Some("example.com"));
        assert_eq!(
            cli.header,
            vec!["User-Agent: MyBot", "Accept-Language: en-US"]
        );
    }

    #[test]
    fn test_header_list_display_joins() {
        let headers = HeaderList(vec![
            "User-Agent: MyBot".to_string(),
            "Accept: text/html".to_string(),
        ]);
        assert_eq!(headers.to_string(), "User-Agent: MyBot, Accept: text/html");
    }

    #[test]
    fn test_header_map_trims_and_splits_on_first_colon() {
        let headers = HeaderList(vec!["  Accept : text/html, application/xml ".to_string()]);
        let map = headers.into_map();
        assert_eq!(
            map.get("Accept").map(String::as_str),
            Some("text/html, application/xml")
        );
    }

    #[test]
    fn test_header_map_value_keeps_inner_colons() {
        let headers = HeaderList(vec!["Referer: https://example.com:8080/".to_string()]);
        let map = headers.into_map();
        assert_eq!(
            map.get("Referer").map(String::as_str),
            Some("https://example.com:8080/")
        );
    }

    #[test]
    fn test_header_map_drops_entries_without_colon() {
        let headers = HeaderList(vec!["not-a-header".to_string(), "X-Ok: yes".to_string()]);
        let map = headers.into_map();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("X-Ok").map(String::as_str), Some("yes"));
    }

    #[test]
    fn test_header_map_last_duplicate_wins() {
        let headers = HeaderList(vec![
            "User-Agent: Bot".to_string(),
            "User-Agent: RealBrowser".to_string(),
        ]);
        let map = headers.into_map();
        assert_eq!(
            map.get("User-Agent").map(String::as_str),
            Some("RealBrowser")
        );
    }

    #[tokio::test]
    async fn test_missing_url_fails_before_any_network_access() {
        let cli = Cli {
            url: None,
            absolute: false,
            header: Vec::new(),
        };
        let err = run(cli).await.unwrap_err();
        assert!(matches!(err, Error::MissingUrl));
        assert_eq!(err.to_string(), "URL must be specified");
    }

    #[tokio::test]
    async fn test_malformed_url_reported() {
        let cli = Cli {
            url: Some("http://[".to_string()),
            absolute: false,
            header: Vec::new(),
        };
        let err = run(cli).await.unwrap_err();
        assert!(matches!(err, Error::MalformedUrl { .. }));
    }

    #[test]
    fn test_render_uses_tab_indentation() {
        let og = OpenGraph {
            title: "Example".to_string(),
            ..Default::default()
        };
        let json = render(&og);
        assert!(json.starts_with("{\n\t\"title\": \"Example\""));
        assert!(json.contains("\n\t\"type\": \"\""));
        assert!(json.ends_with('}'));
    }
}
