//! Example: fetch a page and print its OpenGraph metadata
//!
//! Run with: cargo run -p opengraph --example print_metadata [URL]

use opengraph::Intent;

#[tokio::main]
async fn main() {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ogp.me".to_string());

    let intent = match Intent::new(&url) {
        Ok(intent) => intent,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match intent.fetch().await {
        Ok(mut og) => {
            if og.to_absolute(intent.url().as_str()).is_ok() {
                println!("URL:         {}", og.url);
            }
            println!("Title:       {}", og.title);
            println!("Type:        {}", og.r#type);
            println!("Description: {}", og.description);
            for image in &og.image {
                println!("Image:       {}", image.url);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
