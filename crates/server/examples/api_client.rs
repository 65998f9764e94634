//! Walk through the bookshelf API against a running server.
//!
//! Start the server first with `cargo run -p book-server`, then run
//! `cargo run -p book-server --example api_client`.

use reqwest::{Client, StatusCode};
use serde_json::json;

const SERVER_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("2. List Math Books:");
    let resp = client
        .get(format!("{SERVER_URL}/api/books"))
        .query(&[("category", "math")])
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("3. Create Book:");
    let resp = client
        .post(format!("{SERVER_URL}/api/books"))
        .json(&json!({
            "title": "Programming Rust",
            "author": "Jim Blandy",
            "category": "Computer Science",
            "rating": 5
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    let location = resp
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    println!("Location: {location:?}");
    println!();

    let Some(location) = location else {
        anyhow::bail!("server did not return a Location header");
    };

    println!("4. Update Book:");
    let resp = client
        .put(format!("{SERVER_URL}{location}"))
        .json(&json!({
            "title": "Programming Rust 2e",
            "author": "Jim Blandy",
            "category": "Computer Science",
            "rating": 4
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("5. Invalid Payload:");
    let resp = client
        .post(format!("{SERVER_URL}/api/books"))
        .json(&json!({ "title": "", "author": "Nobody", "category": "None", "rating": 9 }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("6. Delete Book:");
    let resp = client
        .delete(format!("{SERVER_URL}{location}"))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    if resp.status() != StatusCode::NO_CONTENT {
        println!("Body: {}", resp.text().await?);
    }
    println!();

    println!("7. Get Deleted Book:");
    let resp = client.get(format!("{SERVER_URL}{location}")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);

    Ok(())
}
