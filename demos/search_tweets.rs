//! Tweet search example.
//!
//! This example searches recent tweets, prints the first page, then streams
//! a capped number of results across pages.
//!
//! Run with: cargo run --example search_tweets -- "#rustlang"

use futures_util::StreamExt;
use scrapebadger::api::SearchOptions;
use scrapebadger::models::QueryType;
use scrapebadger::ScrapeBadgerClient;

#[tokio::main]
async fn main() -> scrapebadger::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "#rustlang".to_string());

    // Reads SCRAPEBADGER_API_KEY
    let client = ScrapeBadgerClient::from_env()?;

    println!("Searching for {query}...");

    let page = client
        .tweets()
        .search(&query, SearchOptions::new().query_type(QueryType::Latest))
        .await?;

    println!("\nFirst page: {} tweet(s), more: {}", page.len(), page.has_more());
    for tweet in &page.data {
        println!(
            "  - @{}: {}",
            tweet.username.as_deref().unwrap_or("unknown"),
            tweet.text.replace('\n', " ")
        );
    }

    println!("\nStreaming up to 50 top tweets...");
    let mut stream = client.tweets().search_all(&query, SearchOptions::new(), Some(50));
    let mut likes = 0;
    while let Some(tweet) = stream.next().await {
        likes += tweet?.favorite_count.unwrap_or_default();
    }
    println!("  {} tweet(s), {} like(s) in total", stream.yielded(), likes);

    println!("\nDone!");
    Ok(())
}
