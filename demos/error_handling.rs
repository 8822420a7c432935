//! Error handling example.
//!
//! Shows how the error kinds map to decisions in calling code.
//!
//! Run with: cargo run --example error_handling

use std::time::Duration;

use scrapebadger::{ClientOptions, Error, ScrapeBadgerClient};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = match ScrapeBadgerClient::with_options(
        ClientOptions::new()
            .with_timeout(Duration::from_secs(10))
            .with_max_retries(2),
    ) {
        Ok(client) => client,
        Err(Error::Config(message)) => {
            eprintln!("Configuration problem: {message}");
            return;
        }
        Err(e) => {
            eprintln!("Could not build client: {e}");
            return;
        }
    };

    match client.users().get_by_username("this_user_should_not_exist_42").await {
        Ok(user) => println!("Found @{}", user.username),
        Err(Error::NotFound { message, .. }) => println!("Not found: {message}"),
        Err(Error::RateLimited { reset_at, .. }) => {
            println!("Still rate limited after retries, resets at {reset_at:?}")
        }
        Err(Error::InsufficientCredits { credits_balance, .. }) => {
            println!("Out of credits (balance: {credits_balance:?})")
        }
        Err(e) if e.is_auth_error() => println!("Check your API key: {e}"),
        Err(e) if e.is_retryable() => println!("Transient failure, try again later: {e}"),
        Err(e) => println!("Request failed: {e}"),
    }
}
