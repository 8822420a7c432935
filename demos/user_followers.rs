//! User profile and followers example.
//!
//! Run with: cargo run --example user_followers -- rustlang

use scrapebadger::ScrapeBadgerClient;

#[tokio::main]
async fn main() -> scrapebadger::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let username = std::env::args().nth(1).unwrap_or_else(|| "rustlang".to_string());
    let client = ScrapeBadgerClient::from_env()?;

    let user = client.users().get_by_username(&username).await?;
    println!(
        "@{} ({}): {} followers, {} following",
        user.username,
        user.name.as_deref().unwrap_or("no name"),
        user.followers_count.unwrap_or_default(),
        user.following_count.unwrap_or_default()
    );

    let followers = client
        .users()
        .followers_all(&user.username, Some(100))
        .collect_all()
        .await?;

    println!("\nFirst {} follower(s):", followers.len());
    for follower in &followers {
        println!("  - @{}", follower.username);
    }

    Ok(())
}
