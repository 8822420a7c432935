//! Tweet models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::place::Place;
use super::primitives::{TweetId, UserId};
use super::user::User;

/// A tweet as returned by the scraping API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    /// Tweet ID
    pub id: TweetId,
    /// Tweet text
    #[serde(default)]
    pub text: String,
    /// Creation time as sent by the API
    #[serde(default)]
    pub created_at: Option<String>,
    /// Language code
    #[serde(default)]
    pub lang: Option<String>,
    /// Author ID
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Author handle
    #[serde(default)]
    pub username: Option<String>,
    /// Embedded author profile
    #[serde(default)]
    pub user: Option<Box<User>>,
    /// Likes
    #[serde(default)]
    pub favorite_count: Option<u64>,
    /// Retweets
    #[serde(default)]
    pub retweet_count: Option<u64>,
    /// Replies
    #[serde(default)]
    pub reply_count: Option<u64>,
    /// Quote tweets
    #[serde(default)]
    pub quote_count: Option<u64>,
    /// Views
    #[serde(default)]
    pub view_count: Option<u64>,
    /// Bookmarks
    #[serde(default)]
    pub bookmark_count: Option<u64>,
    /// Root tweet of the conversation
    #[serde(default)]
    pub conversation_id: Option<TweetId>,
    /// Tweet this one replies to
    #[serde(default)]
    pub in_reply_to_status_id: Option<TweetId>,
    /// Author of the tweet this one replies to
    #[serde(default)]
    pub in_reply_to_user_id: Option<UserId>,
    /// Whether this tweet quotes another
    #[serde(default)]
    pub is_quote_status: bool,
    /// The quoted tweet, when embedded
    #[serde(default)]
    pub quoted_status: Option<Box<Tweet>>,
    /// The retweeted tweet, when this is a retweet
    #[serde(default)]
    pub retweeted_status: Option<Box<Tweet>>,
    /// Attached media
    #[serde(default)]
    pub media: Vec<Media>,
    /// Hashtags without the leading `#`
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Expanded URLs
    #[serde(default)]
    pub urls: Vec<String>,
    /// Mentioned handles
    #[serde(default)]
    pub user_mentions: Vec<String>,
    /// Tagged place
    #[serde(default)]
    pub place: Option<Place>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Tweet {
    /// Whether this tweet is a reply.
    pub fn is_reply(&self) -> bool {
        self.in_reply_to_status_id.is_some()
    }

    /// Whether this tweet is a retweet.
    pub fn is_retweet(&self) -> bool {
        self.retweeted_status.is_some()
    }
}

/// Media attached to a tweet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    /// Media ID
    #[serde(default)]
    pub id: Option<String>,
    /// `photo`, `video` or `animated_gif`
    #[serde(default, rename = "type")]
    pub media_type: Option<String>,
    /// Direct URL
    #[serde(default)]
    pub url: Option<String>,
    /// Preview image URL
    #[serde(default)]
    pub preview_url: Option<String>,
    /// Width in pixels
    #[serde(default)]
    pub width: Option<u32>,
    /// Height in pixels
    #[serde(default)]
    pub height: Option<u32>,
    /// Duration for videos
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_tweet() {
        let tweet: Tweet = serde_json::from_value(serde_json::json!({
            "id": "1",
            "text": "hello",
            "favorite_count": 3,
            "in_reply_to_status_id": 7,
            "source": "web"
        }))
        .unwrap();

        assert_eq!(tweet.id.as_str(), "1");
        assert_eq!(tweet.text, "hello");
        assert_eq!(tweet.favorite_count, Some(3));
        assert!(tweet.is_reply());
        assert!(!tweet.is_retweet());
        assert_eq!(tweet.extra["source"], "web");
    }
}
