//! User models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::primitives::UserId;

/// A user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: UserId,
    /// Handle without the leading `@`
    #[serde(default)]
    pub username: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Bio
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form location
    #[serde(default)]
    pub location: Option<String>,
    /// Profile link
    #[serde(default)]
    pub url: Option<String>,
    /// Creation time as sent by the API
    #[serde(default)]
    pub created_at: Option<String>,
    /// Followers
    #[serde(default)]
    pub followers_count: Option<u64>,
    /// Accounts followed
    #[serde(default)]
    pub following_count: Option<u64>,
    /// Tweets posted
    #[serde(default)]
    pub tweet_count: Option<u64>,
    /// Lists the user is on
    #[serde(default)]
    pub listed_count: Option<u64>,
    /// Tweets liked
    #[serde(default)]
    pub favourites_count: Option<u64>,
    /// Media posted
    #[serde(default)]
    pub media_count: Option<u64>,
    /// Legacy verification
    #[serde(default)]
    pub verified: bool,
    /// Paid verification
    #[serde(default)]
    pub is_blue_verified: bool,
    /// Protected account
    #[serde(default)]
    pub protected: bool,
    /// Avatar URL
    #[serde(default)]
    pub profile_image_url: Option<String>,
    /// Banner URL
    #[serde(default)]
    pub profile_banner_url: Option<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
