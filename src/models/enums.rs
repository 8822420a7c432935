//! Enumeration types for request parameters.

use serde::{Deserialize, Serialize};

/// Ranking used by tweet search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum QueryType {
    /// Most relevant tweets
    #[default]
    Top,
    /// Most recent tweets
    Latest,
    /// Tweets with photos or videos
    Media,
}

impl QueryType {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Top => "Top",
            QueryType::Latest => "Latest",
            QueryType::Media => "Media",
        }
    }
}

/// Which tweets of a community to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CommunityTweetType {
    /// Highest-ranked tweets
    #[default]
    Top,
    /// Most recent tweets
    Latest,
    /// Tweets with media
    Media,
}

impl CommunityTweetType {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunityTweetType::Top => "Top",
            CommunityTweetType::Latest => "Latest",
            CommunityTweetType::Media => "Media",
        }
    }
}

/// Trends tab to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TrendCategory {
    /// General trending topics
    #[default]
    Trending,
    /// Personalized trends
    ForYou,
    /// News
    News,
    /// Sports
    Sports,
    /// Entertainment
    Entertainment,
}

impl TrendCategory {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendCategory::Trending => "trending",
            TrendCategory::ForYou => "for-you",
            TrendCategory::News => "news",
            TrendCategory::Sports => "sports",
            TrendCategory::Entertainment => "entertainment",
        }
    }
}

/// Resolution of a geo search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceGranularity {
    /// Neighborhood level
    Neighborhood,
    /// City level
    City,
    /// Administrative region (state, province)
    Admin,
    /// Country level
    Country,
    /// Point of interest
    Poi,
}

impl PlaceGranularity {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceGranularity::Neighborhood => "neighborhood",
            PlaceGranularity::City => "city",
            PlaceGranularity::Admin => "admin",
            PlaceGranularity::Country => "country",
            PlaceGranularity::Poi => "poi",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_serde() {
        for category in [
            TrendCategory::Trending,
            TrendCategory::ForYou,
            TrendCategory::News,
            TrendCategory::Sports,
            TrendCategory::Entertainment,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }

        let json = serde_json::to_string(&PlaceGranularity::Neighborhood).unwrap();
        assert_eq!(json, "\"neighborhood\"");
        assert_eq!(QueryType::default().as_str(), "Top");
    }
}
