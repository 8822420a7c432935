//! Trend models.

use serde::{Deserialize, Serialize};

/// A trending topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trend {
    /// Topic name
    pub name: String,
    /// Search query for the topic
    #[serde(default)]
    pub query: Option<String>,
    /// Search URL
    #[serde(default)]
    pub url: Option<String>,
    /// Approximate tweet volume
    #[serde(default)]
    pub tweet_count: Option<u64>,
    /// Context line such as "Trending in Sports"
    #[serde(default)]
    pub domain_context: Option<String>,
}

/// Trends for one location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceTrends {
    /// Yahoo! Where On Earth ID
    pub woeid: u64,
    /// Location name
    #[serde(default)]
    pub name: Option<String>,
    /// Current trends
    #[serde(default)]
    pub trends: Vec<Trend>,
}

/// A location for which trends are available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Yahoo! Where On Earth ID
    pub woeid: u64,
    /// Location name
    pub name: String,
    /// Country name
    #[serde(default)]
    pub country: Option<String>,
    /// ISO country code
    #[serde(default)]
    pub country_code: Option<String>,
    /// Parent location
    #[serde(default)]
    pub parent_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_trends_deserialize() {
        let place: PlaceTrends = serde_json::from_value(serde_json::json!({
            "woeid": 1,
            "name": "Worldwide",
            "trends": [
                {"name": "#RustConf", "tweet_count": 1200, "domain_context": "Technology"},
                {"name": "Ferris"}
            ]
        }))
        .unwrap();

        assert_eq!(place.woeid, 1);
        assert_eq!(place.trends[0].tweet_count, Some(1200));
        assert!(place.trends[1].query.is_none());
    }

    #[test]
    fn test_location_deserialize() {
        let location: Location = serde_json::from_value(serde_json::json!({
            "woeid": 638242,
            "name": "Berlin",
            "country_code": "DE",
            "parent_id": 23424829
        }))
        .unwrap();

        assert_eq!(location.name, "Berlin");
        assert_eq!(location.parent_id, Some(23424829));
    }
}
