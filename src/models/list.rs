//! List models.

use serde::{Deserialize, Serialize};

use super::primitives::{ListId, UserId};

/// A Twitter list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitterList {
    /// List ID
    pub id: ListId,
    /// Name
    #[serde(default)]
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Owner ID
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Owner handle
    #[serde(default)]
    pub username: Option<String>,
    /// `public` or `private`
    #[serde(default)]
    pub mode: Option<String>,
    /// Members
    #[serde(default)]
    pub member_count: Option<u64>,
    /// Subscribers
    #[serde(default)]
    pub subscriber_count: Option<u64>,
    /// Creation time as sent by the API
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_deserialize() {
        let list: TwitterList = serde_json::from_value(serde_json::json!({
            "id": 1585430245762441216u64,
            "name": "Rustaceans",
            "user_id": "42",
            "mode": "Public",
            "member_count": 120
        }))
        .unwrap();

        assert_eq!(list.id.as_str(), "1585430245762441216");
        assert_eq!(list.user_id, Some(UserId::new("42")));
        assert_eq!(list.member_count, Some(120));
        assert!(list.subscriber_count.is_none());

        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["id"], "1585430245762441216");
        assert_eq!(json["mode"], "Public");
    }
}
