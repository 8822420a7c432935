//! Community models.

use serde::{Deserialize, Serialize};

use super::primitives::{CommunityId, UserId};

/// A community.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Community {
    /// Community ID
    pub id: CommunityId,
    /// Name
    #[serde(default)]
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Members
    #[serde(default)]
    pub member_count: Option<u64>,
    /// Moderators
    #[serde(default)]
    pub moderator_count: Option<u64>,
    /// `Open` or `RestrictedJoinRequestsRequireModeratorApproval`
    #[serde(default)]
    pub join_policy: Option<String>,
    /// Whether the community is marked NSFW
    #[serde(default)]
    pub is_nsfw: bool,
    /// Creator ID
    #[serde(default)]
    pub creator_id: Option<UserId>,
    /// Creation time as sent by the API
    #[serde(default)]
    pub created_at: Option<String>,
    /// Community rules
    #[serde(default)]
    pub rules: Vec<CommunityRule>,
}

/// A community rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityRule {
    /// Rule ID
    #[serde(default)]
    pub id: Option<String>,
    /// Short name
    #[serde(default)]
    pub name: String,
    /// Longer description
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_community_deserialize() {
        let community: Community = serde_json::from_value(serde_json::json!({
            "id": "1493446837214187523",
            "name": "Rust",
            "member_count": 5000,
            "rules": [
                {"id": "r1", "name": "Be kind", "description": "No harassment"},
                {"name": "Stay on topic"}
            ]
        }))
        .unwrap();

        assert_eq!(community.name, "Rust");
        assert!(!community.is_nsfw);
        assert_eq!(community.rules.len(), 2);
        assert_eq!(community.rules[0].id.as_deref(), Some("r1"));
        assert!(community.rules[1].description.is_none());
    }

    #[test]
    fn test_community_requires_id() {
        let result: Result<Community, _> =
            serde_json::from_value(serde_json::json!({"name": "No id"}));
        assert!(result.is_err());
    }
}
