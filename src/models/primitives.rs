//! Identifier newtypes.
//!
//! Twitter identifiers are 64-bit integers that the API sends as strings
//! (and occasionally as bare numbers). Wrapping them keeps a tweet id from
//! being passed where a list id is expected.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Accepts `"123"` or `123`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Str(String),
    Num(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Str(s) => s,
            RawId::Num(n) => n.to_string(),
        }
    }
}

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                Self(n.to_string())
            }
        }
    };
}

id_newtype!(
    /// A tweet identifier.
    ///
    /// ```
    /// use scrapebadger::TweetId;
    ///
    /// let id = TweetId::from(1585841080431321088u64);
    /// assert_eq!(id.as_str(), "1585841080431321088");
    /// ```
    TweetId
);

id_newtype!(
    /// A user identifier (the numeric "rest id", not the handle).
    UserId
);

id_newtype!(
    /// A list identifier.
    ListId
);

id_newtype!(
    /// A community identifier.
    CommunityId
);

id_newtype!(
    /// A geo place identifier.
    PlaceId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_string_or_number() {
        let from_str: TweetId = serde_json::from_str(r#""42""#).unwrap();
        let from_num: TweetId = serde_json::from_str("42").unwrap();
        assert_eq!(from_str, from_num);
        assert_eq!(serde_json::to_string(&from_num).unwrap(), r#""42""#);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ListId::new("1234").to_string(), "1234");
    }
}
