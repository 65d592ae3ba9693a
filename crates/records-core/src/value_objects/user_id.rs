//! User ID - system-assigned unsigned 32-bit identifier
//!
//! Zero is reserved for "unset": a record that has not been persisted yet.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a stored user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UserId(u32);

impl UserId {
    /// Create a new UserId from a raw u32 value
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner u32 value
    #[inline]
    pub const fn into_inner(self) -> u32 {
        self.0
    }

    /// Check if the id is zero (unset)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, UserIdParseError> {
        s.trim()
            .parse::<u32>()
            .map(UserId)
            .map_err(|_| UserIdParseError::InvalidFormat)
    }
}

/// Error when parsing a UserId from string or converting from a wider integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserIdParseError {
    #[error("invalid user id format")]
    InvalidFormat,

    #[error("user id out of range: {0}")]
    OutOfRange(i64),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<UserId> for u32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        i64::from(id.0)
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserIdParseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(UserId)
            .map_err(|_| UserIdParseError::OutOfRange(value))
    }
}

impl std::str::FromStr for UserId {
    type Err = UserIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::parse(s)
    }
}

impl Serialize for UserId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}

// Deserialize from string or number (path params arrive as strings)
impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct UserIdVisitor;

        impl Visitor<'_> for UserIdVisitor {
            type Value = UserId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or unsigned integer representing a user id")
            }

            fn visit_u64<E>(self, value: u64) -> Result<UserId, E>
            where
                E: de::Error,
            {
                u32::try_from(value)
                    .map(UserId)
                    .map_err(|_| de::Error::custom("user id out of range"))
            }

            fn visit_i64<E>(self, value: i64) -> Result<UserId, E>
            where
                E: de::Error,
            {
                UserId::try_from(value).map_err(de::Error::custom)
            }

            fn visit_str<E>(self, value: &str) -> Result<UserId, E>
            where
                E: de::Error,
            {
                UserId::parse(value).map_err(|_| de::Error::custom("invalid user id string"))
            }
        }

        deserializer.deserialize_any(UserIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_unset() {
        assert!(UserId::default().is_zero());
        assert!(!UserId::new(7).is_zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!(UserId::parse("42").unwrap(), UserId::new(42));
        assert_eq!(UserId::parse(" 42 ").unwrap(), UserId::new(42));
        assert_eq!(UserId::parse("-1"), Err(UserIdParseError::InvalidFormat));
        assert_eq!(UserId::parse("abc"), Err(UserIdParseError::InvalidFormat));
    }

    #[test]
    fn test_try_from_i64() {
        assert_eq!(UserId::try_from(5_i64).unwrap(), UserId::new(5));
        assert_eq!(
            UserId::try_from(i64::from(u32::MAX) + 1),
            Err(UserIdParseError::OutOfRange(i64::from(u32::MAX) + 1))
        );
        assert!(UserId::try_from(-3_i64).is_err());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&UserId::new(9)).unwrap();
        assert_eq!(json, "9");

        let from_number: UserId = serde_json::from_str("9").unwrap();
        let from_string: UserId = serde_json::from_str("\"9\"").unwrap();
        assert_eq!(from_number, from_string);
        assert!(serde_json::from_str::<UserId>("-9").is_err());
    }
}
