//! Validation mode - selects which field rules apply to a user input

use serde::{Deserialize, Serialize};
use std::fmt;

/// The action a user input is being validated for
///
/// Parsing is case-insensitive; an unrecognized action falls back to `Create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    #[default]
    Create,
    Update,
    Login,
}

impl ValidationMode {
    /// Resolve an action name such as `"update"` or `"LOGIN"`
    pub fn from_action(action: &str) -> Self {
        match action.trim().to_lowercase().as_str() {
            "update" => Self::Update,
            "login" => Self::Login,
            _ => Self::Create,
        }
    }

    /// Whether the nickname must be present in this mode
    #[inline]
    pub fn requires_nickname(self) -> bool {
        !matches!(self, Self::Login)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Login => "login",
        }
    }
}

impl From<&str> for ValidationMode {
    fn from(action: &str) -> Self {
        Self::from_action(action)
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_action() {
        assert_eq!(ValidationMode::from_action("update"), ValidationMode::Update);
        assert_eq!(ValidationMode::from_action("UPDATE"), ValidationMode::Update);
        assert_eq!(ValidationMode::from_action("Login"), ValidationMode::Login);
        assert_eq!(ValidationMode::from_action("create"), ValidationMode::Create);
        assert_eq!(ValidationMode::from_action(""), ValidationMode::Create);
        assert_eq!(ValidationMode::from_action("whatever"), ValidationMode::Create);
    }

    #[test]
    fn test_requires_nickname() {
        assert!(ValidationMode::Create.requires_nickname());
        assert!(ValidationMode::Update.requires_nickname());
        assert!(!ValidationMode::Login.requires_nickname());
    }
}
