//! Type-safe identifiers for secret roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, VibsdkError};

/// A validated secret role label.
///
/// Secret names follow the environment-variable convention used in
/// deployment configuration:
/// - Start with an ASCII uppercase letter
/// - Contain only ASCII uppercase letters, digits, and underscores
///
/// # Example
///
/// ```
/// use vibsdk_types::SecretName;
///
/// let name = SecretName::new("WEBHOOK_SECRET").unwrap();
/// assert_eq!(name.as_str(), "WEBHOOK_SECRET");
///
/// // Invalid names are rejected
/// assert!(SecretName::new("webhook_secret").is_err());
/// assert!(SecretName::new("1SECRET").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretName(String);

impl SecretName {
    /// Create a new validated secret name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name doesn't meet validation requirements.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref();
        if !Self::is_valid(name) {
            return Err(VibsdkError::Validation(format!(
                "Invalid secret name '{}': must contain only uppercase letters, digits, and \
                underscores, and must start with an uppercase letter",
                name
            )));
        }
        Ok(Self(name.to_string()))
    }

    /// Check if a name is valid without allocating.
    pub fn is_valid(name: &str) -> bool {
        let mut chars = name.chars();

        let Some(first) = chars.next() else {
            return false;
        };

        // Must start with an uppercase letter
        if !first.is_ascii_uppercase() {
            return false;
        }

        // All characters must be uppercase, digits, or underscores
        chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecretName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SecretName {
    type Err = VibsdkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_name_validation() {
        assert!(SecretName::new("JWT_SECRET").is_ok());
        assert!(SecretName::new("WEBHOOK_SECRET").is_ok());
        assert!(SecretName::new("SECRETS_ENCRYPTION_KEY").is_ok());
        assert!(SecretName::new("KEY2").is_ok());

        assert!(SecretName::new("jwt_secret").is_err());
        assert!(SecretName::new("1SECRET").is_err());
        assert!(SecretName::new("_SECRET").is_err());
        assert!(SecretName::new("JWT-SECRET").is_err());
        assert!(SecretName::new("").is_err());
    }

    #[test]
    fn test_secret_name_display() {
        let name = SecretName::new("JWT_SECRET").unwrap();
        assert_eq!(name.to_string(), "JWT_SECRET");
    }

    #[test]
    fn test_secret_name_from_str() {
        let name: SecretName = "WEBHOOK_SECRET".parse().unwrap();
        assert_eq!(name.as_str(), "WEBHOOK_SECRET");

        let err = "not valid".parse::<SecretName>();
        assert!(err.is_err());
    }
}
