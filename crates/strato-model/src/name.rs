use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum accepted length for a resource name, after trimming.
pub const MAX_NAME_LEN: usize = 50;

/// Validated resource identifier: trimmed, non-empty, at most 50 characters.
///
/// Two names are equal iff their trimmed strings are equal; the catalog keys
/// resources by this type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ResourceName(String);

impl ResourceName {
    /// Validate and normalize a raw name.
    ///
    /// The length limit applies to the raw input, before trimming: padding
    /// does not buy extra characters.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if raw.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Return the normalized name as a slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ResourceName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl<'de> Deserialize<'de> for ResourceName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims() {
        let name = ResourceName::parse("  web-1  ").unwrap();
        assert_eq!(name.as_str(), "web-1");
        assert_eq!(name.to_string(), "web-1");
    }

    #[test]
    fn trimmed_names_are_equal() {
        let a = ResourceName::parse("cache").unwrap();
        let b = ResourceName::parse(" cache ").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(ResourceName::parse(""), Err(ValidationError::EmptyName));
        assert_eq!(ResourceName::parse("   "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn length_boundary() {
        let fifty = "a".repeat(50);
        assert!(ResourceName::parse(&fifty).is_ok());

        let fifty_one = "a".repeat(51);
        assert_eq!(
            ResourceName::parse(&fifty_one),
            Err(ValidationError::NameTooLong)
        );
    }

    #[test]
    fn padding_counts_toward_the_length_limit() {
        // 49 name characters plus 3 spaces: 52 raw, rejected even though the
        // trimmed name would fit.
        let padded = format!("{}   ", "a".repeat(49));
        assert_eq!(
            ResourceName::parse(&padded),
            Err(ValidationError::NameTooLong)
        );

        // 47 + 3 = 50 raw characters is still within the limit.
        let snug = format!("{}   ", "a".repeat(47));
        assert_eq!(ResourceName::parse(&snug).unwrap().as_str(), "a".repeat(47));
    }

    #[test]
    fn serializes_as_plain_string() {
        let name = ResourceName::parse("db-main").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"db-main\"");
        let back: ResourceName = serde_json::from_str("\"db-main\"").unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn deserialize_validates() {
        assert!(serde_json::from_str::<ResourceName>("\"   \"").is_err());
    }
}
