//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw strings the backend sends, so they can be used
//! directly in wire types without conversion overhead.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::SdkError;

// ─── MobileNumber ────────────────────────────────────────────────────────────

/// A validated 10-digit Indian mobile number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Parse and validate. Accepts exactly 10 ASCII digits.
    pub fn parse(s: &str) -> Result<Self, SdkError> {
        let trimmed = s.trim();
        if trimmed.len() == 10 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(SdkError::Validation(
                "please enter a valid 10-digit mobile number".to_string(),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MobileNumber {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MobileNumber::parse(s)
    }
}

impl Serialize for MobileNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MobileNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        MobileNumber::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ─── OperatorCode ────────────────────────────────────────────────────────────

/// Newtype for operator codes (e.g. `"AIRTEL"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperatorCode(String);

impl OperatorCode {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OperatorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OperatorCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for OperatorCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for OperatorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OperatorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(OperatorCode(String::deserialize(deserializer)?))
    }
}

// ─── CircleCode ──────────────────────────────────────────────────────────────

/// Newtype for telecom circle codes (e.g. `"KA"` for Karnataka).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CircleCode(String);

impl CircleCode {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CircleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CircleCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CircleCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for CircleCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CircleCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(CircleCode(String::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_number_accepts_ten_digits() {
        let m = MobileNumber::parse("9876543210").unwrap();
        assert_eq!(m.as_str(), "9876543210");
    }

    #[test]
    fn mobile_number_trims_whitespace() {
        let m = MobileNumber::parse(" 9876543210 ").unwrap();
        assert_eq!(m.as_str(), "9876543210");
    }

    #[test]
    fn mobile_number_rejects_short_and_alpha() {
        assert!(MobileNumber::parse("98765").is_err());
        assert!(MobileNumber::parse("987654321x").is_err());
        assert!(MobileNumber::parse("").is_err());
    }

    #[test]
    fn operator_code_serializes_as_plain_string() {
        let code = OperatorCode::from("AIRTEL");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"AIRTEL\"");
    }
}
