//! Supported Odoo versions
//!
//! The version set is closed and known at compile time. Anything that takes
//! a version from the outside parses it into [`OdooVersion`] first, so an
//! unsupported tag is rejected before any storage is touched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// A supported Odoo release
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OdooVersion {
    #[serde(rename = "17.0")]
    V17,
    #[serde(rename = "18.0")]
    V18,
    #[serde(rename = "19.0")]
    V19,
}

impl OdooVersion {
    /// All supported versions, oldest first
    pub const ALL: [OdooVersion; 3] = [OdooVersion::V17, OdooVersion::V18, OdooVersion::V19];

    /// The newest supported version
    pub fn latest() -> Self {
        OdooVersion::V19
    }

    /// Version tag as used in storage paths and URIs
    pub fn as_str(&self) -> &'static str {
        match self {
            OdooVersion::V17 => "17.0",
            OdooVersion::V18 => "18.0",
            OdooVersion::V19 => "19.0",
        }
    }

    /// Comma separated list of supported tags, for error messages
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parse a tag, returning `None` for anything outside the supported set
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == tag)
    }
}

impl Default for OdooVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for OdooVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OdooVersion {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ContentError::InvalidVersion {
            version: s.to_string(),
            available: Self::supported_list(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported() {
        assert_eq!("17.0".parse::<OdooVersion>().unwrap(), OdooVersion::V17);
        assert_eq!("18.0".parse::<OdooVersion>().unwrap(), OdooVersion::V18);
        assert_eq!("19.0".parse::<OdooVersion>().unwrap(), OdooVersion::V19);
    }

    #[test]
    fn test_parse_unsupported() {
        let err = "16.0".parse::<OdooVersion>().unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("17.0, 18.0, 19.0"));

        assert!(OdooVersion::parse("").is_none());
        assert!(OdooVersion::parse("19").is_none());
    }

    #[test]
    fn test_latest_is_default() {
        assert_eq!(OdooVersion::default(), OdooVersion::V19);
        assert_eq!(OdooVersion::latest().to_string(), "19.0");
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&OdooVersion::V18).unwrap();
        assert_eq!(json, "\"18.0\"");
        let parsed: OdooVersion = serde_json::from_str("\"17.0\"").unwrap();
        assert_eq!(parsed, OdooVersion::V17);
    }
}
