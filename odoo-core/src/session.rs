//! Version selection for the running process
//!
//! A single cell holding the version used whenever a caller does not name
//! one explicitly. It is owned by whoever builds the service and shared by
//! `Arc`; nothing reaches it through a global.

use std::sync::{PoisonError, RwLock};

use crate::error::{ContentError, Result};
use crate::version::OdooVersion;

/// The currently selected Odoo version
#[derive(Debug)]
pub struct VersionSession {
    selected: RwLock<OdooVersion>,
}

impl VersionSession {
    /// Create a session starting at the newest supported version
    pub fn new() -> Self {
        Self::starting_at(OdooVersion::latest())
    }

    /// Create a session starting at a specific version
    pub fn starting_at(version: OdooVersion) -> Self {
        Self {
            selected: RwLock::new(version),
        }
    }

    /// Select a new version by tag.
    ///
    /// An unsupported tag is rejected and the current selection is kept.
    pub fn select(&self, tag: &str) -> Result<OdooVersion> {
        let version = OdooVersion::parse(tag).ok_or_else(|| ContentError::InvalidSelection {
            version: tag.to_string(),
            available: OdooVersion::supported_list(),
        })?;

        self.set(version);
        Ok(version)
    }

    /// Select a version that is already known to be supported
    pub fn set(&self, version: OdooVersion) {
        // The cell holds a Copy value, so a poisoned lock still holds a whole one.
        let mut selected = self.selected.write().unwrap_or_else(PoisonError::into_inner);
        let previous = *selected;
        *selected = version;
        tracing::info!(from = %previous, to = %version, "Odoo version selected");
    }

    /// Get the selected version
    pub fn current(&self) -> OdooVersion {
        *self.selected.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Select a version and render the confirmation text
    pub fn select_version(&self, tag: &str) -> Result<String> {
        let version = self.select(tag)?;
        Ok(format!("Odoo version set to {}", version))
    }

    /// Render the current selection
    pub fn describe(&self) -> String {
        format!("Current Odoo development version: {}", self.current())
    }
}

impl Default for VersionSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_latest() {
        let session = VersionSession::new();
        assert_eq!(session.current(), OdooVersion::V19);
    }

    #[test]
    fn test_select_then_read() {
        let session = VersionSession::new();
        assert_eq!(session.select("18.0").unwrap(), OdooVersion::V18);
        assert_eq!(session.current(), OdooVersion::V18);
    }

    #[test]
    fn test_invalid_select_keeps_previous() {
        let session = VersionSession::starting_at(OdooVersion::V17);
        let err = session.select("99.0").unwrap_err();

        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Invalid version. Available versions: 17.0, 18.0, 19.0");
        assert_eq!(session.current(), OdooVersion::V17);
    }

    #[test]
    fn test_text_rendering() {
        let session = VersionSession::new();
        assert_eq!(session.select_version("17.0").unwrap(), "Odoo version set to 17.0");
        assert_eq!(session.describe(), "Current Odoo development version: 17.0");
    }
}
