//! Error types for content lookups
//!
//! Every failure a lookup can hit falls into one of three categories:
//! - **Invalid input**: a version, rule name or logical path outside what is recognized
//! - **Not found**: a well-formed identifier with nothing behind it on storage
//! - **Read failure**: content exists but could not be read or decoded
//!
//! Callers consume the store as a text provider, so errors are rendered
//! through [`TextOutcome::into_text`] rather than propagated. The typed
//! variants stay available for anyone who needs to tell "not found" apart
//! from "invalid input".
//!
//! # Example
//!
//! ```rust
//! use odoo_core::error::{ContentError, ErrorCategory, TextOutcome};
//!
//! let outcome: odoo_core::Result<String> = Err(ContentError::DocumentNotFound {
//!     path: "howtos/missing".to_string(),
//! });
//! assert_eq!(outcome.as_ref().unwrap_err().category(), ErrorCategory::NotFound);
//! assert_eq!(outcome.into_text(), "Documentation file not found: howtos/missing");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Identifier outside the recognized set
    InvalidInput,
    /// Well-formed identifier with no stored content
    NotFound,
    /// Stored content that could not be read
    ReadFailure,
}

/// Errors that can occur while resolving content
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    // ═══════════════════════════════════════════════════════════════════════
    // Invalid input
    // ═══════════════════════════════════════════════════════════════════════

    /// Version tag is not one of the supported versions
    #[error("Error: Unknown Odoo version {version}. Available: {available}")]
    InvalidVersion { version: String, available: String },

    /// Version selection rejected; the selection is left unchanged
    #[error("Invalid version. Available versions: {available}")]
    InvalidSelection { version: String, available: String },

    /// Rule name is neither a known rule set nor the `all` sentinel
    #[error("Unknown rule set. Available: {available}")]
    UnknownRule { name: String, available: String },

    /// Logical path would escape the documentation root
    #[error("Invalid documentation path: {path}")]
    InvalidPath { path: String },

    // ═══════════════════════════════════════════════════════════════════════
    // Not found
    // ═══════════════════════════════════════════════════════════════════════

    /// Version is supported but has no documentation tree on storage
    #[error("Documentation for Odoo {version} not found")]
    VersionDocsNotFound { version: String },

    /// No document at the requested logical path
    #[error("Documentation file not found: {path}")]
    DocumentNotFound { path: String },

    /// Rule name is recognized but its file is missing
    #[error("Rule file not found: {name}")]
    RuleNotFound { name: String },

    // ═══════════════════════════════════════════════════════════════════════
    // Read failure
    // ═══════════════════════════════════════════════════════════════════════

    /// Document exists but could not be read
    #[error("Error reading file: {reason}")]
    DocumentRead { path: String, reason: String },

    /// Rule file exists but could not be read
    #[error("Error reading rules: {reason}")]
    RuleRead { name: String, reason: String },

    /// Configuration file could not be loaded
    #[error("Failed to load configuration from '{path}': {reason}")]
    ConfigLoad { path: String, reason: String },
}

impl ContentError {
    /// Get the category for this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContentError::InvalidVersion { .. }
            | ContentError::InvalidSelection { .. }
            | ContentError::UnknownRule { .. }
            | ContentError::InvalidPath { .. } => ErrorCategory::InvalidInput,

            ContentError::VersionDocsNotFound { .. }
            | ContentError::DocumentNotFound { .. }
            | ContentError::RuleNotFound { .. } => ErrorCategory::NotFound,

            ContentError::DocumentRead { .. }
            | ContentError::RuleRead { .. }
            | ContentError::ConfigLoad { .. } => ErrorCategory::ReadFailure,
        }
    }

    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ContentError::InvalidVersion { .. } => "INVALID_VERSION",
            ContentError::InvalidSelection { .. } => "INVALID_SELECTION",
            ContentError::UnknownRule { .. } => "UNKNOWN_RULE",
            ContentError::InvalidPath { .. } => "INVALID_PATH",
            ContentError::VersionDocsNotFound { .. } => "VERSION_DOCS_NOT_FOUND",
            ContentError::DocumentNotFound { .. } => "DOCUMENT_NOT_FOUND",
            ContentError::RuleNotFound { .. } => "RULE_NOT_FOUND",
            ContentError::DocumentRead { .. } => "DOCUMENT_READ_ERROR",
            ContentError::RuleRead { .. } => "RULE_READ_ERROR",
            ContentError::ConfigLoad { .. } => "CONFIG_LOAD_ERROR",
        }
    }

    /// Check if the caller supplied something outside the recognized set
    pub fn is_invalid_input(&self) -> bool {
        self.category() == ErrorCategory::InvalidInput
    }
}

/// Rendering of a content outcome as the text handed back to callers
pub trait TextOutcome {
    /// Collapse success and failure into a single text payload
    fn into_text(self) -> String;
}

impl TextOutcome for Result<String> {
    fn into_text(self) -> String {
        match self {
            Ok(text) => text,
            Err(err) => err.to_string(),
        }
    }
}
