//! # Odoo Core
//!
//! Versioned Odoo documentation, development rule documents and the
//! process-wide version selection used by the scaffolding tools.
//!
//! - **Content Store**: documentation tree per version plus a flat set of
//!   rule documents; enumerate, index, fetch and search
//! - **Version Session**: the selected version, defaulting to the newest one
//!
//! Lookups never fail loudly. Each operation returns a [`Result`] whose
//! error side is a categorized [`ContentError`]; callers that serve text
//! collapse it with [`TextOutcome::into_text`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use odoo_core::{ContentStore, StoreConfig, TextOutcome};
//!
//! let store = ContentStore::new(
//!     StoreConfig::builder()
//!         .docs_root("./docs")
//!         .rules_root("./rules")
//!         .build(),
//! );
//!
//! store.session().select("18.0").unwrap();
//! println!("{}", store.get_index("18.0").into_text());
//! println!("{}", store.get_document("18.0", "howtos/backend").into_text());
//! println!("{}", store.search("many2one", None));
//! ```

pub mod config;
pub mod error;
pub mod session;
pub mod store;
pub mod version;

pub use config::{SearchLimits, StoreConfig, StoreConfigBuilder};
pub use error::{ContentError, ErrorCategory, Result, TextOutcome};
pub use session::VersionSession;
pub use store::{
    ContentStore, DocumentEntry, DocumentStorage, FileStorage, MatchContext, RuleSet,
    SearchHit, SearchReport,
};
pub use version::OdooVersion;
