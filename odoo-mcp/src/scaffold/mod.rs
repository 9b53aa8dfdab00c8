//! Source scaffolding for Odoo addons
//!
//! Pure text generators: manifests, model classes, view XML and access
//! rules. They only see the selected version they are handed; nothing in
//! here reads storage.

pub mod guidelines;
pub mod model;
pub mod module;
pub mod security;
pub mod view;

use thiserror::Error;

pub use guidelines::{development_guidelines, strip_frontmatter, GuidelineContext};
pub use model::{FieldSpec, ModelSpec};
pub use module::ModuleSpec;
pub use security::SecuritySpec;
pub use view::{ViewSpec, ViewType};

/// Rule document every generated guide links to
pub const ODOO_RULES_URI: &str = "odoo://rules/odoo-development";

/// Input the generators cannot turn into code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldError {
    #[error("Unsupported view type: {0}. Supported types: tree, form, search, kanban")]
    UnsupportedViewType(String),

    #[error("Field '{field}' requires {option}")]
    MissingFieldOption { field: String, option: &'static str },
}

/// Render a Python list literal of strings
pub(crate) fn python_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|i| format!("'{}'", i)).collect();
    format!("[{}]", quoted.join(", "))
}

pub(crate) fn python_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
///
/// `sale_order` -> `Sale_Order`, `partner id` -> `Partner Id`.
pub(crate) fn title_words(text: &str) -> String {
    let mut previous_alphabetic = false;
    text.chars()
        .flat_map(|c| {
            let mapped: Vec<char> = if previous_alphabetic {
                c.to_lowercase().collect()
            } else {
                c.to_uppercase().collect()
            };
            previous_alphabetic = c.is_alphabetic();
            mapped
        })
        .collect()
}

/// Uppercase the first character and lowercase the rest
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
