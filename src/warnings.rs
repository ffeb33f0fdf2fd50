//! User-facing warnings.
//!
//! Warnings are collected as values and printed by the caller, so the code
//! that detects a problem never writes to the terminal itself.

/// A warning about the collection name supplied on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Nothing was left after removing forbidden characters.
    EmptyCollectionName { raw: String },
    /// A generated name replaces the unusable one.
    GeneratedCollectionName { name: String },
}

/// Format a warning for display.
pub fn format_warning(warning: &Warning) -> String {
    match warning {
        Warning::EmptyCollectionName { .. } => {
            "Warning: collection name contains no valid characters".to_string()
        }
        Warning::GeneratedCollectionName { name } => {
            format!("Warning: using generated collection name '{}'", name)
        }
    }
}
