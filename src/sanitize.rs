//! Collection name sanitizing.

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::warnings::Warning;

/// Characters that are not allowed in file names on common platforms.
const FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Format of the generated fallback name, e.g. `261017_093000`.
const FALLBACK_FORMAT: &str = "%y%m%d_%H%M%S";

/// Result of sanitizing a collection name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedName {
    pub name: String,
    pub warnings: Vec<Warning>,
}

fn is_forbidden(c: char) -> bool {
    FORBIDDEN.contains(&c) || ('\u{0}'..='\u{1f}').contains(&c)
}

/// Strip forbidden characters and surrounding whitespace. Never fails: an
/// empty result is replaced with a name derived from the local time.
pub fn sanitize_collection_name(raw: &str) -> SanitizedName {
    sanitize_collection_name_at(raw, Local::now().naive_local())
}

/// Same as [`sanitize_collection_name`] with an explicit clock.
pub fn sanitize_collection_name_at(raw: &str, now: NaiveDateTime) -> SanitizedName {
    let cleaned: String = raw.chars().filter(|c| !is_forbidden(*c)).collect();
    let cleaned = cleaned.trim();

    if !cleaned.is_empty() {
        return SanitizedName {
            name: cleaned.to_string(),
            warnings: Vec::new(),
        };
    }

    let name = now.format(FALLBACK_FORMAT).to_string();
    debug!(raw, fallback = %name, "collection name unusable");

    SanitizedName {
        warnings: vec![
            Warning::EmptyCollectionName {
                raw: raw.to_string(),
            },
            Warning::GeneratedCollectionName { name: name.clone() },
        ],
        name,
    }
}
