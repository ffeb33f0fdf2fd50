// src/entity/note.rs

/// Placeholder title for notes created without one.
pub const UNTITLED: &str = "(untitled)";

/// A single title + content record. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    title: String,
    content: String,
}

impl Note {
    /// Build a note; an empty title becomes [`UNTITLED`].
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            title: if title.is_empty() {
                UNTITLED.to_string()
            } else {
                title
            },
            content: content.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
