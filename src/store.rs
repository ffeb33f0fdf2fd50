//! In-memory note store for the active collection.
//!
//! Notes keep insertion order for the whole session. Positions are 0-based
//! here; the menu shows them 1-based.

use std::slice;

use crate::entity::Note;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Append a note at the end.
    pub fn push(&mut self, note: Note) {
        self.notes.push(note);
    }

    /// Remove the note at a 0-based position, shifting later notes down.
    /// Returns `None` when the position is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Note> {
        if index < self.notes.len() {
            Some(self.notes.remove(index))
        } else {
            None
        }
    }

    /// Put a note back at a 0-based position, shifting later notes up.
    /// Positions past the end append.
    pub fn insert(&mut self, index: usize, note: Note) {
        let index = index.min(self.notes.len());
        self.notes.insert(index, note);
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }
}

impl From<Vec<Note>> for NoteStore {
    fn from(notes: Vec<Note>) -> Self {
        Self { notes }
    }
}

impl<'a> IntoIterator for &'a NoteStore {
    type Item = &'a Note;
    type IntoIter = slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
