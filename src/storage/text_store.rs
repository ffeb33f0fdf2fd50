use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::entity::Note;
use crate::error::{JotterError, Result};

const SEPARATOR: char = ':';

/// Parse one stored line. Splits on the first colon only, so content may
/// itself contain colons. Lines without a colon yield `None`.
pub fn parse_line(line: &str) -> Option<Note> {
    line.split_once(SEPARATOR)
        .map(|(title, content)| Note::new(title, content))
}

/// Render a note as a stored line, without the trailing newline.
pub fn format_line(note: &Note) -> String {
    format!("{}{}{}", note.title(), SEPARATOR, note.content())
}

/// A collection's backing file: one `title:content` record per line.
///
/// Every operation opens the file, does its work and closes it again; no
/// handle is held between calls.
#[derive(Debug, Clone)]
pub struct NoteFile {
    path: PathBuf,
}

impl NoteFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the file exists, creating parent directories as needed.
    ///
    /// Returns `true` when the file was created by this call and `false`
    /// when it was already there.
    pub fn ensure(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| JotterError::notes_file(parent, e))?;
            }
        }

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(_) => {
                debug!(path = %self.path.display(), "created notes file");
                Ok(true)
            }
            // Someone else created it between the check and the open
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(JotterError::notes_file(&self.path, e)),
        }
    }

    /// Read every well-formed note, in file order. Malformed lines are
    /// skipped; bytes that are not valid UTF-8 become U+FFFD.
    pub fn load(&self) -> Result<Vec<Note>> {
        let bytes = fs::read(&self.path).map_err(|e| JotterError::notes_file(&self.path, e))?;
        let text = String::from_utf8_lossy(&bytes);

        let mut notes = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            match parse_line(line) {
                Some(note) => notes.push(note),
                None => debug!(line = lineno + 1, "skipping line without separator"),
            }
        }

        debug!(count = notes.len(), path = %self.path.display(), "loaded notes");
        Ok(notes)
    }

    /// Append one note as a new line.
    pub fn append(&self, note: &Note) -> Result<()> {
        let result = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", format_line(note)));

        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "append failed");
            return Err(JotterError::notes_file(&self.path, e));
        }

        debug!(title = note.title(), "appended note");
        Ok(())
    }

    /// Replace the whole file with `notes`, in order.
    pub fn rewrite_all(&self, notes: &[Note]) -> Result<()> {
        let result = fs::File::create(&self.path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            for note in notes {
                writeln!(writer, "{}", format_line(note))?;
            }
            writer.flush()
        });

        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "rewrite failed");
            return Err(JotterError::notes_file(&self.path, e));
        }

        debug!(count = notes.len(), "rewrote notes file");
        Ok(())
    }
}
