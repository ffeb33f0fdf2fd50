use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::entity::Note;
use crate::error::Result;
use crate::storage::NoteFile;
use crate::store::NoteStore;

use super::menu::{print_menu, MenuChoice};

/// Where the main loop stands after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// One interactive run against a single collection.
///
/// Owns the in-memory notes, the backing file and both ends of the console.
/// The store and the file are kept in lockstep by every handler.
pub struct Session<R, W> {
    store: NoteStore,
    file: NoteFile,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Load the collection from `file`. A read failure is reported and the
    /// session starts empty.
    pub fn open(file: NoteFile, input: R, mut output: W) -> Result<Self> {
        let store = match file.load() {
            Ok(notes) => NoteStore::from(notes),
            Err(e) => {
                warn!(error = %e, "could not load notes");
                writeln!(output, "Couldn't read the notes file.")?;
                NoteStore::new()
            }
        };

        Ok(Self {
            store,
            file,
            input,
            output,
        })
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn file(&self) -> &NoteFile {
        &self.file
    }

    /// Hand back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the menu and dispatch until the user exits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        let mut state = SessionState::Running;
        while state == SessionState::Running {
            print_menu(&mut self.output)?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    debug!("end of input at menu");
                    self.handle_exit()?;
                    break;
                }
            };

            state = match line.parse::<MenuChoice>() {
                Ok(MenuChoice::List) => self.handle_list()?,
                Ok(MenuChoice::Add) => self.handle_add()?,
                Ok(MenuChoice::Delete) => self.handle_delete()?,
                Ok(MenuChoice::Exit) => self.handle_exit()?,
                Err(_) => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    SessionState::Running
                }
            };
        }
        Ok(())
    }

    pub fn handle_list(&mut self) -> Result<SessionState> {
        self.print_notes()?;
        Ok(SessionState::Running)
    }

    pub fn handle_add(&mut self) -> Result<SessionState> {
        let title = match self.prompt("Enter a title for your note: ")? {
            Some(title) => title,
            None => return self.handle_exit(),
        };
        let content = match self.prompt("Enter your note: ")? {
            Some(content) => content,
            None => return self.handle_exit(),
        };

        if content.is_empty() {
            writeln!(self.output, "Error: Note cannot be empty.")?;
            writeln!(self.output)?;
            return Ok(SessionState::Running);
        }

        let note = Note::new(title, content);

        // Only keep the note in memory once it is on disk
        if let Err(e) = self.file.append(&note) {
            debug!(error = %e, "add aborted");
            writeln!(self.output, "Error saving note to file.")?;
            return Ok(SessionState::Running);
        }

        writeln!(self.output, "Note added: {}", note.title())?;
        self.store.push(note);
        Ok(SessionState::Running)
    }

    pub fn handle_delete(&mut self) -> Result<SessionState> {
        if self.store.is_empty() {
            writeln!(self.output, "No notes to delete.")?;
            return Ok(SessionState::Running);
        }

        self.print_notes()?;
        let answer =
            match self.prompt("Enter the number of the note to delete (or 0 to cancel): ")? {
                Some(answer) => answer,
                None => return self.handle_exit(),
            };

        let number = match answer.parse::<i64>() {
            Ok(number) => number,
            Err(_) => {
                writeln!(self.output, "Invalid note number.")?;
                return Ok(SessionState::Running);
            }
        };

        if number == 0 {
            writeln!(self.output, "Delete cancelled.")?;
            return Ok(SessionState::Running);
        }

        // Negatives fail the conversion, out of range fails the removal
        let removed = usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.store.remove(index).map(|note| (index, note)));
        let (index, removed) = match removed {
            Some(found) => found,
            None => {
                writeln!(self.output, "Invalid note number.")?;
                return Ok(SessionState::Running);
            }
        };

        // The file still holds the note, so the store must too
        if let Err(e) = self.file.rewrite_all(self.store.as_slice()) {
            debug!(error = %e, "delete rolled back");
            self.store.insert(index, removed);
            writeln!(self.output, "Error saving notes to file.")?;
            return Ok(SessionState::Running);
        }

        writeln!(self.output, "Deleted note: {}", removed.title())?;
        Ok(SessionState::Running)
    }

    pub fn handle_exit(&mut self) -> Result<SessionState> {
        writeln!(self.output, "Bye! See you next time.")?;
        self.output.flush()?;
        Ok(SessionState::Terminated)
    }

    fn print_notes(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "No notes available.")?;
            return Ok(());
        }

        writeln!(self.output, "Your notes:")?;
        writeln!(self.output)?;
        for (i, note) in self.store.iter().enumerate() {
            writeln!(
                self.output,
                "{:03} - {}: {}",
                i + 1,
                note.title(),
                note.content()
            )?;
        }
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next trimmed input line, or `None` at end of input. Invalid UTF-8 is
    /// replaced rather than rejected.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}
