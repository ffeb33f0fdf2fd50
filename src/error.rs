use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotterError {
    #[error("Notes file error ({}): {source}", .path.display())]
    NotesFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JotterError {
    pub(crate) fn notes_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        JotterError::NotesFile {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, JotterError>;
