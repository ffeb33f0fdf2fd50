use std::env;
use std::path::PathBuf;

/// Name of the directory, relative to the working directory, that holds
/// every collection file.
pub const NOTES_DIR: &str = "notes";

/// Suffix appended to a collection name to form its file name.
pub const FILE_SUFFIX: &str = "_notes.txt";

/// Where collections live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory containing the collection files
    pub notes_dir: PathBuf,
    /// Appended to the collection name, e.g. "work" -> "work_notes.txt"
    pub file_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_dir: PathBuf::from(NOTES_DIR),
            file_suffix: FILE_SUFFIX.to_string(),
        }
    }
}

impl Config {
    /// Config rooted at the current working directory.
    pub fn from_cwd() -> Self {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            notes_dir: cwd.join(NOTES_DIR),
            ..Self::default()
        }
    }

    /// Path of the backing file for a (sanitized) collection name.
    pub fn notes_path(&self, collection: &str) -> PathBuf {
        self.notes_dir.join(format!("{}{}", collection, self.file_suffix))
    }
}
