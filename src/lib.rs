pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod sanitize;
pub mod storage;
pub mod store;
pub mod warnings;

pub use config::Config;
pub use entity::Note;
pub use error::{JotterError, Result};
pub use storage::NoteFile;
pub use store::NoteStore;
