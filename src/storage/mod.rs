mod text_store;

pub use text_store::{format_line, parse_line, NoteFile};
