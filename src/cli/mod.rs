mod commands;
mod handlers;
mod menu;

use std::ffi::OsString;
use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Result;
use crate::sanitize::sanitize_collection_name;
use crate::storage::NoteFile;
use crate::warnings::format_warning;

pub use commands::{print_usage, Cli, Invocation};
pub use handlers::{Session, SessionState};
pub use menu::{print_menu, MenuChoice};

/// Run the whole program: parse `args`, prepare the collection file under
/// `config`, then hand over to the interactive session.
///
/// Warnings about the collection name go to stderr; everything else is
/// written to `output`.
pub fn run<I, T, R, W>(args: I, config: &Config, input: R, mut output: W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: BufRead,
    W: Write,
{
    let raw = match Cli::invocation(args) {
        Invocation::Open(raw) => raw,
        Invocation::Usage => {
            print_usage(&mut output)?;
            return Ok(());
        }
    };

    let sanitized = sanitize_collection_name(&raw);
    for warning in &sanitized.warnings {
        eprintln!("{}", format_warning(warning));
    }
    let collection = sanitized.name;

    writeln!(output, "Welcome to the Notes App!")?;
    writeln!(output, "Collection: {}", collection)?;

    let file = NoteFile::new(config.notes_path(&collection));
    match file.ensure() {
        Ok(true) => writeln!(output, "Notes file created.")?,
        Ok(false) => debug!(path = %file.path().display(), "using existing notes file"),
        Err(e) => {
            warn!(error = %e, "could not create notes file");
            writeln!(output, "Error creating notes file.")?;
            writeln!(output, "ERROR: Unable to initialize notes file.")?;
            return Ok(());
        }
    }

    let mut session = Session::open(file, input, output)?;
    session.run()
}
