use std::ffi::OsString;
use std::io::{self, Write};

use clap::Parser;

const USAGE: &str = "\
How to use this app:
jotter [COLLECTION]

Options:
-h, --help       Show this message
[COLLECTION]     Name of your notes collection";

#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(about = "Keep named collections of one-line notes")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Show this message
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Name of your notes collection
    #[arg(value_name = "COLLECTION")]
    pub collection: Vec<String>,
}

/// What the command line asks the program to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print usage and stop without touching any file.
    Usage,
    /// Open the named (raw, unsanitized) collection.
    Open(String),
}

impl Cli {
    /// Interpret a full argument list, program name included. Anything but
    /// exactly one argument, and any parse error, means
    /// [`Invocation::Usage`].
    pub fn invocation<I, T>(args: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        // Counted before clap, which would swallow a `--` separator
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != 2 {
            return Invocation::Usage;
        }

        match Cli::try_parse_from(args) {
            Ok(cli) => cli.into_invocation(),
            Err(_) => Invocation::Usage,
        }
    }

    pub fn into_invocation(self) -> Invocation {
        match (self.help, <[String; 1]>::try_from(self.collection)) {
            (false, Ok([name])) => Invocation::Open(name),
            _ => Invocation::Usage,
        }
    }
}

pub fn print_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", USAGE)
}
