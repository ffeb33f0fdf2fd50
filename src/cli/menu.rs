use std::io::{self, Write};
use std::str::FromStr;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Add,
    Delete,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::List),
            "2" => Ok(MenuChoice::Add),
            "3" => Ok(MenuChoice::Delete),
            "4" => Ok(MenuChoice::Exit),
            other => Err(format!("Invalid menu choice: {}", other)),
        }
    }
}

pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Choose an option:")?;
    writeln!(out, "1. Show notes")?;
    writeln!(out, "2. Add a note")?;
    writeln!(out, "3. Delete a note")?;
    writeln!(out, "4. Exit")
}
