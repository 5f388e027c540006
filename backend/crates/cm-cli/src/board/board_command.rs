use crate::ContactField;

use std::str::FromStr;

/// One line typed at the `cm board` prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    Set(ContactField, String),
    Submit,
    /// 1-based row number
    Edit(usize),
    /// 1-based row number
    Delete(usize),
    Cancel,
    Refresh,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  name <value>     set the name field
  email <value>    set the email field
  number <value>   set the number field
  submit           add the contact, or save the one being edited
  edit <row>       load a row into the form
  delete <row>     delete a row
  cancel           clear the form and stop editing
  refresh          reload the list from the server
  help             show this help
  quit             leave the board";

impl FromStr for BoardCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        if let Some(field) = ContactField::parse(word) {
            return Ok(BoardCommand::Set(field, rest.to_string()));
        }

        match word {
            "submit" => Ok(BoardCommand::Submit),
            "edit" => parse_row(rest).map(BoardCommand::Edit),
            "delete" => parse_row(rest).map(BoardCommand::Delete),
            "cancel" => Ok(BoardCommand::Cancel),
            "refresh" => Ok(BoardCommand::Refresh),
            "help" | "?" => Ok(BoardCommand::Help),
            "quit" | "exit" => Ok(BoardCommand::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command '{}' (try 'help')", other)),
        }
    }
}

fn parse_row(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row),
        _ => Err(format!("expected a row number, got '{}'", s)),
    }
}
