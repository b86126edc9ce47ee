use std::str::FromStr;

use samegame_core::{Coord, Coord2};

/// One line of interactive input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Click(Coord2),
    Hint,
    AttachConsole,
    DetachConsole,
    ShowScores,
    NewGame(Option<u64>),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}")]
    Unknown(String),
    #[error("Expected a number, got {0:?}")]
    BadNumber(String),
    #[error("Too many arguments for {0:?}")]
    TrailingInput(String),
}

pub const HELP: &str = "\
Commands:
  <row> <col>   remove the group at row, col
  h             play the next best move
  c             attach the console view
  x             detach the console view
  s             show the score history
  n [seed]      start a new game
  q             quit";

fn parse_number<T: FromStr>(word: &str) -> Result<T, CommandError> {
    word.parse()
        .map_err(|_| CommandError::BadNumber(word.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (&first, rest) = words.split_first().ok_or(CommandError::Empty)?;

        let command = match first.to_ascii_lowercase().as_str() {
            "h" | "hint" => Command::Hint,
            "c" | "console" => Command::AttachConsole,
            "x" | "detach" => Command::DetachConsole,
            "s" | "scores" => Command::ShowScores,
            "q" | "quit" => Command::Quit,
            "n" | "new" => match rest {
                [] => Command::NewGame(None),
                [seed] => Command::NewGame(Some(parse_number(seed)?)),
                _ => return Err(CommandError::TrailingInput(first.to_string())),
            },
            _ if first.starts_with(|c: char| c.is_ascii_digit()) => match rest {
                [col] => Command::Click((parse_number::<Coord>(first)?, parse_number(col)?)),
                [] => return Err(CommandError::BadNumber(line.trim().to_string())),
                _ => return Err(CommandError::TrailingInput(first.to_string())),
            },
            _ => return Err(CommandError::Unknown(first.to_string())),
        };

        let takes_arguments = matches!(command, Command::Click(_) | Command::NewGame(_));
        if !takes_arguments && !rest.is_empty() {
            return Err(CommandError::TrailingInput(first.to_string()));
        }
        Ok(command)
    }
}
