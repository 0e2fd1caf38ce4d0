use std::str::FromStr;

use mineboard_core::{Coord, Coord2};
use thiserror::Error;

pub const USAGE: &str = "commands: r X Y (reveal), f X Y (flag), n (new game), q (quit)";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    NewGame,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}")]
    Unknown(String),
    #[error("Expected `{0} X Y`")]
    MissingCoords(char),
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(ParseCommandError::Empty);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_coords('r', &mut words)?),
            "f" | "flag" => Self::Flag(parse_coords('f', &mut words)?),
            "n" | "new" => Self::NewGame,
            "q" | "quit" => Self::Quit,
            _ => return Err(ParseCommandError::Unknown(name.to_owned())),
        };

        match words.next() {
            Some(extra) => Err(ParseCommandError::Unknown(extra.to_owned())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(
    name: char,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Coord2, ParseCommandError> {
    let mut next_coord = || -> Result<Coord, ParseCommandError> {
        let word = words.next().ok_or(ParseCommandError::MissingCoords(name))?;
        word.parse()
            .map_err(|_| ParseCommandError::InvalidCoord(word.to_owned()))
    };
    let x = next_coord()?;
    let y = next_coord()?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_intents() {
        assert_eq!("r 3 4".parse::<Command>(), Ok(Command::Reveal((3, 4))));
        assert_eq!("  flag 0 12 ".parse::<Command>(), Ok(Command::Flag((0, 12))));
        assert_eq!("N".parse::<Command>(), Ok(Command::NewGame));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "r 3".parse::<Command>(),
            Err(ParseCommandError::MissingCoords('r'))
        );
        assert_eq!(
            "f 3 -1".parse::<Command>(),
            Err(ParseCommandError::InvalidCoord("-1".to_owned()))
        );
        assert_eq!(
            "f 3 300".parse::<Command>(),
            Err(ParseCommandError::InvalidCoord("300".to_owned()))
        );
        assert_eq!(
            "x 1 1".parse::<Command>(),
            Err(ParseCommandError::Unknown("x".to_owned()))
        );
        assert_eq!(
            "q now".parse::<Command>(),
            Err(ParseCommandError::Unknown("now".to_owned()))
        );
    }
}
