//! Move input parsing and validation.

use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Coord;

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?\s*([0-9]+)\s*[, ]\s*([0-9]+)\s*\)?$").expect("COORD_RE regex should be valid")
});

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user requested exit")]
    UserExit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    Coordinate(Coord),
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "q" | "quit" | "exit" => return Err(InputError::UserExit),
            _ => (),
        }

        if let Some(caps) = COORD_RE.captures(input) {
            let row = caps[1].parse().map_err(|_| InputError::InvalidInput {
                input: input.to_string(),
            })?;
            let col = caps[2].parse().map_err(|_| InputError::InvalidInput {
                input: input.to_string(),
            })?;
            return Ok(MoveInput::Coordinate(Coord::new(row, col)));
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

/// Reads one move from stdin: `row, col` (parentheses optional), or
/// `q`/`quit` to leave the game.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => Err(InputError::UserExit), // EOF
        Ok(_) => input.trim().parse(),
        Err(error) => Err(InputError::IOError {
            error: error.to_string(),
        }),
    }
}
