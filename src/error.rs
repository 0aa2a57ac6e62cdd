use std::io;

use thiserror::Error;

use crate::TermInt;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("a {width}x{height} board does not fit the terminal (max {max_width}x{max_height})")]
    BoardTooLarge {
        width: TermInt,
        height: TermInt,
        max_width: TermInt,
        max_height: TermInt,
    },

    #[error("the terminal is too small to play in")]
    TerminalTooSmall,
}
