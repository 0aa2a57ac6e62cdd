use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::error::{GameError, Result};
use crate::{Coords, TermInt};

/// Command line options for a game.
#[derive(Debug, Clone, Parser)]
#[command(name = "snake", version, about = "Snake in the terminal, two cells per character")]
pub struct Config {
    /// Milliseconds between snake steps
    #[arg(long, value_name = "MS", default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Board width in cells (defaults to the terminal width)
    #[arg(long, value_name = "CELLS", value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<TermInt>,

    /// Board height in cells (defaults to twice the terminal height)
    #[arg(long, value_name = "CELLS", value_parser = clap::value_parser!(u16).range(1..))]
    pub height: Option<TermInt>,

    /// Seed for food placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Resolves the board size for a terminal of `cols` x `rows` characters.
    /// Every character holds two cells stacked vertically.
    pub fn grid_size(&self, cols: TermInt, rows: TermInt) -> Result<Coords> {
        if cols == 0 || rows == 0 {
            return Err(GameError::TerminalTooSmall);
        }

        let max_width = cols;
        let max_height = rows.saturating_mul(2);
        let width = self.width.unwrap_or(max_width);
        let height = self.height.unwrap_or(max_height);

        if width > max_width || height > max_height {
            return Err(GameError::BoardTooLarge { width, height, max_width, max_height });
        }

        Ok((width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("snake").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let cfg = parse(&[]).unwrap();
        assert_eq!(cfg.tick(), Duration::from_millis(60));
        assert!(cfg.width.is_none());
        assert!(cfg.height.is_none());
        assert!(cfg.seed.is_none());
        assert!(cfg.log_file.is_none());
    }

    #[test]
    fn parses_all_options() {
        let cfg = parse(&[
            "--tick-ms", "25", "--width", "40", "--height", "30", "--seed", "7", "--log-file", "snake.log",
        ])
        .unwrap();

        assert_eq!(cfg.tick_ms, 25);
        assert_eq!(cfg.width, Some(40));
        assert_eq!(cfg.height, Some(30));
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.log_file, Some(PathBuf::from("snake.log")));
    }

    #[test]
    fn rejects_zero_values() {
        assert!(parse(&["--tick-ms", "0"]).is_err());
        assert!(parse(&["--width", "0"]).is_err());
        assert!(parse(&["--height", "0"]).is_err());
    }

    #[test]
    fn grid_defaults_to_whole_terminal() {
        let cfg = parse(&[]).unwrap();
        assert_eq!(cfg.grid_size(80, 24).unwrap(), (80, 48));
    }

    #[test]
    fn grid_override_must_fit() {
        let cfg = parse(&["--width", "20", "--height", "49"]).unwrap();
        assert!(matches!(
            cfg.grid_size(80, 24),
            Err(GameError::BoardTooLarge { width: 20, height: 49, max_width: 80, max_height: 48 })
        ));

        let cfg = parse(&["--width", "20", "--height", "48"]).unwrap();
        assert_eq!(cfg.grid_size(80, 24).unwrap(), (20, 48));
    }

    #[test]
    fn empty_terminal_is_rejected() {
        let cfg = parse(&[]).unwrap();
        assert!(matches!(cfg.grid_size(0, 24), Err(GameError::TerminalTooSmall)));
    }
}
