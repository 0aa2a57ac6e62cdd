mod board;
mod config;
mod error;
mod game;
mod input;
mod logging;
mod snake;
mod state;
mod term;

use std::process::exit;

use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::config::Config;
use crate::error::Result;
use crate::game::SnakeGame;
use crate::state::GameState;
use crate::term::TermManager;

pub type TermInt = u16;
pub type Coords = (u16, u16);

fn main() {
    let config = Config::parse();

    // The terminal is restored when the game is dropped inside run(), so the
    // error lands on the normal screen.
    if let Err(e) = run(&config) {
        eprintln!("snake: {}", e);
        exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    if let Some(path) = &config.log_file {
        logging::init_file_logger(path)?;
    }

    let mut term = TermManager::setup()?;
    let (cols, rows) = term.get_terminal_size();
    let (width, height) = config.grid_size(cols, rows)?;
    term.fit_board(width, height);

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("starting a {}x{} game, tick {:?}, seed {:?}", width, height, config.tick(), config.seed);

    let mut game = SnakeGame::new(term, GameState::new(width, height, rng), config.tick());
    if game.show_intro()? {
        game.play()?;
    }

    Ok(())
}
