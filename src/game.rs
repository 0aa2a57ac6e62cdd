use std::{thread::sleep, time::{Duration, Instant}};

use crate::Coords;
use crate::error::Result;
use crate::input::{command_for, Command};
use crate::state::{GameState, StepOutcome};
use crate::term::TermManager;

use crossterm::event::KeyEvent;
use log::{debug, info};

pub struct SnakeGame {
    term: TermManager,
    state: GameState,
    tick: Duration,
}

impl SnakeGame {
    pub fn new(term: TermManager, state: GameState, tick: Duration) -> Self {
        SnakeGame { term, state, tick }
    }

    /// Shows the controls and waits for a key. Returns false if the player
    /// chose to quit instead.
    pub fn show_intro(&mut self) -> Result<bool> {
        self.draw_all()?;
        self.term.show_banner(self.state.board(), &[
            "Arrow keys or WASD to move",
            "P or Esc to pause",
            "Q or CTRL+C to quit",
            "",
            "Press any key to begin",
        ])?;

        let key = self.term.read_key_blocking()?;
        if is_quit_key(&key) {
            info!("quit from the intro screen");
            return Ok(false);
        }

        self.term.hide_banner(self.state.board())?;
        self.draw_all()?;
        Ok(true)
    }

    /// Runs until the snake crashes, the board is full or the player quits.
    pub fn play(&mut self) -> Result<()> {
        loop {
            let frame_start = Instant::now();

            for key_ev in self.term.read_key_events_queue()? {
                match command_for(&key_ev) {
                    Some(Command::Turn(dir)) => self.state.queue_turn(dir),
                    Some(Command::Pause) => {
                        if !self.pause()? {
                            return Ok(());
                        }
                    }
                    Some(Command::Quit) => {
                        info!("quit with score {}", self.state.score());
                        return Ok(());
                    }
                    None => {}
                }
            }

            let outcome = self.state.step();
            self.render_step(&outcome)?;

            if outcome.is_final() {
                return self.game_over(&outcome);
            }

            sleep(self.tick.saturating_sub(frame_start.elapsed()));
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    /// Blocks until a key is pressed. Returns false if that key was a quit key.
    fn pause(&mut self) -> Result<bool> {
        debug!("paused");
        self.term.show_banner(self.state.board(), &["Game Paused", "(Press any key to resume)"])?;

        let key = self.term.read_key_blocking()?;
        if is_quit_key(&key) {
            info!("quit while paused with score {}", self.state.score());
            return Ok(false);
        }

        self.term.hide_banner(self.state.board())?;
        self.term.draw_score(self.state.score())?;
        self.term.flush()?;
        debug!("resumed");
        Ok(true)
    }

    fn game_over(&mut self, outcome: &StepOutcome) -> Result<()> {
        let title = match *outcome {
            StepOutcome::Crashed { at } => {
                let body: Vec<Coords> = self.state.snake().body().copied().collect();
                self.term.draw_dead_snake(self.state.board(), &body)?;
                info!("crashed into itself at {:?}, length {}", at, body.len());
                "Game Over!"
            }
            _ => "You Win!",
        };
        let score = format!("Score: {}", self.state.score());
        info!("{} {}", title, score);

        self.term.show_banner(self.state.board(), &[title, score.as_str(), "(Press any key to exit)"])?;
        self.term.read_key_blocking()?;
        Ok(())
    }

    fn render_step(&mut self, outcome: &StepOutcome) -> Result<()> {
        let board = self.state.board();

        match *outcome {
            StepOutcome::Moved { new_head, old_tail, new_food } => {
                self.term.draw_cell(board, new_head)?;
                for pos in old_tail.into_iter().chain(new_food) {
                    self.term.draw_cell(board, pos)?;
                }
            }
            StepOutcome::Won { new_head } => self.term.draw_cell(board, new_head)?,
            StepOutcome::Crashed { .. } => {}
        }

        self.term.draw_score(self.state.score())?;
        self.term.flush()
    }

    fn draw_all(&mut self) -> Result<()> {
        self.term.draw_board(self.state.board())?;
        self.term.draw_score(self.state.score())?;
        self.term.flush()
    }
}

/// Any key resumes or dismisses a banner, except the quit keys.
fn is_quit_key(ev: &KeyEvent) -> bool {
    matches!(command_for(ev), Some(Command::Quit))
}
