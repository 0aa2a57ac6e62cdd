use std::collections::VecDeque;

use log::{debug, info};
use rand::rngs::StdRng;

use crate::board::{Board, Cell};
use crate::snake::{Direction::{self, *}, Snake};
use crate::{Coords, TermInt};

/// Turns pressed faster than the snake moves are kept, up to this many.
const MAX_PENDING_TURNS: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// `old_tail` is `None` when the snake grew. `new_food` is set when the
    /// snake ate and fresh food was placed.
    Moved { new_head: Coords, old_tail: Option<Coords>, new_food: Option<Coords> },
    Crashed { at: Coords },
    /// The snake ate the last food and no empty cell is left.
    Won { new_head: Coords },
}

impl StepOutcome {
    pub fn is_final(&self) -> bool {
        !matches!(self, StepOutcome::Moved { .. })
    }
}

/// Rules of the game, free of any terminal concerns.
pub struct GameState {
    board: Board,
    snake: Snake,
    rng: StdRng,
    pending_turns: VecDeque<Direction>,
    finished: Option<StepOutcome>,
}

impl GameState {
    pub fn new(width: TermInt, height: TermInt, mut rng: StdRng) -> Self {
        let mut board = Board::new(width, height);
        let snake = Snake::new(board.center(), Right);
        board.set(snake.head(), Cell::Snake);

        let finished = match board.spawn_food(&mut rng) {
            Some(_) => None,
            None => Some(StepOutcome::Won { new_head: snake.head() }),
        };

        GameState { board, snake, rng, pending_turns: VecDeque::new(), finished }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn score(&self) -> usize {
        self.snake.len() - 1
    }

    /// Queues a turn for a later step. Turns are validated when applied,
    /// against the heading the snake has at that point. A repeat of the
    /// heading the snake will already have is dropped, so a held key cannot
    /// crowd out a real turn.
    pub fn queue_turn(&mut self, dir: Direction) {
        let heading = self.pending_turns.back().copied().unwrap_or_else(|| self.snake.get_direction());
        if dir == heading {
            return;
        }

        if self.pending_turns.len() < MAX_PENDING_TURNS {
            self.pending_turns.push_back(dir);
        }
    }

    /// Advances the snake by one cell.
    pub fn step(&mut self) -> StepOutcome {
        if let Some(outcome) = self.finished {
            return outcome;
        }

        self.apply_next_turn();

        let old_tail = self.snake.tail();
        let new_head = self.board.step(self.snake.head(), self.snake.get_direction());

        let outcome = match self.board.get(new_head) {
            Cell::Snake if new_head != old_tail => StepOutcome::Crashed { at: new_head },
            Cell::Food => {
                self.snake.advance(new_head, true);
                self.board.set(new_head, Cell::Snake);

                match self.board.spawn_food(&mut self.rng) {
                    Some(food) => StepOutcome::Moved { new_head, old_tail: None, new_food: Some(food) },
                    None => {
                        info!("board filled with score {}", self.score());
                        StepOutcome::Won { new_head }
                    }
                }
            }
            _ => {
                let vacated = self.snake.advance(new_head, false);
                if let Some(tail) = vacated {
                    self.board.set(tail, Cell::Empty);
                }
                self.board.set(new_head, Cell::Snake);
                StepOutcome::Moved { new_head, old_tail: vacated, new_food: None }
            }
        };

        if outcome.is_final() {
            self.finished = Some(outcome);
        }

        outcome
    }

    fn apply_next_turn(&mut self) {
        while let Some(dir) = self.pending_turns.pop_front() {
            if self.snake.set_direction(dir) {
                debug!("turned {:?}", dir);
                return;
            }
        }
    }
}
