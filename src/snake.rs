use std::collections::VecDeque;

use crate::Coords;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn is_vertical(self) -> bool {
        matches!(self, Up | Down)
    }
}

/// Head at the front of `body`, tail at the back.
pub struct Snake {
    body: VecDeque<Coords>,
    direction: Direction,
}

impl Snake {
    pub fn new(pos: Coords, direction: Direction) -> Self {
        Snake { body: VecDeque::from(vec![pos]), direction }
    }

    pub fn body(&self) -> impl Iterator<Item = &Coords> + '_ {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn tail(&self) -> Coords {
        self.body[self.body.len() - 1]
    }

    /// Moves the head to `new_head`. Returns the vacated tail cell, unless
    /// the snake is growing this step.
    pub fn advance(&mut self, new_head: Coords, grow: bool) -> Option<Coords> {
        self.body.push_front(new_head);

        if grow {
            None
        } else {
            self.body.pop_back()
        }
    }

    /// Only quarter turns are allowed. Returns whether the heading changed.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction.is_vertical() == self.direction.is_vertical() {
            return false;
        }

        self.direction = new_direction;
        true
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_a_single_segment() {
        let snake = Snake::new((4, 2), Right);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), (4, 2));
        assert_eq!(snake.tail(), (4, 2));
        assert_eq!(snake.get_direction(), Right);
    }

    #[test]
    fn rejects_reversal_and_same_direction() {
        let mut snake = Snake::new((0, 0), Right);
        assert!(!snake.set_direction(Left));
        assert!(!snake.set_direction(Right));
        assert_eq!(snake.get_direction(), Right);

        assert!(snake.set_direction(Up));
        assert!(!snake.set_direction(Down));
        assert_eq!(snake.get_direction(), Up);
    }

    #[test]
    fn accepts_quarter_turns() {
        let mut snake = Snake::new((0, 0), Up);
        assert!(snake.set_direction(Left));
        assert!(snake.set_direction(Down));
        assert!(snake.set_direction(Right));
        assert_eq!(snake.get_direction(), Right);
    }

    #[test]
    fn advance_drops_tail_unless_growing() {
        let mut snake = Snake::new((1, 1), Right);

        assert_eq!(snake.advance((2, 1), true), None);
        assert_eq!(snake.len(), 2);

        assert_eq!(snake.advance((3, 1), false), Some((1, 1)));
        assert_eq!(snake.body().copied().collect::<Vec<_>>(), vec![(3, 1), (2, 1)]);
        assert_eq!(snake.tail(), (2, 1));
    }
}
