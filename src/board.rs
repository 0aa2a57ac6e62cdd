use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::snake::Direction::{self, *};
use crate::{Coords, TermInt};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Snake,
    Food,
}

/// The playing field. Edges wrap around, so every cell has four neighbours.
pub struct Board {
    width: TermInt,
    height: TermInt,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: TermInt, height: TermInt) -> Self {
        let cells = vec![Cell::Empty; width as usize * height as usize];
        Board { width, height, cells }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn get(&self, pos: Coords) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Coords, cell: Cell) {
        let i = self.index(pos);
        self.cells[i] = cell;
    }

    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }

    /// The neighbour of `pos` in direction `dir`, wrapping at the edges.
    pub fn step(&self, pos: Coords, dir: Direction) -> Coords {
        let (x, y) = pos;
        match dir {
            Up => (x, if y == 0 { self.height - 1 } else { y - 1 }),
            Down => (x, if y + 1 >= self.height { 0 } else { y + 1 }),
            Left => (if x == 0 { self.width - 1 } else { x - 1 }, y),
            Right => (if x + 1 >= self.width { 0 } else { x + 1 }, y),
        }
    }

    /// Puts food on a random empty cell. `None` means the board is full.
    pub fn spawn_food<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coords> {
        let choices: Vec<Coords> = self.positions().filter(|pos| self.get(*pos) == Cell::Empty).collect();
        let food = choices.choose(rng).copied()?;

        self.set(food, Cell::Food);
        debug!("food spawned at {:?}, {} free cells left", food, choices.len() - 1);
        Some(food)
    }

    pub fn positions(&self) -> impl Iterator<Item = Coords> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }

    fn index(&self, (x, y): Coords) -> usize {
        debug_assert!(x < self.width && y < self.height, "{:?} is off the board", (x, y));
        self.width as usize * y as usize + x as usize
    }
}
