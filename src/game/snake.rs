//! Snake body and movement

use std::collections::{HashSet, VecDeque};

use super::direction::Direction;
use super::grid::{Cell, Grid};

/// Why a move killed the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    OutOfBounds,
    SelfCollision,
}

/// Result of one `Snake::advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Head moved, tail followed
    Moved,
    /// Head moved onto the food, tail stayed
    Ate,
    /// Move rejected; the body is unchanged
    Died(Collision),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Head is front, tail is back
    body: VecDeque<Cell>,
}

impl Snake {
    pub fn new(start: Cell) -> Self {
        Snake {
            body: VecDeque::from([start]),
        }
    }

    /// Builds a snake from cells listed head first. Returns `None` when empty.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            None
        } else {
            Some(Snake { body })
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Never zero; a snake always has a head.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.body.contains(cell)
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Moves one cell in `heading`.
    ///
    /// Self-collision is checked against the body before the tail moves, so
    /// stepping into the current tail cell is fatal.
    pub fn advance(&mut self, grid: &Grid, heading: Direction, food: Option<Cell>) -> Advance {
        let new_head = self.head().step(heading);

        if !grid.contains(new_head) {
            return Advance::Died(Collision::OutOfBounds);
        }
        if self.body.contains(&new_head) {
            return Advance::Died(Collision::SelfCollision);
        }

        self.body.push_front(new_head);

        if food == Some(new_head) {
            Advance::Ate
        } else {
            self.body.pop_back();
            Advance::Moved
        }
    }
}
