//! Board geometry: cells and bounds

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A position on the board. Signed so a step off the edge is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Cell { x, y }
    }

    /// The neighbouring cell in `direction`. Does not wrap.
    pub fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(self.x + dx, self.y + dy)
    }
}

/// Square board of `size × size` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: i16,
}

impl Grid {
    pub fn new(size: i16) -> Self {
        Grid { size }
    }

    pub fn size(&self) -> i16 {
        self.size
    }

    pub fn area(&self) -> usize {
        self.size as usize * self.size as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.size).contains(&cell.x) && (0..self.size).contains(&cell.y)
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.size / 2, self.size / 2)
    }

    /// Every cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let size = self.size;
        (0..size).flat_map(move |x| (0..size).map(move |y| Cell::new(x, y)))
    }
}
