//! Food placement on a free cell

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::grid::{Cell, Grid};

/// Picks a free cell uniformly at random, or `None` if the snake covers
/// the whole board.
pub fn place_food<R: Rng + ?Sized>(
    grid: &Grid,
    occupied: &HashSet<Cell>,
    rng: &mut R,
) -> Option<Cell> {
    let free: Vec<Cell> = grid.cells().filter(|c| !occupied.contains(c)).collect();
    free.choose(rng).copied()
}
