//! Snake simulation

pub mod direction;
pub mod food;
pub mod grid;
pub mod session;
pub mod snake;
pub mod speed;

pub use direction::Direction;
pub use grid::{Cell, Grid};
pub use session::{EndReason, GameStatus, RunSummary, Session, Snapshot, TickEvent};
pub use snake::{Advance, Collision, Snake};
