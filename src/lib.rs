//! Grid snake: simulation, tick clock, input mapping and canvas rendering.

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod render;

pub use config::Config;
pub use error::{Error, Result};
