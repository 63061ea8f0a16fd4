//! Program-level errors. Game outcomes such as hitting a wall are not errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    #[error("Game error: {0}")]
    Game(#[from] ggez::GameError),
}

pub type Result<T> = std::result::Result<T, Error>;
