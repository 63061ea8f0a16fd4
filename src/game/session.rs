//! Game state container and tick loop
//!
//! `Session` is the only writer of the snake, food, score and speed. Input
//! handlers may only buffer a heading or flip the run status; everything
//! else changes inside `tick` and `reset`.

use std::time::Duration;

use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::direction::Direction;
use super::food::place_food;
use super::grid::{Cell, Grid};
use super::snake::{Advance, Collision, Snake};
use super::speed::Speed;
use crate::clock::TickTimer;
use crate::config::Config;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    OutOfBounds,
    SelfCollision,
    /// No free cell left for food
    BoardFull,
}

impl From<Collision> for EndReason {
    fn from(collision: Collision) -> Self {
        match collision {
            Collision::OutOfBounds => EndReason::OutOfBounds,
            Collision::SelfCollision => EndReason::SelfCollision,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Also the state before the first start
    Paused,
    Running,
    GameOver(EndReason),
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Not running, nothing changed
    Idle,
    Moved,
    Ate { speed_up: bool },
    GameOver(EndReason),
}

/// Record of the last finished run. Only kept in memory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub score: u32,
    pub length: usize,
    pub reason: EndReason,
    pub ended_at: DateTime<Local>,
}

/// Read-only view handed to the renderer
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: Grid,
    pub snake: &'a Snake,
    pub food: Option<Cell>,
    pub heading: Direction,
    pub status: GameStatus,
    pub score: u32,
}

pub struct Session<R = StdRng> {
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    heading: Direction,
    pending: Option<Direction>,
    score: u32,
    speed: Speed,
    status: GameStatus,
    timer: TickTimer,
    rng: R,
    now: Duration,
    revision: u64,
    last_run: Option<RunSummary>,
}

impl Session<StdRng> {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    /// A fresh paused session using `rng` for food placement.
    pub fn with_rng(config: &Config, rng: R) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.grid_size);
        let mut session = Session {
            grid,
            snake: Snake::new(grid.center()),
            food: None,
            heading: Direction::default(),
            pending: None,
            score: 0,
            speed: Speed::new(config),
            status: GameStatus::Paused,
            timer: TickTimer::new(),
            rng,
            now: Duration::ZERO,
            revision: 0,
            last_run: None,
        };
        session.reset();
        Ok(session)
    }

    /// A paused session starting from a given board. Food that is off the
    /// board or under the snake is placed again. The snake must lie on the
    /// board without repeating a cell.
    pub fn with_board(
        config: &Config,
        rng: R,
        snake: Snake,
        heading: Direction,
        food: Option<Cell>,
    ) -> Result<Self> {
        let mut session = Self::with_rng(config, rng)?;
        let grid = session.grid;
        if let Some(cell) = snake.cells().find(|c| !grid.contains(**c)) {
            return Err(Error::InvalidBoard(format!(
                "snake cell ({}, {}) is off the {}x{} board",
                cell.x,
                cell.y,
                grid.size(),
                grid.size()
            )));
        }
        if snake.occupied().len() != snake.len() {
            return Err(Error::InvalidBoard("snake repeats a cell".into()));
        }
        session.food = food
            .filter(|f| grid.contains(*f) && !snake.contains(f))
            .or_else(|| place_food(&grid, &snake.occupied(), &mut session.rng));
        session.snake = snake;
        session.heading = heading;
        session.bump();
        Ok(session)
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn pending_heading(&self) -> Option<Direction> {
        self.pending
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn interval(&self) -> Duration {
        self.speed.interval()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    pub fn last_run(&self) -> Option<&RunSummary> {
        self.last_run.as_ref()
    }

    /// Bumped on every observable state change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.grid,
            snake: &self.snake,
            food: self.food,
            heading: self.heading,
            status: self.status,
            score: self.score,
        }
    }

    /// Buffers a heading change for the next tick. Returns false when the
    /// request is ignored: a reversal of the committed heading, or a finished
    /// run. A later request before the tick replaces an earlier one.
    pub fn on_direction_key(&mut self, requested: Direction) -> bool {
        if matches!(self.status, GameStatus::GameOver(_)) {
            return false;
        }
        if requested.is_opposite(self.heading) {
            return false;
        }
        self.pending = Some(requested);
        true
    }

    /// Pause/resume, or restart after a game over.
    pub fn on_toggle_key(&mut self) {
        match self.status {
            GameStatus::GameOver(_) => self.reset(),
            GameStatus::Running => {
                self.timer.cancel();
                self.status = GameStatus::Paused;
                debug!("Paused at score {}", self.score);
                self.bump();
            }
            GameStatus::Paused => {
                self.timer.arm(self.now, self.speed.interval());
                self.status = GameStatus::Running;
                debug!("Running, tick every {}ms", self.speed.interval().as_millis());
                self.bump();
            }
        }
    }

    /// Feeds the current clock reading; runs a tick when the timer is due.
    pub fn update(&mut self, now: Duration) -> TickEvent {
        self.now = now;
        if self.timer.poll(now) {
            self.tick()
        } else {
            TickEvent::Idle
        }
    }

    /// One simulation step. Does nothing unless running.
    pub fn tick(&mut self) -> TickEvent {
        if self.status != GameStatus::Running {
            return TickEvent::Idle;
        }
        if let Some(next) = self.pending.take() {
            self.heading = next;
        }

        match self.snake.advance(&self.grid, self.heading, self.food) {
            Advance::Moved => {
                self.bump();
                TickEvent::Moved
            }
            Advance::Ate => {
                let speed_up = self.speed.on_food_eaten(self.score);
                self.score += 1;
                if speed_up {
                    self.timer.arm(self.now, self.speed.interval());
                    debug!(
                        "Speed up at score {}: tick every {}ms",
                        self.score,
                        self.speed.interval().as_millis()
                    );
                }
                self.food = place_food(&self.grid, &self.snake.occupied(), &mut self.rng);
                match self.food {
                    Some(food) => {
                        debug!("Food placed at ({}, {})", food.x, food.y);
                        self.bump();
                        TickEvent::Ate { speed_up }
                    }
                    None => {
                        warn!("No free cell left for food");
                        self.end(EndReason::BoardFull);
                        TickEvent::GameOver(EndReason::BoardFull)
                    }
                }
            }
            Advance::Died(collision) => {
                let reason = EndReason::from(collision);
                self.end(reason);
                TickEvent::GameOver(reason)
            }
        }
    }

    /// Back to a paused single-cell snake with fresh food.
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.snake = Snake::new(self.grid.center());
        self.heading = Direction::default();
        self.pending = None;
        self.score = 0;
        self.speed.reset();
        self.status = GameStatus::Paused;
        // only after the snake is back at the start
        self.food = place_food(&self.grid, &self.snake.occupied(), &mut self.rng);
        info!("New game on a {0}x{0} board", self.grid.size());
        self.bump();
    }

    fn end(&mut self, reason: EndReason) {
        self.timer.cancel();
        self.pending = None;
        self.status = GameStatus::GameOver(reason);

        let summary = RunSummary {
            score: self.score,
            length: self.snake.len(),
            reason,
            ended_at: Local::now(),
        };
        match serde_json::to_string(&summary) {
            Ok(json) => info!("Game over: {}", json),
            Err(e) => warn!("Failed to serialize run summary: {}", e),
        }
        self.last_run = Some(summary);
        self.bump();
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
