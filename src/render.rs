//! Drawing the board
//!
//! `render` turns a session snapshot into draw calls on a `Surface`. It never
//! touches game state. The window records those calls into a `Scene` when the
//! session changes and replays the scene every frame.

use ggez::graphics::{self, Color, DrawMode, DrawParam, Rect, TextLayout};
use ggez::mint::Point2;
use ggez::{Context, GameResult};

use crate::game::{Direction, EndReason, GameStatus, Snapshot};

const BACKGROUND_COLOR: Color = Color::new(0.1, 0.1, 0.15, 1.0);
const GRID_COLOR: Color = Color::new(0.88, 0.88, 0.88, 0.25);
const HEAD_COLOR: Color = Color::new(76.0 / 255.0, 175.0 / 255.0, 80.0 / 255.0, 1.0);
const EYE_COLOR: Color = Color::WHITE;
const FOOD_COLOR: Color = Color::new(244.0 / 255.0, 67.0 / 255.0, 54.0 / 255.0, 1.0);
const FOOD_SHINE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.5);
const PAUSE_SHADE: Color = Color::new(0.0, 0.0, 0.0, 0.5);
const GAME_OVER_SHADE: Color = Color::new(0.0, 0.0, 0.0, 0.7);

const TITLE_SIZE: f32 = 20.0;
const HINT_SIZE: f32 = 14.0;

/// Something the renderer can paint on
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_line(&mut self, from: Point2<f32>, to: Point2<f32>, width: f32, color: Color);
    fn fill_circle(&mut self, center: Point2<f32>, radius: f32, color: Color);
    /// Text centred on `center`
    fn text(&mut self, text: &str, center: Point2<f32>, size: f32, color: Color);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        rect: Rect,
        color: Color,
    },
    Line {
        from: Point2<f32>,
        to: Point2<f32>,
        width: f32,
        color: Color,
    },
    Circle {
        center: Point2<f32>,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        center: Point2<f32>,
        size: f32,
        color: Color,
    },
}

/// Recorded draw calls
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Replays the scene onto a ggez canvas.
    pub fn paint(&self, ctx: &mut Context, canvas: &mut graphics::Canvas) -> GameResult {
        for shape in &self.shapes {
            match shape {
                Shape::Rect { rect, color } => {
                    let mesh = graphics::Mesh::new_rectangle(ctx, DrawMode::fill(), *rect, *color)?;
                    canvas.draw(&mesh, DrawParam::default());
                }
                Shape::Line {
                    from,
                    to,
                    width,
                    color,
                } => {
                    let mesh = graphics::Mesh::new_line(ctx, &[*from, *to], *width, *color)?;
                    canvas.draw(&mesh, DrawParam::default());
                }
                Shape::Circle {
                    center,
                    radius,
                    color,
                } => {
                    let mesh = graphics::Mesh::new_circle(
                        ctx,
                        DrawMode::fill(),
                        *center,
                        *radius,
                        0.1,
                        *color,
                    )?;
                    canvas.draw(&mesh, DrawParam::default());
                }
                Shape::Text {
                    text,
                    center,
                    size,
                    color,
                } => {
                    let mut text = graphics::Text::new(text.as_str());
                    text.set_scale(*size).set_layout(TextLayout::center());
                    canvas.draw(&text, DrawParam::default().dest(*center).color(*color));
                }
            }
        }
        Ok(())
    }
}

impl Surface for Scene {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.shapes.push(Shape::Rect { rect, color });
    }

    fn stroke_line(&mut self, from: Point2<f32>, to: Point2<f32>, width: f32, color: Color) {
        self.shapes.push(Shape::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point2<f32>, radius: f32, color: Color) {
        self.shapes.push(Shape::Circle {
            center,
            radius,
            color,
        });
    }

    fn text(&mut self, text: &str, center: Point2<f32>, size: f32, color: Color) {
        self.shapes.push(Shape::Text {
            text: text.to_string(),
            center,
            size,
            color,
        });
    }
}

/// Paints the whole board: background, grid, snake, food, then the
/// pause / game over overlay.
pub fn render<S: Surface + ?Sized>(surface: &mut S, state: &Snapshot<'_>, cell_size: f32) {
    let side = state.grid.size() as f32 * cell_size;

    surface.fill_rect(Rect::new(0.0, 0.0, side, side), BACKGROUND_COLOR);
    for i in 0..=state.grid.size() {
        let offset = i as f32 * cell_size;
        surface.stroke_line(pt(offset, 0.0), pt(offset, side), 1.0, GRID_COLOR);
        surface.stroke_line(pt(0.0, offset), pt(side, offset), 1.0, GRID_COLOR);
    }

    for (index, cell) in state.snake.cells().enumerate() {
        let x = cell.x as f32 * cell_size;
        let y = cell.y as f32 * cell_size;
        let color = if index == 0 { HEAD_COLOR } else { body_color(index) };
        surface.fill_rect(Rect::new(x, y, cell_size, cell_size), color);

        if index == 0 {
            let eye = cell_size / 5.0;
            for (ex, ey) in eye_offsets(state.heading, cell_size) {
                surface.fill_rect(Rect::new(x + ex, y + ey, eye, eye), EYE_COLOR);
            }
        }
    }

    if let Some(food) = state.food {
        let x = food.x as f32 * cell_size;
        let y = food.y as f32 * cell_size;
        surface.fill_circle(
            pt(x + cell_size / 2.0, y + cell_size / 2.0),
            cell_size / 2.0,
            FOOD_COLOR,
        );
        surface.fill_circle(
            pt(x + cell_size / 3.0, y + cell_size / 3.0),
            cell_size / 6.0,
            FOOD_SHINE_COLOR,
        );
    }

    let mid = side / 2.0;
    match state.status {
        GameStatus::Running => {}
        GameStatus::Paused => {
            surface.fill_rect(Rect::new(0.0, 0.0, side, side), PAUSE_SHADE);
            surface.text("Press SPACE to start", pt(mid, mid - 10.0), TITLE_SIZE, Color::WHITE);
            surface.text(
                &format!("Score: {}", state.score),
                pt(mid, mid + 20.0),
                HINT_SIZE,
                Color::WHITE,
            );
        }
        GameStatus::GameOver(reason) => {
            let title = match reason {
                EndReason::BoardFull => "Board cleared!",
                EndReason::OutOfBounds | EndReason::SelfCollision => "Game Over!",
            };
            surface.fill_rect(Rect::new(0.0, 0.0, side, side), GAME_OVER_SHADE);
            surface.text(title, pt(mid, mid - 20.0), TITLE_SIZE, Color::WHITE);
            surface.text(
                &format!("Score: {}", state.score),
                pt(mid, mid + 10.0),
                TITLE_SIZE,
                Color::WHITE,
            );
            surface.text("Press SPACE to restart", pt(mid, mid + 40.0), HINT_SIZE, Color::WHITE);
        }
    }
}

/// Body fades from bright to dull green towards the tail.
fn body_color(index: usize) -> Color {
    let green = 200usize.saturating_sub(index * 10).max(50);
    Color::from_rgb(76, green as u8, 80)
}

/// Top-left corners of the two eyes, relative to the head cell. The eyes sit
/// on the side the snake is facing.
fn eye_offsets(heading: Direction, cell_size: f32) -> [(f32, f32); 2] {
    let eye = cell_size / 5.0;
    let near = cell_size / 4.0;
    let far = cell_size - near - eye;
    match heading {
        Direction::Up => [(near, near), (far, near)],
        Direction::Down => [(near, far), (far, far)],
        Direction::Left => [(near, near), (near, far)],
        Direction::Right => [(far, near), (far, far)],
    }
}

fn pt(x: f32, y: f32) -> Point2<f32> {
    Point2 { x, y }
}
