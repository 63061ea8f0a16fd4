use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use gridsnake::game::{Cell, Direction, EndReason, GameStatus, Session, Snake, TickEvent};
use gridsnake::render::{render, Scene, Shape};
use gridsnake::Config;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn running(cells: &[(i16, i16)], heading: Direction, food: (i16, i16)) -> Session {
    let snake = Snake::from_cells(cells.iter().map(|&(x, y)| Cell::new(x, y))).unwrap();
    let mut session = Session::with_board(
        &Config::default(),
        StdRng::seed_from_u64(99),
        snake,
        heading,
        Some(Cell::new(food.0, food.1)),
    )
    .unwrap();
    session.on_toggle_key();
    session
}

#[test]
fn test_single_cell_moves_right() {
    let mut session = running(&[(10, 10)], Direction::Right, (15, 15));
    assert_eq!(session.update(ms(150)), TickEvent::Moved);
    let body: Vec<Cell> = session.snake().cells().copied().collect();
    assert_eq!(body, vec![Cell::new(11, 10)]);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_eating_grows_and_scores() {
    let mut session = running(&[(5, 5), (4, 5)], Direction::Right, (6, 5));
    assert_eq!(session.tick(), TickEvent::Ate { speed_up: false });
    let body: Vec<Cell> = session.snake().cells().copied().collect();
    assert_eq!(body, vec![Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]);
    assert_eq!(session.score(), 1);
}

#[test]
fn test_left_wall_then_restart() {
    let mut session = running(&[(0, 5)], Direction::Left, (15, 15));
    assert_eq!(session.tick(), TickEvent::GameOver(EndReason::OutOfBounds));
    assert_eq!(session.snake().head(), Cell::new(0, 5));
    assert_eq!(session.status(), GameStatus::GameOver(EndReason::OutOfBounds));

    session.on_toggle_key();
    assert_eq!(session.status(), GameStatus::Paused);
    assert_eq!(session.snake().len(), 1);
    assert_eq!(session.score(), 0);
    let food = session.food().unwrap();
    assert!(!session.snake().contains(&food));
}

#[test]
fn test_random_play_keeps_invariants() {
    let config = Config {
        grid_size: 8,
        ..Config::default()
    };
    let mut session = Session::with_rng(&config, StdRng::seed_from_u64(5)).unwrap();
    let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
    let mut last_interval = session.interval();

    session.on_toggle_key();
    for step in 0..2_000u64 {
        session.on_direction_key(turns[(step as usize / 3) % turns.len()]);
        let event = session.tick();

        let grid = session.grid();
        let snake = session.snake();
        assert!(snake.cells().all(|c| grid.contains(*c)));
        assert_eq!(snake.occupied().len(), snake.len());
        if let Some(food) = session.food() {
            assert!(!snake.contains(&food));
        }
        assert!(session.interval() <= last_interval);
        last_interval = session.interval();

        if let TickEvent::GameOver(_) = event {
            session.on_toggle_key();
            assert_eq!(session.interval(), ms(150));
            last_interval = session.interval();
            session.on_toggle_key();
        }
    }
}

#[test]
fn test_scene_follows_session() {
    let session = running(&[(3, 3), (2, 3)], Direction::Right, (7, 7));
    let mut scene = Scene::new();
    render(&mut scene, &session.snapshot(), 18.0);

    let circles = scene
        .shapes()
        .iter()
        .filter(|s| matches!(s, Shape::Circle { .. }))
        .count();
    assert_eq!(circles, 2);
    assert!(!scene.shapes().iter().any(|s| matches!(s, Shape::Text { .. })));
}
