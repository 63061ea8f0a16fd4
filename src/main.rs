use ggez::event;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridsnake::app::App;
use gridsnake::{Config, Result};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridsnake=info".into()),
        )
        .init();

    let config = Config::load()?;
    let screen_size = config.screen_size();

    let resource_dir = std::path::PathBuf::from("./resources");
    let window_setup = ggez::conf::WindowSetup::default()
        .title("Snake")
        .vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(screen_size, screen_size)
        .resizable(false);

    let (mut ctx, event_loop) = ggez::ContextBuilder::new("gridsnake", "gridsnake")
        .add_resource_path(resource_dir)
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;

    info!(
        "Starting {0}x{0} board, first tick every {1}ms",
        config.grid_size, config.initial_interval_ms
    );
    let app = App::new(&mut ctx, config)?;
    event::run(ctx, event_loop, app)
}
