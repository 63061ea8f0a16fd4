//! ggez window hosting a session

use ggez::audio::{self, SoundSource};
use ggez::event::EventHandler;
use ggez::input::keyboard::KeyInput;
use ggez::{graphics, Context, GameResult};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Result;
use crate::game::{Session, TickEvent};
use crate::input::{self, Command};
use crate::render::{self, Scene};

/// Which sound a tick calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cue {
    Eat,
    GameOver,
}

impl Cue {
    fn for_event(event: TickEvent) -> Option<Cue> {
        match event {
            TickEvent::Ate { .. } => Some(Cue::Eat),
            TickEvent::GameOver(_) => Some(Cue::GameOver),
            TickEvent::Idle | TickEvent::Moved => None,
        }
    }
}

struct Sounds {
    eat: audio::Source,
    game_over: audio::Source,
}

impl Sounds {
    fn load(ctx: &mut Context) -> GameResult<Self> {
        Ok(Sounds {
            eat: audio::Source::new(ctx, "/eat.wav")?,
            game_over: audio::Source::new(ctx, "/game_over.wav")?,
        })
    }
}

pub struct App {
    config: Config,
    session: Session,
    scene: Scene,
    /// Session revision the scene was built from
    rendered: Option<u64>,
    sounds: Option<Sounds>,
}

impl App {
    pub fn new(ctx: &mut Context, config: Config) -> Result<Self> {
        let sounds = if config.sound {
            match Sounds::load(ctx) {
                Ok(sounds) => Some(sounds),
                Err(e) => {
                    warn!("Sounds disabled: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Ok(App {
            session: Session::new(&config)?,
            config,
            scene: Scene::new(),
            rendered: None,
            sounds,
        })
    }

    /// Playback failures are logged, never fatal.
    fn play(&mut self, ctx: &mut Context, event: TickEvent) {
        let (Some(sounds), Some(cue)) = (self.sounds.as_mut(), Cue::for_event(event)) else {
            return;
        };
        let played = match cue {
            Cue::Eat => sounds.eat.play_detached(ctx),
            Cue::GameOver => sounds.game_over.play_detached(ctx),
        };
        if let Err(e) = played {
            warn!("Failed to play {:?} sound: {}", cue, e);
        }
    }

    /// Rebuilds the scene only when the session changed since the last build.
    fn refresh_scene(&mut self) {
        let revision = self.session.revision();
        if self.rendered == Some(revision) {
            return;
        }
        self.scene.clear();
        render::render(
            &mut self.scene,
            &self.session.snapshot(),
            self.config.cell_size as f32,
        );
        self.rendered = Some(revision);
    }
}

impl EventHandler for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let now = ctx.time.time_since_start();
        let event = self.session.update(now);
        if event != TickEvent::Idle {
            debug!("Tick: {:?}", event);
        }
        self.play(ctx, event);
        self.refresh_scene();
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, graphics::Color::BLACK);
        self.scene.paint(ctx, &mut canvas)?;
        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, key: KeyInput, repeat: bool) -> GameResult {
        let Some(command) = key.keycode.and_then(input::command_for_key) else {
            return Ok(());
        };
        if command == Command::Quit {
            ctx.request_quit();
            return Ok(());
        }
        input::apply(&mut self.session, command, repeat);
        self.refresh_scene();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::EndReason;

    #[test]
    fn test_cue_for_event() {
        assert_eq!(Cue::for_event(TickEvent::Ate { speed_up: true }), Some(Cue::Eat));
        assert_eq!(
            Cue::for_event(TickEvent::GameOver(EndReason::BoardFull)),
            Some(Cue::GameOver)
        );
        assert_eq!(Cue::for_event(TickEvent::Moved), None);
        assert_eq!(Cue::for_event(TickEvent::Idle), None);
    }
}
