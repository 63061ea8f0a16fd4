//! Keyboard mapping

use ggez::input::keyboard::KeyCode;
use rand::Rng;

use crate::game::{Direction, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    /// Start, pause, resume, or restart after game over
    Toggle,
    Reset,
    Quit,
}

/// Arrow keys and WASD steer, Space toggles, R resets, Escape quits.
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    let command = match key {
        KeyCode::Up | KeyCode::W => Command::Turn(Direction::Up),
        KeyCode::Down | KeyCode::S => Command::Turn(Direction::Down),
        KeyCode::Left | KeyCode::A => Command::Turn(Direction::Left),
        KeyCode::Right | KeyCode::D => Command::Turn(Direction::Right),
        KeyCode::Space => Command::Toggle,
        KeyCode::R => Command::Reset,
        KeyCode::Escape => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Applies `command` to the session. Held-down keys only repeat turns, so
/// auto-repeat cannot flap the pause state. `Quit` is left to the caller.
pub fn apply<R: Rng>(session: &mut Session<R>, command: Command, repeat: bool) {
    match command {
        Command::Turn(direction) => {
            session.on_direction_key(direction);
        }
        Command::Toggle if !repeat => session.on_toggle_key(),
        Command::Reset if !repeat => session.reset(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::game::GameStatus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> Session {
        Session::with_rng(&Config::default(), StdRng::seed_from_u64(3)).unwrap()
    }

    #[test]
    fn test_both_key_sets_steer() {
        assert_eq!(command_for_key(KeyCode::Up), Some(Command::Turn(Direction::Up)));
        assert_eq!(command_for_key(KeyCode::W), Some(Command::Turn(Direction::Up)));
        assert_eq!(command_for_key(KeyCode::A), Some(Command::Turn(Direction::Left)));
        assert_eq!(command_for_key(KeyCode::S), Some(Command::Turn(Direction::Down)));
        assert_eq!(command_for_key(KeyCode::Right), Some(Command::Turn(Direction::Right)));
        assert_eq!(command_for_key(KeyCode::Space), Some(Command::Toggle));
        assert_eq!(command_for_key(KeyCode::Q), None);
    }

    #[test]
    fn test_toggle_ignores_repeat() {
        let mut session = session();
        apply(&mut session, Command::Toggle, false);
        assert_eq!(session.status(), GameStatus::Running);
        apply(&mut session, Command::Toggle, true);
        assert_eq!(session.status(), GameStatus::Running);
        apply(&mut session, Command::Toggle, false);
        assert_eq!(session.status(), GameStatus::Paused);
    }

    #[test]
    fn test_turn_goes_to_pending_buffer() {
        let mut session = session();
        apply(&mut session, Command::Turn(Direction::Down), true);
        assert_eq!(session.pending_heading(), Some(Direction::Down));
        assert_eq!(session.heading(), Direction::Right);

        apply(&mut session, Command::Turn(Direction::Left), false);
        assert_eq!(session.pending_heading(), Some(Direction::Down));
    }

    #[test]
    fn test_reset_key() {
        let mut session = session();
        apply(&mut session, Command::Toggle, false);
        session.tick();
        apply(&mut session, Command::Reset, false);
        assert_eq!(session.status(), GameStatus::Paused);
        assert_eq!(session.snake().head(), session.grid().center());
    }
}
