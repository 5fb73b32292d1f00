//! Keyboard mapping
//!
//! Steering keys are held flags read at tick start. Pause and quit are
//! one-shot commands; pause is debounced so a held key toggles only once.

use crate::sim::{Session, SessionStatus, TickInput};

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    /// Toggles pause
    Pause,
    /// Pauses a running game, never resumes
    Escape,
    Quit,
}

impl Key {
    /// Map a DOM-style `KeyboardEvent.key` name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            "p" | "P" => Some(Key::Pause),
            "Escape" => Some(Key::Escape),
            "q" | "Q" => Some(Key::Quit),
            _ => None,
        }
    }

    /// Key presses the page should not also act on (scrolling, closing dialogs)
    pub fn blocks_default(self) -> bool {
        !matches!(self, Key::Quit)
    }
}

/// Session command raised by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Pause,
    Quit,
}

impl Command {
    pub fn apply(self, session: &mut Session) {
        match self {
            Command::TogglePause => session.toggle_pause(),
            Command::Pause => session.pause(),
            Command::Quit => session.quit(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    /// Pause key is down; further key-downs are repeats
    pause_held: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press. Returns the command to apply, if any.
    pub fn key_down(&mut self, key: Key, status: SessionStatus) -> Option<Command> {
        let active = matches!(status, SessionStatus::Running | SessionStatus::Paused);
        match key {
            Key::Left => {
                self.move_left = true;
                None
            }
            Key::Right => {
                self.move_right = true;
                None
            }
            Key::Pause => {
                if self.pause_held {
                    return None;
                }
                self.pause_held = true;
                active.then_some(Command::TogglePause)
            }
            Key::Escape => (status == SessionStatus::Running).then_some(Command::Pause),
            Key::Quit => (status != SessionStatus::Idle).then_some(Command::Quit),
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.move_left = false,
            Key::Right => self.move_right = false,
            Key::Pause => self.pause_held = false,
            Key::Escape | Key::Quit => {}
        }
    }

    /// Drop held keys, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            move_left: self.move_left,
            move_right: self.move_right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("A"), Some(Key::Left));
        assert_eq!(Key::from_name("d"), Some(Key::Right));
        assert_eq!(Key::from_name("P"), Some(Key::Pause));
        assert_eq!(Key::from_name("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_name("x"), None);
    }

    #[test]
    fn test_steering_flags() {
        let mut input = InputState::new();
        input.key_down(Key::Left, SessionStatus::Running);
        assert_eq!(
            input.tick_input(),
            TickInput {
                move_left: true,
                move_right: false
            }
        );
        input.key_down(Key::Right, SessionStatus::Running);
        input.key_up(Key::Left);
        assert!(!input.tick_input().move_left);
        assert!(input.tick_input().move_right);

        input.release_all();
        assert_eq!(input.tick_input(), TickInput::default());
    }

    #[test]
    fn test_pause_debounced_until_release() {
        let mut input = InputState::new();
        let running = SessionStatus::Running;
        assert_eq!(input.key_down(Key::Pause, running), Some(Command::TogglePause));
        // Auto-repeat while held
        assert_eq!(input.key_down(Key::Pause, SessionStatus::Paused), None);
        assert_eq!(input.key_down(Key::Pause, SessionStatus::Paused), None);
        input.key_up(Key::Pause);
        assert_eq!(
            input.key_down(Key::Pause, SessionStatus::Paused),
            Some(Command::TogglePause)
        );
    }

    #[test]
    fn test_escape_only_pauses() {
        let mut input = InputState::new();
        assert_eq!(input.key_down(Key::Escape, SessionStatus::Running), Some(Command::Pause));
        assert_eq!(input.key_down(Key::Escape, SessionStatus::Paused), None);
        assert_eq!(input.key_down(Key::Escape, SessionStatus::Idle), None);
    }

    #[test]
    fn test_menu_ignores_commands() {
        let mut input = InputState::new();
        assert_eq!(input.key_down(Key::Pause, SessionStatus::Idle), None);
        assert_eq!(input.key_down(Key::Quit, SessionStatus::Idle), None);
        assert_eq!(input.key_down(Key::Quit, SessionStatus::Paused), Some(Command::Quit));
    }

    #[test]
    fn test_quit_from_game_over_returns_to_menu() {
        let mut session = Session::with_seed(1, Box::new(MemoryStore::new()));
        session.start(crate::sim::Difficulty::Easy);
        session.status = SessionStatus::GameOver;

        let mut input = InputState::new();
        let command = input.key_down(Key::Quit, session.status);
        assert_eq!(command, Some(Command::Quit));
        if let Some(command) = command {
            command.apply(&mut session);
        }
        assert_eq!(session.status, SessionStatus::Idle);
    }

    #[test]
    fn test_game_keys_block_page_defaults() {
        for key in [Key::Left, Key::Right, Key::Pause, Key::Escape] {
            assert!(key.blocks_default());
        }
        assert!(!Key::Quit.blocks_default());
    }
}
