use crate::game::direction::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Pause,
    Restart,
    Start,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('p' | 'P' | ' '))
            | (_, KeyCode::Esc) => Some(Command::Pause),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('r' | 'R')) => {
                Some(Command::Restart)
            }
            (_, KeyCode::Enter) => Some(Command::Start),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            _ => None,
        }
    }

    /// Return the heading this command steers the snake in, if any
    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
            _ => None,
        }
    }
}
