use crate::game::{Difficulty, Direction, Intent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    /// Space or Enter
    Confirm,
    Restart,
    Select(Difficulty),
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q') | KeyCode::Esc) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
                Some(Command::Confirm)
            }
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::Restart),
            (KeyModifiers::NONE, KeyCode::Char(c)) => Difficulty::iter()
                .find(|d| d.hotkey() == c)
                .map(Command::Select),
            _ => None,
        }
    }

    /// Return what the command asks of the game.  `Quit` is handled by the
    /// app and has no intent.
    pub(crate) fn intent(self) -> Option<Intent> {
        match self {
            Command::Quit => None,
            Command::Up => Some(Intent::Turn(Direction::Up)),
            Command::Down => Some(Intent::Turn(Direction::Down)),
            Command::Left => Some(Intent::Turn(Direction::Left)),
            Command::Right => Some(Intent::Turn(Direction::Right)),
            Command::Confirm => Some(Intent::Confirm),
            Command::Restart => Some(Intent::Restart),
            Command::Select(d) => Some(Intent::SetDifficulty(d)),
        }
    }
}
