use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Pause,
    Restart,
    /// A key to pass on to the game, identified by name
    Key(&'static str),
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Key("up")),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => {
                Some(Command::Key("down"))
            }
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => {
                Some(Command::Key("left"))
            }
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => {
                Some(Command::Key("right"))
            }
            (_, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('p')) => Some(Command::Pause),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::Restart),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            _ => None,
        }
    }
}
