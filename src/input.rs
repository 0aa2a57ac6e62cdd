use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Pause,
    Quit,
}

pub fn command_for(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Turn(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Turn(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Turn(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Turn(Right)),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Some(Command::Pause),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_wasd_turn() {
        assert_eq!(command_for(&key(KeyCode::Up)), Some(Command::Turn(Up)));
        assert_eq!(command_for(&key(KeyCode::Char('a'))), Some(Command::Turn(Left)));
        assert_eq!(command_for(&key(KeyCode::Down)), Some(Command::Turn(Down)));
        assert_eq!(command_for(&key(KeyCode::Char('d'))), Some(Command::Turn(Right)));
    }

    #[test]
    fn pause_and_quit_keys() {
        assert_eq!(command_for(&key(KeyCode::Char('p'))), Some(Command::Pause));
        assert_eq!(command_for(&key(KeyCode::Esc)), Some(Command::Pause));
        assert_eq!(command_for(&key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for(&KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT)), Some(Command::Pause));
        assert_eq!(command_for(&KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)), Some(Command::Quit));
        assert_eq!(command_for(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Command::Quit));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(command_for(&key(KeyCode::Char('c'))), None);
        assert_eq!(command_for(&key(KeyCode::Enter)), None);
        assert_eq!(command_for(&key(KeyCode::F(1))), None);
    }
}
