use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use std::io;
use std::time::Duration;

use crate::grid::Direction;
use crate::sim::Intent;

/// A key press as the game loop sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Game(Intent),
    Pause,
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('w') => Command::Game(Intent::Turn(Direction::Up)),
        KeyCode::Right | KeyCode::Char('d') => Command::Game(Intent::Turn(Direction::Right)),
        KeyCode::Down | KeyCode::Char('s') => Command::Game(Intent::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Command::Game(Intent::Turn(Direction::Left)),
        KeyCode::Char('r') => Command::Game(Intent::Reset),
        KeyCode::Char(' ') => Command::Pause,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Picks one command out of a burst of key presses: the first one that maps
/// to anything, unless a quit shows up later.
pub fn first_command(keys: impl IntoIterator<Item = KeyEvent>) -> Option<Command> {
    let mut first = None;
    for command in keys.into_iter().filter_map(map_key) {
        if command == Command::Quit {
            return Some(command);
        }
        first.get_or_insert(command);
    }
    first
}

/// Holds `intent` for the next frame. An earlier turn keeps its place, but a
/// reset replaces whatever is waiting.
pub fn queue_intent(pending: &mut Option<Intent>, intent: Intent) {
    match *pending {
        None => *pending = Some(intent),
        Some(Intent::Turn(_)) if intent == Intent::Reset => {
            debug!("Reset replaces pending {:?}", pending);
            *pending = Some(intent);
        }
        Some(waiting) => debug!("Dropped {:?}, {:?} already queued", intent, waiting),
    }
}

/// Waits up to `timeout` for input, then drains whatever else is queued.
pub fn poll_command(timeout: Duration) -> io::Result<Option<Command>> {
    let mut keys = Vec::new();
    if event::poll(timeout)? {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                keys.push(key);
            }
        }
    }
    Ok(first_command(keys))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_and_wasd_keys() {
        let up = Some(Command::Game(Intent::Turn(Direction::Up)));
        assert_eq!(map_key(press(KeyCode::Up)), up);
        assert_eq!(map_key(press(KeyCode::Char('w'))), up);

        let left = Some(Command::Game(Intent::Turn(Direction::Left)));
        assert_eq!(map_key(press(KeyCode::Left)), left);
        assert_eq!(map_key(press(KeyCode::Char('a'))), left);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(press(KeyCode::Char('r'))), Some(Command::Game(Intent::Reset)));
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(Command::Pause));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Up);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn test_first_press_wins() {
        let keys = [
            press(KeyCode::Char('x')),
            press(KeyCode::Down),
            press(KeyCode::Left),
        ];
        assert_eq!(
            first_command(keys),
            Some(Command::Game(Intent::Turn(Direction::Down)))
        );
        assert_eq!(first_command(Vec::new()), None);
    }

    #[test]
    fn test_queue_keeps_first_turn() {
        let mut pending = None;
        queue_intent(&mut pending, Intent::Turn(Direction::Up));
        queue_intent(&mut pending, Intent::Turn(Direction::Left));

        assert_eq!(pending, Some(Intent::Turn(Direction::Up)));
    }

    #[test]
    fn test_queue_reset_replaces_turn() {
        let mut pending = None;
        queue_intent(&mut pending, Intent::Turn(Direction::Down));
        queue_intent(&mut pending, Intent::Reset);
        queue_intent(&mut pending, Intent::Turn(Direction::Up));

        assert_eq!(pending, Some(Intent::Reset));
    }

    #[test]
    fn test_quit_overrides_earlier_keys() {
        let keys = [press(KeyCode::Down), press(KeyCode::Char('q'))];
        assert_eq!(first_command(keys), Some(Command::Quit));
    }
}
