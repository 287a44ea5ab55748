//! Mapping from terminal events to game actions.

use crate::types::{Direction, GameAction, Pos};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveCursor(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveCursor(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::MoveCursor(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::MoveCursor(Direction::Down))
        }

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::SelectCursor),
        KeyCode::Tab => Some(GameAction::SkipPreview),

        _ => None,
    }
}

/// Map a mouse event to a game action.
///
/// `locate` turns a terminal (column, row) into the tile under it, if any.
/// A click that misses every tile maps to nothing.
pub fn handle_mouse_event(
    event: MouseEvent,
    locate: impl Fn(u16, u16) -> Option<Pos>,
) -> Option<GameAction> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            locate(event.column, event.row).map(GameAction::Select)
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            Some(GameAction::Hover(locate(event.column, event.row)))
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
