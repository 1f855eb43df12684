//! Terminal event polling

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use speedlens_app::message::Message;
use speedlens_app::InputKey;
use speedlens_core::prelude::*;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a mouse event into a click on the request list.
///
/// Only left-button presses inside `list_area` count; the row is relative to
/// the list's top edge.
pub fn mouse_event_to_message(mouse: MouseEvent, list_area: Rect) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left)
            if list_area.contains(Position::new(mouse.column, mouse.row)) =>
        {
            Some(Message::Click {
                row: mouse.row - list_area.y,
            })
        }
        MouseEventKind::ScrollDown => Some(Message::SelectNext),
        MouseEventKind::ScrollUp => Some(Message::SelectPrevious),
        _ => None,
    }
}

/// Poll for terminal events, producing a tick when `timeout` passes quietly.
pub fn poll(timeout: Duration, list_area: Rect) -> Result<Option<Message>> {
    if event::poll(timeout)? {
        let message = match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                key_event_to_input(key).map(Message::Key)
            }
            Event::Mouse(mouse) => mouse_event_to_message(mouse, list_area),
            _ => None,
        };
        Ok(message)
    } else {
        // Generate tick on timeout for animations
        Ok(Some(Message::Tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            Some(InputKey::Up)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::End, KeyModifiers::NONE)),
            Some(InputKey::End)
        );
    }

    #[test]
    fn test_unsupported_key_ignored() {
        let key = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_left_click_inside_list_is_relative() {
        let list = Rect::new(0, 3, 80, 10);
        let msg = mouse_event_to_message(mouse(MouseEventKind::Down(MouseButton::Left), 5, 7), list);
        assert!(matches!(msg, Some(Message::Click { row: 4 })));
    }

    #[test]
    fn test_click_outside_list_ignored() {
        let list = Rect::new(0, 3, 80, 10);
        let above = mouse_event_to_message(mouse(MouseEventKind::Down(MouseButton::Left), 5, 1), list);
        let below = mouse_event_to_message(mouse(MouseEventKind::Down(MouseButton::Left), 5, 13), list);
        assert!(above.is_none());
        assert!(below.is_none());
    }

    #[test]
    fn test_right_click_and_release_ignored() {
        let list = Rect::new(0, 0, 80, 10);
        assert!(
            mouse_event_to_message(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1), list)
                .is_none()
        );
        assert!(
            mouse_event_to_message(mouse(MouseEventKind::Up(MouseButton::Left), 1, 1), list)
                .is_none()
        );
    }

    #[test]
    fn test_scroll_wheel_moves_selection() {
        let list = Rect::new(0, 0, 80, 10);
        assert!(matches!(
            mouse_event_to_message(mouse(MouseEventKind::ScrollDown, 1, 1), list),
            Some(Message::SelectNext)
        ));
        assert!(matches!(
            mouse_event_to_message(mouse(MouseEventKind::ScrollUp, 1, 1), list),
            Some(Message::SelectPrevious)
        ));
    }
}
