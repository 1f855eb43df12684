//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),

        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleDetails),

        // Hint expansion only means something for an open panel
        InputKey::Char('e') | InputKey::Char('E') => {
            let open = state
                .selected_entry()
                .is_some_and(|entry| entry.details.is_visible());
            open.then_some(Message::SetHintsExpanded(key == InputKey::Char('e')))
        }

        InputKey::Char('l') => Some(Message::ToggleLegend),
        InputKey::Char('r') | InputKey::CharCtrl('r') => Some(Message::ReloadCapture),

        _ => None,
    }
}
