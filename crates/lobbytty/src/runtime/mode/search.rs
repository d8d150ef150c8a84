use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles typing in the lobby search box. The query applies live; leaving
/// the box keeps the filter in place.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.mode = AppMode::Browse;
        }
        KeyCode::Backspace => {
            if let Some(input) = app.current_search_mut() {
                input.delete_backward();
            }
            app.clamp_selection();
        }
        KeyCode::Left => {
            if let Some(input) = app.current_search_mut() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = app.current_search_mut() {
                input.move_right();
            }
        }
        KeyCode::Char(character) if is_text_key(key) => {
            if let Some(input) = app.current_search_mut() {
                input.insert_char(character);
            }
            app.clamp_selection();
        }
        _ => {}
    }

    EventResult::Continue
}

/// Returns whether a key event should insert text into the search box.
fn is_text_key(key: KeyEvent) -> bool {
    key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT
}
