use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

const YES_OPTION_INDEX: usize = 0;
const NO_OPTION_INDEX: usize = 1;
/// New confirmations start on `No`.
pub(crate) const DEFAULT_OPTION_INDEX: usize = NO_OPTION_INDEX;

/// Describes how the yes/no selector reacts to a pressed key.
enum ConfirmationDecision {
    Confirm,
    Cancel,
    Continue,
}

pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::ConfirmQuit {
        selected_confirmation_index,
    } = &mut app.mode
    else {
        return EventResult::Continue;
    };

    match decide(selected_confirmation_index, key) {
        ConfirmationDecision::Confirm => EventResult::Quit,
        ConfirmationDecision::Cancel => {
            app.mode = AppMode::Browse;

            EventResult::Continue
        }
        ConfirmationDecision::Continue => EventResult::Continue,
    }
}

/// Applies `y/n`, `Esc`, arrow/`h/l`, and `Enter` keys to the selector.
fn decide(selected_confirmation_index: &mut usize, key: KeyEvent) -> ConfirmationDecision {
    match key.code {
        KeyCode::Char(character) if character.eq_ignore_ascii_case(&'y') => {
            ConfirmationDecision::Confirm
        }
        KeyCode::Char(character) if character.eq_ignore_ascii_case(&'n') => {
            ConfirmationDecision::Cancel
        }
        KeyCode::Esc => ConfirmationDecision::Cancel,
        KeyCode::Left | KeyCode::Char('h') => {
            *selected_confirmation_index = YES_OPTION_INDEX;

            ConfirmationDecision::Continue
        }
        KeyCode::Right | KeyCode::Char('l') => {
            *selected_confirmation_index = NO_OPTION_INDEX;

            ConfirmationDecision::Continue
        }
        KeyCode::Enter => {
            if *selected_confirmation_index == YES_OPTION_INDEX {
                ConfirmationDecision::Confirm
            } else {
                ConfirmationDecision::Cancel
            }
        }
        _ => ConfirmationDecision::Continue,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::domain::fixture::Fixtures;

    fn confirming_app() -> App {
        let mut app = App::new(Fixtures::embedded().expect("embedded fixtures must parse"));
        app.mode = AppMode::ConfirmQuit {
            selected_confirmation_index: DEFAULT_OPTION_INDEX,
        };

        app
    }

    #[test]
    fn test_enter_on_default_selection_cancels() {
        // Arrange
        let mut app = confirming_app();

        // Act
        let result = handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        // Assert
        assert!(matches!(result, EventResult::Continue));
        assert!(matches!(app.mode, AppMode::Browse));
    }

    #[test]
    fn test_yes_shortcut_quits() {
        // Arrange
        let mut app = confirming_app();

        // Act
        let result = handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE),
        );

        // Assert
        assert!(matches!(result, EventResult::Quit));
    }

    #[test]
    fn test_left_then_enter_quits() {
        // Arrange
        let mut app = confirming_app();

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        let result = handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        // Assert
        assert!(matches!(result, EventResult::Quit));
    }

    #[test]
    fn test_escape_cancels() {
        // Arrange
        let mut app = confirming_app();

        // Act
        let result = handle(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

        // Assert
        assert!(matches!(result, EventResult::Continue));
        assert!(matches!(app.mode, AppMode::Browse));
    }
}
