use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::app::join::JoinError;
use crate::domain::session::Category;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input in the password challenge. A wrong password clears the
/// input and keeps the prompt open; there is no attempt limit.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            app.join.cancel();
            app.mode = AppMode::Browse;
        }
        KeyCode::Enter => submit(app),
        KeyCode::Backspace => {
            if let AppMode::PasswordChallenge { input, failed } = &mut app.mode {
                input.delete_backward();
                *failed = false;
            }
        }
        KeyCode::Char(character) if is_text_key(key) => {
            if let AppMode::PasswordChallenge { input, failed } = &mut app.mode {
                input.insert_char(character);
                *failed = false;
            }
        }
        _ => {}
    }

    EventResult::Continue
}

fn submit(app: &mut App) {
    let AppMode::PasswordChallenge { input, .. } = &mut app.mode else {
        return;
    };
    let candidate = input.text().to_string();

    let result = match app.current_tab.lobby_category() {
        Some(Category::Matchmaking) => app.join.submit_password(&app.matchmaking, &candidate),
        Some(Category::Training) => app.join.submit_password(&app.training, &candidate),
        None => return,
    };

    match result {
        Ok(()) => {
            app.mode = AppMode::TeamSelection {
                selected_option_index: 0,
                error: None,
            };
        }
        Err(JoinError::IncorrectPassword) => {
            if let AppMode::PasswordChallenge { input, failed } = &mut app.mode {
                input.clear();
                *failed = true;
            }
        }
        // The flow aborted (e.g. the session vanished from the catalog).
        Err(_) => {
            app.mode = AppMode::Browse;
        }
    }
}

/// Returns whether a key event should insert text into the password input.
fn is_text_key(key: KeyEvent) -> bool {
    key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Tab;
    use crate::app::join::JoinState;
    use crate::domain::fixture::Fixtures;
    use crate::runtime::mode::browse;

    /// Selects the locked matchmaking fixture lobby and opens its challenge.
    fn challenged_app() -> App {
        let mut app = App::new(Fixtures::embedded().expect("embedded fixtures must parse"));
        app.current_tab = Tab::Matchmaking;
        app.matchmaking_table.select(Some(0));
        browse::handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(app.mode, AppMode::PasswordChallenge { .. }));

        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_correct_password_advances_to_team_selection() {
        // Arrange
        let mut app = challenged_app();
        type_text(&mut app, "1234");

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        // Assert
        assert!(matches!(app.mode, AppMode::TeamSelection { .. }));
        assert!(matches!(app.join.state(), JoinState::TeamSelection { .. }));
    }

    #[test]
    fn test_wrong_password_marks_failure_and_keeps_the_prompt() {
        // Arrange
        let mut app = challenged_app();
        type_text(&mut app, "wrong");

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        // Assert
        let AppMode::PasswordChallenge { input, failed } = &app.mode else {
            panic!("prompt should stay open");
        };
        assert!(*failed);
        assert!(input.is_empty());
        assert!(matches!(
            app.join.state(),
            JoinState::PasswordChallenge { .. }
        ));
    }

    #[test]
    fn test_typing_after_a_failure_clears_the_error_flag() {
        // Arrange
        let mut app = challenged_app();
        type_text(&mut app, "wrong");
        handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        // Act
        type_text(&mut app, "1");

        // Assert
        let AppMode::PasswordChallenge { failed, .. } = &app.mode else {
            panic!("prompt should stay open");
        };
        assert!(!*failed);
    }

    #[test]
    fn test_escape_aborts_the_join_flow() {
        // Arrange
        let mut app = challenged_app();

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

        // Assert
        assert!(matches!(app.mode, AppMode::Browse));
        assert_eq!(app.join.state(), JoinState::Aborted);
    }
}
