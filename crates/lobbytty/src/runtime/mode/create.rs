use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::app::form::FormField;
use crate::domain::session::Category;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input inside the create-session dialog.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let AppMode::CreateSession { form } = &mut app.mode else {
        return EventResult::Continue;
    };

    match key.code {
        KeyCode::Esc => {
            app.mode = AppMode::Browse;
        }
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
        KeyCode::Left => form.cycle_previous(),
        KeyCode::Right => form.cycle_next(),
        KeyCode::Backspace => form.delete_backward(),
        KeyCode::Enter => submit(app),
        KeyCode::Char(' ') if form.focused == FormField::Locked => form.toggle_locked(),
        KeyCode::Char(character) if is_text_key(key) => form.insert_char(character),
        _ => {}
    }

    EventResult::Continue
}

/// Validates the form; on success the new session is prepended to its
/// catalog and selected. On failure the dialog stays open with every field
/// error set.
fn submit(app: &mut App) {
    let AppMode::CreateSession { form } = &mut app.mode else {
        return;
    };
    let category = form.category();
    let Ok(draft) = form.validate() else {
        return;
    };

    match category {
        Category::Matchmaking => {
            app.matchmaking.create(draft);
            app.matchmaking_table.select(Some(0));
        }
        Category::Training => {
            app.training.create(draft);
            app.training_table.select(Some(0));
        }
    }
    app.mode = AppMode::Browse;
}

/// Returns whether a key event should insert text into a form field.
fn is_text_key(key: KeyEvent) -> bool {
    key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Tab;
    use crate::app::form::SessionForm;
    use crate::domain::fixture::Fixtures;

    fn creating_app() -> App {
        let mut app = App::new(Fixtures::embedded().expect("embedded fixtures must parse"));
        app.current_tab = Tab::Matchmaking;
        app.mode = AppMode::CreateSession {
            form: SessionForm::new(Category::Matchmaking),
        };

        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn fill_required_fields(app: &mut App) {
        for c in "friday night".chars() {
            press(app, KeyCode::Char(c));
        }
        // Map, weapon, and max players are the next three fields.
        for _ in 0..3 {
            press(app, KeyCode::Tab);
            press(app, KeyCode::Right);
        }
    }

    #[test]
    fn test_invalid_submit_keeps_the_dialog_open_with_errors() {
        // Arrange
        let mut app = creating_app();
        let session_count = app.matchmaking.sessions().len();

        // Act
        press(&mut app, KeyCode::Enter);

        // Assert
        let AppMode::CreateSession { form } = &app.mode else {
            panic!("dialog should stay open");
        };
        assert!(!form.errors.is_empty());
        assert_eq!(app.matchmaking.sessions().len(), session_count);
    }

    #[test]
    fn test_valid_submit_prepends_session_and_closes_the_dialog() {
        // Arrange
        let mut app = creating_app();
        let session_count = app.matchmaking.sessions().len();
        fill_required_fields(&mut app);

        // Act
        press(&mut app, KeyCode::Enter);

        // Assert
        assert!(matches!(app.mode, AppMode::Browse));
        assert_eq!(app.matchmaking.sessions().len(), session_count + 1);
        assert_eq!(app.matchmaking.sessions()[0].name, "friday night");
        assert_eq!(app.matchmaking_table.selected(), Some(0));
    }

    #[test]
    fn test_escape_discards_the_draft() {
        // Arrange
        let mut app = creating_app();
        let session_count = app.matchmaking.sessions().len();
        fill_required_fields(&mut app);

        // Act
        press(&mut app, KeyCode::Esc);

        // Assert
        assert!(matches!(app.mode, AppMode::Browse));
        assert_eq!(app.matchmaking.sessions().len(), session_count);
    }

    #[test]
    fn test_space_toggles_the_lock_switch_when_focused() {
        // Arrange
        let mut app = creating_app();
        // Move focus to the locked toggle.
        for _ in 0..6 {
            press(&mut app, KeyCode::Tab);
        }

        // Act
        press(&mut app, KeyCode::Char(' '));

        // Assert
        let AppMode::CreateSession { form } = &app.mode else {
            panic!("dialog should stay open");
        };
        assert_eq!(form.focused, FormField::Locked);
        assert!(form.locked);
    }
}
