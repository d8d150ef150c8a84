use crossterm::event::{KeyCode, KeyEvent};

use crate::app::form::SessionForm;
use crate::app::join::{JoinFlow, JoinState};
use crate::app::{App, Tab};
use crate::domain::fixture::Difficulty;
use crate::domain::input::InputState;
use crate::runtime::EventResult;
use crate::runtime::mode::confirmation::DEFAULT_OPTION_INDEX;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while browsing a tab.
///
/// Pressing `q` opens a confirmation overlay instead of quitting immediately,
/// with `No` selected by default.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => {
            app.mode = AppMode::ConfirmQuit {
                selected_confirmation_index: DEFAULT_OPTION_INDEX,
            };
        }
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.previous_tab(),
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.previous(),
        KeyCode::Char('/') if app.current_tab.lobby_category().is_some() => {
            app.mode = AppMode::Search;
        }
        KeyCode::Char('c') => {
            if let Some(category) = app.current_tab.lobby_category() {
                app.mode = AppMode::CreateSession {
                    form: SessionForm::new(category),
                };
            }
        }
        KeyCode::Char('f') if app.current_tab == Tab::Ranked => {
            app.cycle_ranked_filter();
        }
        KeyCode::Char('1') if app.current_tab == Tab::Practice => {
            start_practice_drill(app, Difficulty::Easy);
        }
        KeyCode::Char('2') if app.current_tab == Tab::Practice => {
            start_practice_drill(app, Difficulty::Medium);
        }
        KeyCode::Char('3') if app.current_tab == Tab::Practice => {
            start_practice_drill(app, Difficulty::Hard);
        }
        KeyCode::Enter if app.current_tab.lobby_category().is_some() => {
            start_join(app);
        }
        _ => {}
    }

    EventResult::Continue
}

/// Starts a join flow for the selected lobby. Sessions already in progress
/// are rejected by the flow and the app stays in browse mode.
fn start_join(app: &mut App) {
    let Some(session) = app.selected_session() else {
        return;
    };

    app.join = JoinFlow::new();
    if app.join.select_session(&session).is_err() {
        return;
    }

    app.mode = match app.join.state() {
        JoinState::PasswordChallenge { .. } => AppMode::PasswordChallenge {
            input: InputState::new(),
            failed: false,
        },
        JoinState::TeamSelection { .. } => AppMode::TeamSelection {
            selected_option_index: 0,
            error: None,
        },
        JoinState::Idle | JoinState::Committed { .. } | JoinState::Aborted => AppMode::Browse,
    };
}

/// Selecting a disabled difficulty does nothing.
fn start_practice_drill(app: &App, difficulty: Difficulty) {
    if let Some(drill) = app.selected_practice_mode()
        && drill.supports(difficulty)
    {
        tracing::info!(
            drill = %drill.mode,
            difficulty = difficulty.label(),
            "practice drill selected"
        );
    }
}
