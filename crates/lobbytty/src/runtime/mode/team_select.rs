use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::app::join::JoinError;
use crate::domain::session::{Category, Team};
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

const DEFENDERS_OPTION_INDEX: usize = 0;
const ATTACKERS_OPTION_INDEX: usize = 1;

/// Handles key input in the team picker. Option order matches the overlay:
/// defenders, attackers, then spectate on training lobbies.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    let Some(category) = app.current_tab.lobby_category() else {
        return EventResult::Continue;
    };
    let option_count = if category.allows_spectators() { 3 } else { 2 };

    match key.code {
        KeyCode::Esc => {
            app.join.cancel();
            app.mode = AppMode::Browse;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if let AppMode::TeamSelection {
                selected_option_index,
                ..
            } = &mut app.mode
            {
                *selected_option_index = (*selected_option_index + 1) % option_count;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if let AppMode::TeamSelection {
                selected_option_index,
                ..
            } = &mut app.mode
            {
                *selected_option_index =
                    (*selected_option_index + option_count - 1) % option_count;
            }
        }
        KeyCode::Enter => choose(app, category),
        _ => {}
    }

    EventResult::Continue
}

fn choose(app: &mut App, category: Category) {
    let AppMode::TeamSelection {
        selected_option_index,
        ..
    } = &app.mode
    else {
        return;
    };
    let option_index = *selected_option_index;

    let result = match option_index {
        DEFENDERS_OPTION_INDEX | ATTACKERS_OPTION_INDEX => {
            let team = if option_index == DEFENDERS_OPTION_INDEX {
                Team::Defenders
            } else {
                Team::Attackers
            };
            match category {
                Category::Matchmaking => app.join.choose_team(&mut app.matchmaking, team),
                Category::Training => app.join.choose_team(&mut app.training, team),
            }
        }
        _ => match category {
            Category::Matchmaking => app.join.choose_spectator(&app.matchmaking),
            Category::Training => app.join.choose_spectator(&app.training),
        },
    };

    match result {
        Ok(()) => {
            app.mode = AppMode::Browse;
        }
        Err(error @ (JoinError::TeamFull { .. } | JoinError::UnsupportedOperation)) => {
            if let AppMode::TeamSelection { error: slot, .. } = &mut app.mode {
                *slot = Some(error.to_string());
            }
        }
        // The flow aborted.
        Err(_) => {
            app.mode = AppMode::Browse;
        }
    }
}
