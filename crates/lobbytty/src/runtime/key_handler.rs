use crossterm::event::KeyEvent;

use crate::app::App;
use crate::runtime::{EventResult, mode};
use crate::ui::state::app_mode::AppMode;

pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    match &app.mode {
        AppMode::Browse => mode::browse::handle(app, key),
        AppMode::Search => mode::search::handle(app, key),
        AppMode::CreateSession { .. } => mode::create::handle(app, key),
        AppMode::PasswordChallenge { .. } => mode::password::handle(app, key),
        AppMode::TeamSelection { .. } => mode::team_select::handle(app, key),
        AppMode::ConfirmQuit { .. } => mode::confirmation::handle(app, key),
    }
}
