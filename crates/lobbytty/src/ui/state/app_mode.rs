use crate::app::form::SessionForm;
use crate::domain::input::InputState;

/// Active interaction mode. Overlay modes carry their own dialog state so
/// closing the overlay drops it.
pub enum AppMode {
    /// Browsing the current tab's list.
    Browse,
    /// Editing the current lobby tab's search box. The query itself lives on
    /// the app so the filter stays applied after the box loses focus.
    Search,
    CreateSession {
        form: SessionForm,
    },
    PasswordChallenge {
        input: InputState,
        failed: bool,
    },
    TeamSelection {
        selected_option_index: usize,
        error: Option<String>,
    },
    ConfirmQuit {
        selected_confirmation_index: usize,
    },
}
