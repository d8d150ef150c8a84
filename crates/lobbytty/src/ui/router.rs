use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::TableState;

use crate::app::{RankedFilter, Tab};
use crate::domain::fixture::{GameCard, PracticeMode};
use crate::domain::session::Session;
use crate::ui::state::app_mode::AppMode;
use crate::ui::{Component, Page, RenderContext, components, pages};

/// Shared borrowed data for the tab page behind the current mode. Overlays
/// render on top of it.
struct TabBackgroundContext<'a> {
    current_tab: Tab,
    practice_modes: &'a [PracticeMode],
    practice_table_state: &'a mut TableState,
    ranked_cards: &'a [GameCard],
    ranked_filter: RankedFilter,
    search_query: &'a str,
    searching: bool,
    sessions: &'a [Session],
    table_state: &'a mut TableState,
}

/// Routes the content-area render path by active `AppMode`.
pub(crate) fn route_frame(f: &mut Frame, area: Rect, context: RenderContext<'_>) {
    let RenderContext {
        current_tab,
        join_target,
        mode,
        practice_modes,
        practice_table_state,
        ranked_cards,
        ranked_filter,
        search_query,
        sessions,
        table_state,
    } = context;

    let background = TabBackgroundContext {
        current_tab,
        practice_modes,
        practice_table_state,
        ranked_cards,
        ranked_filter,
        search_query,
        searching: matches!(mode, AppMode::Search),
        sessions,
        table_state,
    };

    render_tab_page(f, area, background);

    match mode {
        AppMode::Browse | AppMode::Search => {}
        AppMode::CreateSession { form } => {
            components::create_form_overlay::CreateFormOverlay::new(form).render(f, area);
        }
        AppMode::PasswordChallenge { input, failed } => {
            let session_name = join_target.map_or("", |session| session.name.as_str());
            components::password_overlay::PasswordOverlay::new(
                session_name,
                input.char_count(),
                *failed,
            )
            .render(f, area);
        }
        AppMode::TeamSelection {
            selected_option_index,
            error,
        } => {
            if let Some(session) = join_target {
                components::team_select_overlay::TeamSelectOverlay::new(
                    session,
                    *selected_option_index,
                    error.as_deref(),
                )
                .render(f, area);
            }
        }
        AppMode::ConfirmQuit {
            selected_confirmation_index,
        } => {
            components::confirmation_overlay::ConfirmationOverlay::new(
                "Confirm Quit",
                "Quit lobbytty?",
            )
            .selected_yes(*selected_confirmation_index == 0)
            .render(f, area);
        }
    }
}

/// Renders the current tab's page as the content background.
fn render_tab_page(f: &mut Frame, area: Rect, context: TabBackgroundContext<'_>) {
    match context.current_tab {
        Tab::Ranked => {
            pages::ranked::RankedPage {
                cards: context.ranked_cards,
                filter: context.ranked_filter,
            }
            .render(f, area);
        }
        Tab::Practice => {
            pages::practice::PracticePage {
                modes: context.practice_modes,
                table_state: context.practice_table_state,
            }
            .render(f, area);
        }
        Tab::Matchmaking | Tab::Training => {
            pages::lobby_list::LobbyListPage {
                sessions: context.sessions,
                table_state: context.table_state,
                search_query: context.search_query,
                searching: context.searching,
                title: context.current_tab.title(),
            }
            .render(f, area);
        }
    }
}
