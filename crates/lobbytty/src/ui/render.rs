use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, TableState};

use crate::app::{RankedFilter, Tab};
use crate::domain::fixture::{GameCard, PracticeMode};
use crate::domain::session::Session;
use crate::ui::state::app_mode::AppMode;
use crate::ui::{components, router};

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    /// Renders a page in the provided frame and area.
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    /// Renders a component in the provided frame and area.
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Immutable data required to draw a single UI frame.
///
/// `sessions` is the current lobby tab's filtered snapshot; table selection
/// indices refer to it.
pub struct RenderContext<'a> {
    pub current_tab: Tab,
    pub join_target: Option<&'a Session>,
    pub mode: &'a AppMode,
    pub practice_modes: &'a [PracticeMode],
    pub practice_table_state: &'a mut TableState,
    pub ranked_cards: &'a [GameCard],
    pub ranked_filter: RankedFilter,
    pub search_query: &'a str,
    pub sessions: &'a [Session],
    pub table_state: &'a mut TableState,
}

/// Renders a complete frame including status bar, content area, and footer.
pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let area = f.area();
    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let status_bar_area = outer_chunks[0];
    let content_area = outer_chunks[1];
    let footer_bar_area = outer_chunks[2];

    components::status_bar::StatusBar::new(context.current_tab).render(f, status_bar_area);
    render_footer_bar(f, footer_bar_area, context.mode, context.current_tab);

    router::route_frame(f, content_area, context);
}

/// Renders the footer with the key hints of the active mode.
fn render_footer_bar(f: &mut Frame, footer_bar_area: Rect, mode: &AppMode, current_tab: Tab) {
    let hints = match mode {
        AppMode::Browse => match current_tab {
            Tab::Ranked => "q: quit | Tab: switch tab | f: filter",
            Tab::Practice => "q: quit | Tab: switch tab | j/k: nav | 1/2/3: difficulty",
            Tab::Matchmaking | Tab::Training => {
                "q: quit | Tab: switch tab | j/k: nav | /: search | c: create | Enter: join"
            }
        },
        AppMode::Search => "type to filter | Enter/Esc: done",
        AppMode::CreateSession { .. } => {
            "Tab/S-Tab: field | Left/Right: option | Enter: create | Esc: cancel"
        }
        AppMode::PasswordChallenge { .. } => "Enter: submit | Esc: cancel",
        AppMode::TeamSelection { .. } => "j/k: choose | Enter: join | Esc: cancel",
        AppMode::ConfirmQuit { .. } => "y/n | Left/Right | Enter: confirm",
    };

    let footer = Paragraph::new(format!(" {hints}"))
        .style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    f.render_widget(footer, footer_bar_area);
}
