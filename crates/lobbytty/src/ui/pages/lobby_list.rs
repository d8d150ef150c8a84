use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use crate::domain::session::{Session, Status};
use crate::ui::Page;
use crate::ui::util::truncate_with_ellipsis;

const ROW_HIGHLIGHT_SYMBOL: &str = ">> ";
const TABLE_COLUMN_SPACING: u16 = 1;
const LOCK_INDICATOR: char = '\u{1f512}'; // 🔒
const NAME_COLUMN_MAX_WIDTH: usize = 26;
const TEAM_BADGE_MAX_WIDTH: usize = 9;

/// Lobby list page for the matchmaking and training tabs: a search line on
/// top of a session table.
pub struct LobbyListPage<'a> {
    pub sessions: &'a [Session],
    pub table_state: &'a mut TableState,
    pub search_query: &'a str,
    pub searching: bool,
    pub title: &'static str,
}

impl Page for LobbyListPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .margin(1)
            .split(area);

        let search_area = chunks[0];
        let table_area = chunks[1];

        self.render_search_line(f, search_area);
        self.render_table(f, table_area);
    }
}

impl LobbyListPage<'_> {
    fn render_search_line(&self, f: &mut Frame, area: Rect) {
        let label_style = if self.searching {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![
            Span::styled(" Search: ", label_style),
            Span::raw(self.search_query.to_string()),
        ];
        if self.searching {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().fg(Color::Cyan),
            ));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_table(&mut self, f: &mut Frame, area: Rect) {
        let selected_style = Style::default().bg(Color::DarkGray);
        let normal_style = Style::default().bg(Color::Gray).fg(Color::Black);
        let header_cells = ["Name", "Map", "Weapon", "Players", "Teams", "Score", "Status"]
            .iter()
            .map(|h| Cell::from(*h));
        let header = Row::new(header_cells)
            .style(normal_style)
            .height(1)
            .bottom_margin(1);

        let block = Block::default().borders(Borders::ALL).title(self.title);
        let column_constraints = [
            Constraint::Min(0),
            Constraint::Length(12),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(28),
            Constraint::Length(7),
            Constraint::Length(11),
        ];
        let rows = self.sessions.iter().map(|session| {
            let cells = vec![
                Cell::from(display_name(session)),
                Cell::from(session.map.label()),
                Cell::from(session.weapon.label()),
                Cell::from(format!(
                    "{}/{}",
                    session.team_counts.total(),
                    session.max_players_total()
                )),
                Cell::from(teams_text(session)),
                Cell::from(score_text(session)),
                Cell::from(session.status.to_string())
                    .style(Style::default().fg(session.status.color())),
            ];
            Row::new(cells).height(1)
        });
        let table = Table::new(rows, column_constraints)
            .column_spacing(TABLE_COLUMN_SPACING)
            .header(header)
            .block(block)
            .row_highlight_style(selected_style)
            .highlight_symbol(ROW_HIGHLIGHT_SYMBOL);

        f.render_stateful_widget(table, area, self.table_state);
    }
}

/// Session name truncated for its column, with a lock marker for
/// password-protected lobbies.
fn display_name(session: &Session) -> String {
    let name = truncate_with_ellipsis(&session.name, NAME_COLUMN_MAX_WIDTH);
    if session.is_locked() {
        format!("{LOCK_INDICATOR} {name}")
    } else {
        name
    }
}

/// Per-team name badges with their fill, names shortened to keep the column
/// narrow.
fn teams_text(session: &Session) -> String {
    let defenders = truncate_with_ellipsis(&session.team_names.defenders, TEAM_BADGE_MAX_WIDTH);
    let attackers = truncate_with_ellipsis(&session.team_names.attackers, TEAM_BADGE_MAX_WIDTH);

    format!(
        "{defenders} {}/{max} {attackers} {}/{max}",
        session.team_counts.defenders,
        session.team_counts.attackers,
        max = session.max_per_team
    )
}

fn score_text(session: &Session) -> String {
    match session.status {
        Status::InProgress => format!("{}:{}", session.score.0, session.score.1),
        Status::Waiting => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::domain::fixture::Fixtures;

    fn render_to_text(page: &mut LobbyListPage<'_>) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                page.render(f, area);
            })
            .expect("failed to draw");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_lobby_list_renders_names_scores_and_lock_marker() {
        // Arrange
        let fixtures = Fixtures::embedded().expect("embedded fixtures must parse");
        let mut table_state = TableState::default();
        let mut page = LobbyListPage {
            sessions: &fixtures.matchmaking,
            table_state: &mut table_state,
            search_query: "",
            searching: false,
            title: "Matchmaking",
        };

        // Act
        let text = render_to_text(&mut page);

        // Assert
        assert!(text.contains("night-owls only"));
        assert!(text.contains(LOCK_INDICATOR));
        assert!(text.contains("In progress"));
        assert!(text.contains("10:10"));
    }

    #[test]
    fn test_lobby_list_renders_team_badges_per_row() {
        // Arrange
        let fixtures = Fixtures::embedded().expect("embedded fixtures must parse");
        let mut table_state = TableState::default();
        let mut page = LobbyListPage {
            sessions: &fixtures.matchmaking,
            table_state: &mut table_state,
            search_query: "",
            searching: false,
            title: "Matchmaking",
        };

        // Act
        let text = render_to_text(&mut page);

        // Assert: the "system lobby" row shows both teams at capacity
        assert!(text.contains("Teams"));
        assert!(text.contains("Defenders 5/5 Attackers 5/5"));
    }

    #[test]
    fn test_lobby_list_renders_active_search_query() {
        // Arrange
        let fixtures = Fixtures::embedded().expect("embedded fixtures must parse");
        let mut table_state = TableState::default();
        let mut page = LobbyListPage {
            sessions: &fixtures.training,
            table_state: &mut table_state,
            search_query: "drills",
            searching: true,
            title: "Training",
        };

        // Act
        let text = render_to_text(&mut page);

        // Assert
        assert!(text.contains("Search: drills"));
    }
}
