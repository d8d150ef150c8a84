use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::domain::session::{Session, Team};
use crate::ui::Component;
use crate::ui::util::{overlay_area, truncate_with_ellipsis};

const MIN_OVERLAY_HEIGHT: u16 = 9;
const MIN_OVERLAY_WIDTH: u16 = 38;
const OVERLAY_HEIGHT_PERCENT: u16 = 30;
const OVERLAY_WIDTH_PERCENT: u16 = 40;

/// Team picker shown after the join target is resolved. Option order is
/// defenders, attackers, then spectate on training lobbies; key handling
/// relies on the same order.
pub struct TeamSelectOverlay<'a> {
    session: &'a Session,
    selected_option_index: usize,
    error: Option<&'a str>,
}

impl<'a> TeamSelectOverlay<'a> {
    pub fn new(session: &'a Session, selected_option_index: usize, error: Option<&'a str>) -> Self {
        Self {
            session,
            selected_option_index,
            error,
        }
    }

    fn option_line(&self, index: usize, label: String, full: bool) -> Line<'static> {
        let style = if index == self.selected_option_index {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if full {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        let suffix = if full { "  FULL" } else { "" };

        Line::from(Span::styled(format!(" {label}{suffix} "), style))
    }
}

impl Component for TeamSelectOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = overlay_area(
            area,
            OVERLAY_WIDTH_PERCENT,
            OVERLAY_HEIGHT_PERCENT,
            MIN_OVERLAY_WIDTH,
            MIN_OVERLAY_HEIGHT,
        );
        let name_width = usize::from(popup_area.width.saturating_sub(4));
        let session_name = truncate_with_ellipsis(&self.session.name, name_width);

        let mut lines = vec![
            Line::from(Span::styled(
                session_name,
                Style::default().fg(Color::White),
            )),
            Line::from(""),
        ];
        for (index, team) in [Team::Defenders, Team::Attackers].into_iter().enumerate() {
            let label = format!(
                "{} {}/{}",
                self.session.team_names.get(team),
                self.session.team_counts.get(team),
                self.session.max_per_team
            );
            lines.push(self.option_line(index, label, !self.session.has_room(team)));
        }
        if self.session.map.category().allows_spectators() {
            lines.push(self.option_line(2, "Spectate".to_string(), false));
        }
        if let Some(error) = self.error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            )));
        }

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    " Choose Team ",
                    Style::default().fg(Color::Cyan),
                )),
        );

        f.render_widget(Clear, popup_area);
        f.render_widget(paragraph, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::domain::session::{Category, SessionDraft, Weapon};

    fn session(category: Category) -> Session {
        Session::from_draft(
            1,
            SessionDraft {
                name: "warmup round".to_string(),
                map: category.maps()[0],
                weapon: Weapon::Rifle,
                max_players_total: 6,
                team_names: category.default_team_names(),
                password: None,
            },
        )
    }

    fn render_to_text(overlay: &TeamSelectOverlay<'_>) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                overlay.render(f, area);
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
    fn test_team_select_overlay_shows_occupancy_per_team() {
        // Arrange
        let session = session(Category::Matchmaking);
        let overlay = TeamSelectOverlay::new(&session, 0, None);

        // Act
        let text = render_to_text(&overlay);

        // Assert
        assert!(text.contains("Defenders 0/3"));
        assert!(text.contains("Attackers 0/3"));
        assert!(!text.contains("Spectate"));
    }

    #[test]
    fn test_team_select_overlay_offers_spectate_on_training_lobbies() {
        // Arrange
        let session = session(Category::Training);
        let overlay = TeamSelectOverlay::new(&session, 2, None);

        // Act
        let text = render_to_text(&overlay);

        // Assert
        assert!(text.contains("Spectate"));
    }

    #[test]
    fn test_team_select_overlay_renders_inline_error() {
        // Arrange
        let session = session(Category::Matchmaking);
        let overlay = TeamSelectOverlay::new(&session, 1, Some("the defenders team is full"));

        // Act
        let text = render_to_text(&overlay);

        // Assert
        assert!(text.contains("the defenders team is full"));
    }
}
