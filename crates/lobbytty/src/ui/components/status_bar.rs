use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::Tab;
use crate::ui::Component;

/// Top bar with the app title and the tab strip.
pub struct StatusBar {
    current_tab: Tab,
}

impl StatusBar {
    pub fn new(current_tab: Tab) -> Self {
        Self { current_tab }
    }
}

impl Component for StatusBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let version = env!("CARGO_PKG_VERSION");
        let mut spans = vec![Span::styled(
            format!(" Lobbytty v{version}  "),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];

        for tab in Tab::ALL {
            let style = if tab == self.current_tab {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", tab.title()), style));
            spans.push(Span::raw(" "));
        }

        let status_bar = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(status_bar, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn test_status_bar_render_shows_all_tab_titles() {
        // Arrange
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        let status_bar = StatusBar::new(Tab::Matchmaking);

        // Act
        terminal
            .draw(|f| {
                let area = f.area();
                status_bar.render(f, area);
            })
            .expect("failed to draw");

        // Assert
        let buffer = terminal.backend().buffer();
        let text: String = buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        for tab in Tab::ALL {
            assert!(text.contains(tab.title()));
        }
        assert!(text.contains("Lobbytty"));
    }
}
