use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Component;
use crate::ui::util::{overlay_area, truncate_with_ellipsis};

const MIN_OVERLAY_HEIGHT: u16 = 7;
const MIN_OVERLAY_WIDTH: u16 = 30;
const OVERLAY_HEIGHT_PERCENT: u16 = 20;
const OVERLAY_WIDTH_PERCENT: u16 = 40;

/// Centered yes/no confirmation popup.
///
/// The message body is truncated to one visible line so the options stay on
/// screen in narrow terminals.
pub struct ConfirmationOverlay<'a> {
    message: &'a str,
    selected_yes: bool,
    title: &'a str,
}

impl<'a> ConfirmationOverlay<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self {
            message,
            selected_yes: false,
            title,
        }
    }

    /// Sets whether the "Yes" option is currently selected.
    #[must_use]
    pub fn selected_yes(mut self, yes: bool) -> Self {
        self.selected_yes = yes;
        self
    }
}

impl Component for ConfirmationOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = overlay_area(
            area,
            OVERLAY_WIDTH_PERCENT,
            OVERLAY_HEIGHT_PERCENT,
            MIN_OVERLAY_WIDTH,
            MIN_OVERLAY_HEIGHT,
        );
        let message_width = usize::from(popup_area.width.saturating_sub(4));
        let message = truncate_with_ellipsis(self.message, message_width);

        let selected_option_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let unselected_option_style = Style::default().fg(Color::White);
        let (yes_option_style, no_option_style) = if self.selected_yes {
            (selected_option_style, unselected_option_style)
        } else {
            (unselected_option_style, selected_option_style)
        };

        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(message, Style::default().fg(Color::White))),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Yes ", yes_option_style),
                Span::raw("   "),
                Span::styled(" No ", no_option_style),
            ]),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(Span::styled(
                    format!(" {} ", self.title),
                    Style::default().fg(Color::Yellow),
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

    #[test]
    fn test_confirmation_overlay_renders_title_message_and_options() {
        // Arrange
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        let overlay = ConfirmationOverlay::new("Confirm Quit", "Quit lobbytty?").selected_yes(false);

        // Act
        terminal
            .draw(|f| {
                let area = f.area();
                overlay.render(f, area);
            })
            .expect("failed to draw");

        // Assert
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains("Confirm Quit"));
        assert!(text.contains("Quit lobbytty?"));
        assert!(text.contains("Yes"));
        assert!(text.contains("No"));
    }
}
