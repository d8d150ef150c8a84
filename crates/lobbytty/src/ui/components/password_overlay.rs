use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ui::Component;
use crate::ui::util::{overlay_area, truncate_with_ellipsis};

const MIN_OVERLAY_HEIGHT: u16 = 7;
const MIN_OVERLAY_WIDTH: u16 = 34;
const OVERLAY_HEIGHT_PERCENT: u16 = 20;
const OVERLAY_WIDTH_PERCENT: u16 = 40;
const MASK_CHAR: char = '*';

/// Password prompt for locked sessions. Input is masked; a failed attempt
/// shows an inline error and keeps the prompt open.
pub struct PasswordOverlay<'a> {
    session_name: &'a str,
    typed_char_count: usize,
    failed: bool,
}

impl<'a> PasswordOverlay<'a> {
    pub fn new(session_name: &'a str, typed_char_count: usize, failed: bool) -> Self {
        Self {
            session_name,
            typed_char_count,
            failed,
        }
    }
}

impl Component for PasswordOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = overlay_area(
            area,
            OVERLAY_WIDTH_PERCENT,
            OVERLAY_HEIGHT_PERCENT,
            MIN_OVERLAY_WIDTH,
            MIN_OVERLAY_HEIGHT,
        );
        let name_width = usize::from(popup_area.width.saturating_sub(4));
        let session_name = truncate_with_ellipsis(self.session_name, name_width);

        let masked = MASK_CHAR.to_string().repeat(self.typed_char_count);
        let error_line = if self.failed {
            Line::from(Span::styled(
                "Incorrect password, try again",
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(
                session_name,
                Style::default().fg(Color::White),
            )),
            Line::from(vec![
                Span::styled("Password: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    masked,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            error_line,
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    " Locked Session ",
                    Style::default().fg(Color::Cyan),
                )),
        );

        f.render_widget(Clear, popup_area);
        f.render_widget(paragraph, popup_area);
    }
}
