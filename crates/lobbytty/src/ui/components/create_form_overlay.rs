use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::form::{FormField, SessionForm};
use crate::ui::Component;
use crate::ui::util::overlay_area;

const MIN_OVERLAY_HEIGHT: u16 = 14;
const MIN_OVERLAY_WIDTH: u16 = 48;
const OVERLAY_HEIGHT_PERCENT: u16 = 60;
const OVERLAY_WIDTH_PERCENT: u16 = 50;
const MASK_CHAR: char = '*';
const UNSET_PLACEHOLDER: &str = "select";

/// Create-session dialog. Fields with a validation error from the last
/// submit attempt carry the error message inline.
pub struct CreateFormOverlay<'a> {
    form: &'a SessionForm,
}

impl<'a> CreateFormOverlay<'a> {
    pub fn new(form: &'a SessionForm) -> Self {
        Self { form }
    }

    fn label_style(&self, field: FormField) -> Style {
        if self.form.focused == field {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    fn field_line(&self, field: FormField, value: String) -> Line<'static> {
        let mut spans = vec![
            Span::styled(format!(" {:<14}", field.label()), self.label_style(field)),
            Span::styled(value, Style::default().fg(Color::White)),
        ];
        if let Some(error) = self.form.errors.get(field) {
            spans.push(Span::styled(
                format!("  {error}"),
                Style::default().fg(Color::Red),
            ));
        }

        Line::from(spans)
    }

    fn selection_value(value: Option<&str>) -> String {
        match value {
            Some(value) => format!("< {value} >"),
            None => format!("< {UNSET_PLACEHOLDER} >"),
        }
    }
}

impl Component for CreateFormOverlay<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let popup_area = overlay_area(
            area,
            OVERLAY_WIDTH_PERCENT,
            OVERLAY_HEIGHT_PERCENT,
            MIN_OVERLAY_WIDTH,
            MIN_OVERLAY_HEIGHT,
        );

        let max_players_value = self
            .form
            .max_players_total()
            .map(|total| total.to_string());
        let mut lines = vec![
            self.field_line(FormField::Name, self.form.name.text().to_string()),
            self.field_line(
                FormField::Map,
                Self::selection_value(self.form.map().map(|map| map.label())),
            ),
            self.field_line(
                FormField::Weapon,
                Self::selection_value(self.form.weapon().map(|weapon| weapon.label())),
            ),
            self.field_line(
                FormField::MaxPlayers,
                Self::selection_value(max_players_value.as_deref()),
            ),
            self.field_line(
                FormField::DefenderName,
                self.form.defender_name.text().to_string(),
            ),
            self.field_line(
                FormField::AttackerName,
                self.form.attacker_name.text().to_string(),
            ),
            self.field_line(
                FormField::Locked,
                if self.form.locked { "[x]" } else { "[ ]" }.to_string(),
            ),
        ];
        if self.form.locked {
            lines.push(self.field_line(
                FormField::Password,
                MASK_CHAR.to_string().repeat(self.form.password.char_count()),
            ));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    " New Session ",
                    Style::default().fg(Color::Cyan),
                )),
        );

        f.render_widget(Clear, popup_area);
        f.render_widget(paragraph, popup_area);
    }
}
