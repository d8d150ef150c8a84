use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};

use crate::domain::fixture::{Difficulty, PracticeMode};
use crate::ui::Page;

const ROW_HIGHLIGHT_SYMBOL: &str = ">> ";
const TABLE_COLUMN_SPACING: u16 = 1;

/// Practice page: drill cards with per-difficulty availability. Unavailable
/// difficulties render dimmed so the disabled keys are visible.
pub struct PracticePage<'a> {
    pub modes: &'a [PracticeMode],
    pub table_state: &'a mut TableState,
}

impl Page for PracticePage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let selected_style = Style::default().bg(Color::DarkGray);
        let normal_style = Style::default().bg(Color::Gray).fg(Color::Black);
        let header_cells = ["Drill", "Location", "Players", "Time", "Difficulty"]
            .iter()
            .map(|h| Cell::from(*h));
        let header = Row::new(header_cells)
            .style(normal_style)
            .height(1)
            .bottom_margin(1);

        let block = Block::default().borders(Borders::ALL).title("Practice");
        let column_constraints = [
            Constraint::Min(0),
            Constraint::Length(14),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Length(20),
        ];
        let rows = self.modes.iter().map(|mode| {
            let cells = vec![
                Cell::from(mode.mode.clone())
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(mode.location.clone()),
                Cell::from(mode.players.to_string()),
                Cell::from(mode.time.clone()),
                Cell::from(difficulty_line(mode)),
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

fn difficulty_line(mode: &PracticeMode) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, difficulty) in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        .into_iter()
        .enumerate()
    {
        let style = if mode.supports(difficulty) {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        };
        spans.push(Span::styled(
            format!("{}:{}", index + 1, difficulty.label()),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}
