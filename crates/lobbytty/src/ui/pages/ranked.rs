use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::app::RankedFilter;
use crate::domain::fixture::GameCard;
use crate::ui::Page;

const TABLE_COLUMN_SPACING: u16 = 1;

/// Ranked page: read-only mode cards narrowed by the weapon-tag filter.
pub struct RankedPage<'a> {
    pub cards: &'a [GameCard],
    pub filter: RankedFilter,
}

impl Page for RankedPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let normal_style = Style::default().bg(Color::Gray).fg(Color::Black);
        let header_cells = ["Mode", "Type", "Location", "Players", "Time", "Weapons"]
            .iter()
            .map(|h| Cell::from(*h));
        let header = Row::new(header_cells)
            .style(normal_style)
            .height(1)
            .bottom_margin(1);

        let title = format!("Ranked (filter: {})", self.filter.label());
        let block = Block::default().borders(Borders::ALL).title(title);
        let column_constraints = [
            Constraint::Min(0),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Length(8),
        ];
        let rows = self.cards.iter().map(|card| {
            let cells = vec![
                Cell::from(card.mode.clone())
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(card.game_type.clone().unwrap_or_default()),
                Cell::from(card.location.clone()),
                Cell::from(card.players.to_string()),
                Cell::from(card.time.clone()),
                Cell::from(card.weapon_tag.clone())
                    .style(Style::default().fg(Color::Yellow)),
            ];
            Row::new(cells).height(1)
        });
        let table = Table::new(rows, column_constraints)
            .column_spacing(TABLE_COLUMN_SPACING)
            .header(header)
            .block(block);

        f.render_widget(table, area);
    }
}
