// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! UI rendering logic for the entity table.
//!
//! Error and empty outcomes render as a single full-width alert line in
//! place of the table body; rows render as a stateful table with the
//! pagination label in a one-line footer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Cell, Paragraph, Row, Table},
};

use crate::{
    components::entity_list::{EntityListState, ListStatus},
    theme::Theme,
};

impl EntityListState {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        match self.status.clone() {
            ListStatus::Error(message) => {
                draw_alert(f, chunks[0], &message, theme.alert_error_fg)
            }
            ListStatus::Empty => draw_alert(f, chunks[0], "Empty list", theme.alert_info_fg),
            ListStatus::Loading if self.rows.is_empty() => {
                draw_alert(f, chunks[0], "Loading...", theme.alert_info_fg)
            }
            _ => self.draw_table(f, chunks[0], theme),
        }

        self.draw_pagination(f, chunks[1], theme);
    }

    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.rows.iter().map(|row| {
            Row::new(
                row.cells
                    .iter()
                    .map(|cell| Cell::from(cell.as_str()))
                    .collect::<Vec<_>>(),
            )
            .style(Style::default().fg(theme.table_row_fg))
        });

        let widths: Vec<Constraint> = self.columns.iter().map(|column| column.width).collect();

        let table = Table::new(rows, widths)
            .header(
                Row::new(
                    self.columns
                        .iter()
                        .map(|column| Cell::from(column.title))
                        .collect::<Vec<_>>(),
                )
                .style(Style::default().bold().fg(theme.accent_colour))
                .bottom_margin(1),
            )
            .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn draw_pagination(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let prev = if self.pagination.has_prev { "‹" } else { " " };
        let next = if self.pagination.has_next { "›" } else { " " };
        let label = format!("{} page {} {}", prev, self.pagination.label(), next);

        f.render_widget(
            Paragraph::new(Line::from(label).alignment(Alignment::Right))
                .style(Style::default().fg(theme.status_fg)),
            area,
        );
    }
}

fn draw_alert(f: &mut Frame, area: Rect, message: &str, fg: Color) {
    let container = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .vertical_margin(1)
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(message.to_string()).alignment(Alignment::Center))
            .style(Style::default().fg(fg)),
        container[0],
    );
}
