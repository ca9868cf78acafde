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

//! Rendering for the search input line.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{components::SearchView, theme::Theme};

const PROMPT: &str = "Search: ";

impl SearchView {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let container = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1)])
            .horizontal_margin(1)
            .split(area);

        let style = if self.focused {
            Style::default().fg(theme.accent_colour)
        } else {
            Style::default().fg(theme.status_fg)
        };

        f.render_widget(
            Paragraph::new(format!("{PROMPT}{}", self.input.value())).style(style),
            container[0],
        );

        if self.focused {
            let cursor_x = container[0].x + (PROMPT.len() + self.input.cursor()) as u16;
            f.set_cursor_position((cursor_x, container[0].y));
        }
    }
}
