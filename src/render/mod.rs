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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod commander;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Paragraph, Tabs},
};

use crate::{App, nav::ViewId, render::commander::draw_commander};

/// Renders the user interface to the terminal frame.
///
/// This function calculates the layout constraints and populates the frame
/// with widgets based on the current state of the [`App`].
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into the view tab bar, the active
///   list, and the status and command lines.
/// * **State Mapping**: Converting application data (the active view's
///   rows, pagination and status) into widgets.
/// * **Styling**: Applying colors defined in the application theme.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: tab bar, main, status, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_tabs(f, outer[0], app);

    let view = app.router.view();
    match view {
        ViewId::Search => {
            // The search view carries its input line above the results.
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(outer[1]);

            app.search_view.draw(f, chunks[0], &app.theme);
            let theme = app.theme;
            app.list_mut(view).draw(f, chunks[1], &theme);
        }
        _ => {
            let theme = app.theme;
            app.list_mut(view).draw(f, outer[1], &theme);
        }
    }

    draw_status(f, outer[2], app);

    draw_commander(f, outer[3], app);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<String> = ViewId::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| format!("{} {}", i + 1, view.title()))
        .collect();

    let selected = ViewId::ALL
        .iter()
        .position(|view| *view == app.router.view())
        .unwrap_or(0);

    f.render_widget(
        Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(app.theme.status_fg))
            .highlight_style(Style::default().bold().fg(app.theme.accent_colour)),
        area,
    );
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let Some(notice) = &app.notice else {
        return;
    };

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    f.render_widget(
        Paragraph::new(notice.as_str()).style(Style::default().fg(app.theme.alert_info_fg)),
        container[0],
    );
}
