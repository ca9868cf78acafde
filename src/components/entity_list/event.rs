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

//! Input handling for the entity table.
//!
//! Maps keyboard events to cursor movement within the current page.
//! Activation is returned as a [`ListAction`] for the owning view to
//! resolve; the table itself does not know what a row means.

use crossterm::event::{KeyCode, KeyEvent};

use crate::components::entity_list::{EntityListState, ListAction};

impl EntityListState {
    pub(crate) fn process_key(&mut self, key: KeyEvent) -> Option<ListAction> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),

            KeyCode::Enter => {
                return self
                    .selected_entity()
                    .cloned()
                    .map(ListAction::Activate);
            }

            _ => {}
        }

        None
    }

    fn goto_next(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(self.rows.len() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::layout::Constraint;
    use serde_json::json;

    use crate::components::entity_list::{Column, EntityListState, ListAction};

    fn populated_list() -> EntityListState {
        let mut list =
            EntityListState::new(vec![Column::new("Title", "Title", Constraint::Min(1))]);
        let response = serde_json::from_value(json!({
            "result": {
                "data": [{"Title": "a"}, {"Title": "b"}, {"Title": "c"}],
                "totalEntities": 3,
                "returnedEntities": 3,
                "offset": 0
            }
        }))
        .unwrap();
        list.apply_result(&response, true, 0, 25);
        list
    }

    #[test]
    fn cursor_wraps_around() {
        let mut list = populated_list();
        assert_eq!(list.table_state.selected(), Some(0));

        list.process_key(KeyEvent::from(KeyCode::Char('k')));
        assert_eq!(list.table_state.selected(), Some(2));

        list.process_key(KeyEvent::from(KeyCode::Char('j')));
        assert_eq!(list.table_state.selected(), Some(0));
    }

    #[test]
    fn enter_activates_the_selected_entity() {
        let mut list = populated_list();
        list.process_key(KeyEvent::from(KeyCode::Char('j')));

        let action = list.process_key(KeyEvent::from(KeyCode::Enter));

        match action {
            Some(ListAction::Activate(entity)) => {
                assert_eq!(entity.str_field("Title"), Some("b"));
            }
            other => panic!("expected activation, got {other:?}"),
        }
    }
}
