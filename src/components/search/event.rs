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

//! Input handling for the search component.
//!
//! Delegates editing keys to the managed input and restarts the debounce
//! timer on every change. Enter bypasses the timer and submits at once.

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::backend::crossterm::EventHandler;

use crate::{components::SearchView, util::debounce::Debouncer};

#[derive(Debug, PartialEq)]
pub(crate) enum SearchAction {
    Submit(String),
}

impl SearchView {
    /// Processes one key while the input is focused.
    pub(crate) fn process_key(
        &mut self,
        key: KeyEvent,
        debouncer: &Debouncer,
    ) -> Option<SearchAction> {
        match key.code {
            KeyCode::Esc => {
                self.focused = false;
                debouncer.cancel();
                None
            }

            KeyCode::Enter => {
                debouncer.cancel();
                Some(SearchAction::Submit(self.input.value().to_string()))
            }

            _ => {
                let before = self.input.value().to_string();
                self.input.handle_event(&Event::Key(key));
                if self.input.value() != before {
                    debouncer.restart(self.input.value().to_string());
                }
                None
            }
        }
    }
}
