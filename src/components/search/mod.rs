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

//! Search input component.
//!
//! A managed text input for search-as-you-type. Every edit restarts the
//! shared debounce timer; only the timer firing (or an explicit Enter)
//! dispatches a query, so a fast typist produces one request, not one per
//! keystroke.

mod event;
mod render;

use tui_input::Input;

pub(crate) use event::SearchAction;

pub(crate) struct SearchView {
    pub(crate) input: Input,
    pub(crate) focused: bool,
}

impl SearchView {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            focused: false,
        }
    }

    pub(crate) fn focus(&mut self) {
        self.focused = true;
    }
}
