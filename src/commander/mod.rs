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

//! Command-line input logic and state management.
//!
//! This module implements the logic for a command-line processing
//! component, handling a text input component, and dispatching a
//! corresponding application event when typing is finished and a command
//! is submitted.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    actions::events::AppEvent,
    nav::{NavTarget, Sort, ViewId},
};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn handle_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> bool {
        if self.active {
            match event {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Esc => {
                        self.active = false;
                        self.input.reset();
                        true
                    }

                    KeyCode::Enter => {
                        let buffer = self.input.value().trim().to_string();
                        if !buffer.is_empty() {
                            let _ = self.run_command(&buffer, event_tx);
                        }
                        self.input.reset();
                        self.active = false;
                        true
                    }

                    _ => {
                        // Delegate all other key events to the managed
                        // input component.
                        self.input.handle_event(&event);
                        true
                    }
                },

                _ => false,
            }
        } else {
            match event {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Char(':') => {
                        self.active = true;
                        true
                    }

                    _ => false,
                },

                _ => false,
            }
        }
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        let parts: Vec<&str> = buffer.split_whitespace().collect();

        match parts.as_slice() {
            ["q"] => event_tx.send(AppEvent::ExitApplication)?,

            ["r"] => event_tx.send(AppEvent::Refresh)?,

            ["n"] => event_tx.send(AppEvent::NextPage)?,
            ["p"] => event_tx.send(AppEvent::PrevPage)?,

            ["limit", value] => match value.parse::<usize>() {
                Ok(limit) => event_tx.send(AppEvent::Goto(NavTarget {
                    limit: Some(limit),
                    ..NavTarget::default()
                }))?,
                Err(_) => {
                    event_tx.send(AppEvent::Notify(format!("Invalid limit: {value}")))?;
                }
            },

            ["sort", tag] => event_tx.send(AppEvent::Goto(NavTarget {
                sort: Some(Sort {
                    tag: (*tag).to_string(),
                    desc: false,
                }),
                offset: Some(0),
                ..NavTarget::default()
            }))?,
            ["sort", tag, "desc"] => event_tx.send(AppEvent::Goto(NavTarget {
                sort: Some(Sort {
                    tag: (*tag).to_string(),
                    desc: true,
                }),
                offset: Some(0),
                ..NavTarget::default()
            }))?,

            ["f", tag] => event_tx.send(AppEvent::Goto(NavTarget {
                filter: Some((*tag).to_string()),
                offset: Some(0),
                ..NavTarget::default()
            }))?,

            ["s", search_parts @ ..] => {
                let search = search_parts.join(" ");
                event_tx.send(AppEvent::Goto(NavTarget {
                    search: Some(search),
                    offset: Some(0),
                    ..NavTarget::default()
                }))?;
            }

            ["cq"] => event_tx.send(AppEvent::ClearQueue)?,

            ["1"] => event_tx.send(AppEvent::Goto(NavTarget::to_view(ViewId::Queue)))?,
            ["2"] => event_tx.send(AppEvent::Goto(NavTarget::to_view(ViewId::Search)))?,
            ["3"] => event_tx.send(AppEvent::Goto(NavTarget::to_view(ViewId::BrowseDatabase)))?,
            ["4"] => event_tx.send(AppEvent::Goto(NavTarget::to_view(ViewId::Playlists)))?,

            [] => {}

            [cmd, ..] => {
                event_tx.send(AppEvent::Notify(format!("Unknown command: {cmd}")))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{Event, KeyCode, KeyEvent};

    use super::Commander;
    use crate::{actions::events::AppEvent, nav::ViewId};

    fn type_command(commander: &mut Commander, text: &str) -> mpsc::Receiver<AppEvent> {
        let (event_tx, event_rx) = mpsc::channel();
        commander.handle_event(Event::Key(KeyEvent::from(KeyCode::Char(':'))), &event_tx);
        for c in text.chars() {
            commander.handle_event(Event::Key(KeyEvent::from(KeyCode::Char(c))), &event_tx);
        }
        commander.handle_event(Event::Key(KeyEvent::from(KeyCode::Enter)), &event_tx);
        event_rx
    }

    #[test]
    fn colon_activates_and_enter_submits() {
        let mut commander = Commander::new();
        let event_rx = type_command(&mut commander, "2");

        match event_rx.try_recv() {
            Ok(AppEvent::Goto(target)) => assert_eq!(target.view, Some(ViewId::Search)),
            other => panic!("expected a navigation, got {other:?}"),
        }
        assert!(!commander.active());
    }

    #[test]
    fn search_command_joins_words_and_resets_offset() {
        let mut commander = Commander::new();
        let event_rx = type_command(&mut commander, "s nick cave");

        match event_rx.try_recv() {
            Ok(AppEvent::Goto(target)) => {
                assert_eq!(target.search.as_deref(), Some("nick cave"));
                assert_eq!(target.offset, Some(0));
            }
            other => panic!("expected a navigation, got {other:?}"),
        }
    }

    #[test]
    fn unknown_commands_notify() {
        let mut commander = Commander::new();
        let event_rx = type_command(&mut commander, "bogus");

        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::Notify(_))));
    }
}
