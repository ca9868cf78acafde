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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the
//! application, bridging the gap between user input (keyboard),
//! background worker updates (API responses), and the UI rendering
//! pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`]
//!    state, triggers commands to the background API worker, and manages
//!    navigation logic.
//! 3. **Render**: After each event is processed, the UI is re-drawn.
//!
//! Responses are only applied if their fetch is still the router's
//! current generation; a navigation that happened while the request was
//! in flight makes the response stale, and stale responses never touch
//! view state.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use log::debug;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    actions::commands::AppCommand,
    api::ListResponse,
    components::{ListAction, search::SearchAction},
    nav::{Fetch, NavTarget, ViewId},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    /// Navigate; unset fields keep their current value.
    Goto(NavTarget),
    NextPage,
    PrevPage,
    /// Re-fetch the current view with unchanged parameters.
    Refresh,

    /// The debounce timer fired for a search-as-you-type query.
    SearchDebounced(String),

    /// A list fetch completed (successfully or not).
    ListLoaded {
        fetch: Fetch,
        response: ListResponse,
    },

    ClearQueue,

    Notify(String),
    Error(String),

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI
/// in the terminal.
///
/// This function loops until a 'quit' event is received or the event
/// channel is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::Goto(target) => {
                let fetch = app.router.goto(target);
                dispatch_fetch(app, fetch)?;
            }

            AppEvent::NextPage => {
                if app.active_list().pagination.has_next {
                    let fetch = app.router.next_page();
                    dispatch_fetch(app, fetch)?;
                }
            }

            AppEvent::PrevPage => {
                if app.active_list().pagination.has_prev {
                    let fetch = app.router.prev_page();
                    dispatch_fetch(app, fetch)?;
                }
            }

            AppEvent::Refresh => {
                let fetch = app.router.refetch();
                dispatch_fetch(app, fetch)?;
            }

            AppEvent::SearchDebounced(query) => {
                let fetch = app.router.goto(NavTarget {
                    view: Some(ViewId::Search),
                    search: Some(query),
                    offset: Some(0),
                    ..NavTarget::default()
                });
                dispatch_fetch(app, fetch)?;
            }

            AppEvent::ListLoaded { fetch, response } => {
                if app.router.is_current(&fetch) {
                    let pagination_enabled = app.config.pagination;
                    app.list_mut(fetch.view).apply_result(
                        &response,
                        pagination_enabled,
                        fetch.params.offset,
                        fetch.params.limit,
                    );
                } else {
                    debug!(
                        "discarding stale response for {:?} (seq {})",
                        fetch.view, fetch.seq
                    );
                }
            }

            AppEvent::ClearQueue => app.command_tx.send(AppCommand::ClearQueue)?,

            AppEvent::Notify(message) => app.notice = Some(message),
            AppEvent::Error(message) => {
                log::error!("{message}");
                app.notice = Some(message);
            }

            AppEvent::Tick => {}
            AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Issues a fetch: flags the target view as loading and hands the request
/// to the background worker.
fn dispatch_fetch(app: &mut App, fetch: Fetch) -> Result<()> {
    app.list_mut(fetch.view).set_loading();
    app.notice = None;
    app.command_tx.send(AppCommand::Fetch(fetch))?;
    Ok(())
}

/// Maps keyboard input to application actions.
///
/// Input is routed in priority order: the command line when it is (or is
/// becoming) active, then the focused search input, then the global key
/// bindings.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);
    if app.commander.handle_event(event, &app.event_tx) {
        return Ok(());
    }

    if app.router.view() == ViewId::Search && app.search_view.focused {
        if let Some(SearchAction::Submit(query)) = app.search_view.process_key(key, &app.debouncer)
        {
            app.event_tx.send(AppEvent::Goto(NavTarget {
                search: Some(query),
                offset: Some(0),
                ..NavTarget::default()
            }))?;
        }
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        // View switching
        KeyCode::Char('1') => app
            .event_tx
            .send(AppEvent::Goto(NavTarget::to_view(ViewId::Queue)))?,
        KeyCode::Char('2') => app
            .event_tx
            .send(AppEvent::Goto(NavTarget::to_view(ViewId::Search)))?,
        KeyCode::Char('3') => app
            .event_tx
            .send(AppEvent::Goto(NavTarget::to_view(ViewId::BrowseDatabase)))?,
        KeyCode::Char('4') => app
            .event_tx
            .send(AppEvent::Goto(NavTarget::to_view(ViewId::Playlists)))?,

        KeyCode::Char('/') => {
            app.search_view.focus();
            app.event_tx
                .send(AppEvent::Goto(NavTarget::to_view(ViewId::Search)))?;
        }

        // Paging
        KeyCode::Char('n') | KeyCode::Right => app.event_tx.send(AppEvent::NextPage)?,
        KeyCode::Char('p') | KeyCode::Left => app.event_tx.send(AppEvent::PrevPage)?,

        KeyCode::Char('r') => app.event_tx.send(AppEvent::Refresh)?,
        KeyCode::Char('c') => app.event_tx.send(AppEvent::ClearQueue)?,

        _ => {
            let view = app.router.view();
            if let Some(action) = app.list_mut(view).process_key(key) {
                activate(app, view, action)?;
            }
        }
    }

    Ok(())
}

/// Resolves a row activation for the view it happened in.
fn activate(app: &mut App, view: ViewId, action: ListAction) -> Result<()> {
    let ListAction::Activate(entity) = action;

    match view {
        ViewId::Queue => {
            if let Some(song_id) = entity.int_field("id") {
                app.command_tx.send(AppCommand::PlaySong { song_id })?;
            }
        }
        ViewId::Search => {
            if let Some(uri) = entity.str_field("uri") {
                app.command_tx.send(AppCommand::AppendToQueue {
                    uris: vec![uri.to_string()],
                })?;
            }
        }
        ViewId::BrowseDatabase => {
            if let Some(album_id) = entity.str_field("AlbumId") {
                app.command_tx.send(AppCommand::AppendAlbums {
                    album_ids: vec![album_id.to_string()],
                })?;
            }
        }
        ViewId::Playlists => {
            if let Some(uri) = entity.str_field("uri") {
                app.command_tx.send(AppCommand::AppendPlaylists {
                    plists: vec![uri.to_string()],
                })?;
            }
        }
    }

    Ok(())
}
