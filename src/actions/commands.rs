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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to offload blocking
//! API requests from the main UI thread. It provides a dedicated worker
//! loop that translates [`AppCommand`] requests into JSON-RPC calls and
//! broadcasts the results back to the application via [`AppEvent`]s.
//!
//! The worker owns the only [`ApiClient`]; every network round trip in
//! the application happens on this thread.

use anyhow::Result;
use log::error;
use serde_json::{Value, json};
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{
    actions::events::AppEvent,
    api::ApiClient,
    config::AppConfig,
    nav::Fetch,
    views,
};

#[derive(Debug)]
pub(crate) enum AppCommand {
    Fetch(Fetch),
    PlaySong { song_id: i64 },
    AppendToQueue { uris: Vec<String> },
    AppendAlbums { album_ids: Vec<String> },
    AppendPlaylists { plists: Vec<String> },
    ClearQueue,
}

/// Spawns a background thread to process application commands.
///
/// The worker creates its own API client and enters a blocking loop,
/// listening for incoming [`AppCommand`]s until the channel closes.
pub(crate) fn spawn_command_worker(
    config: &AppConfig,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let api = match ApiClient::new(&config.server_url) {
            Ok(api) => api,
            Err(err) => {
                let _ = event_tx.send(AppEvent::Error(format!(
                    "Cannot reach server {}: {err}",
                    config.server_url
                )));
                return;
            }
        };

        while let Ok(request) = command_rx.recv() {
            if let Err(err) = handle_command(&api, request, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(err.to_string()));
            }
        }
    });
}

/// Orchestrates the execution of a single command and sends the result
/// back through the application event channel.
fn handle_command(
    api: &ApiClient,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::Fetch(fetch) => {
            let (method, params) = views::request(&fetch);
            let response = api.list(method, params);
            event_tx.send(AppEvent::ListLoaded { fetch, response })?;
        }

        AppCommand::PlaySong { song_id } => {
            execute(api, "MYMPD_API_PLAYER_PLAY_SONG", json!({"songId": song_id}), event_tx)?;
        }

        AppCommand::AppendToQueue { uris } => {
            execute(
                api,
                "MYMPD_API_QUEUE_APPEND_URIS",
                json!({"uris": uris, "play": false}),
                event_tx,
            )?;
            event_tx.send(AppEvent::Refresh)?;
        }

        AppCommand::AppendAlbums { album_ids } => {
            execute(
                api,
                "MYMPD_API_QUEUE_APPEND_ALBUMS",
                json!({"albumids": album_ids, "play": false}),
                event_tx,
            )?;
            event_tx.send(AppEvent::Refresh)?;
        }

        AppCommand::AppendPlaylists { plists } => {
            execute(
                api,
                "MYMPD_API_QUEUE_APPEND_PLAYLISTS",
                json!({"plists": plists, "play": false}),
                event_tx,
            )?;
            event_tx.send(AppEvent::Refresh)?;
        }

        AppCommand::ClearQueue => {
            execute(api, "MYMPD_API_QUEUE_CLEAR", json!({}), event_tx)?;
            event_tx.send(AppEvent::Refresh)?;
        }
    }

    Ok(())
}

/// Runs a fire-and-forget API method. Server errors and transport
/// failures surface as a notification; they never stop the worker.
fn execute(
    api: &ApiClient,
    method: &'static str,
    params: Value,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match api.call::<Value>(method, params) {
        Ok(response) => {
            if let Some(rpc_error) = response.error {
                event_tx.send(AppEvent::Notify(rpc_error.display_message()))?;
            }
        }
        Err(err) => {
            error!("{method}: {err}");
            event_tx.send(AppEvent::Notify(err.to_string()))?;
        }
    }

    Ok(())
}
