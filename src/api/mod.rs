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

//! JSON-RPC API client.
//!
//! This module owns the HTTP transport to the music server. Requests are
//! plain JSON-RPC 2.0 (`{jsonrpc, id, method, params}`) posted to the
//! server's `/api/` endpoint; responses are the `{result}|{error}` envelope
//! defined in [`response`].
//!
//! The client is blocking and lives on the command worker thread, never on
//! the UI thread.

mod response;

pub(crate) use response::{Entity, ListResponse, ListResult, Response};

use std::time::Duration;

use log::{debug, error};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;
use ureq::Agent;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("invalid server URL: {0}")]
    BadUrl(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Transport(#[from] ureq::Error),
}

pub(crate) struct ApiClient {
    agent: Agent,
    endpoint: Url,
}

impl ApiClient {
    /// Creates a client for the given server base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed.
    pub(crate) fn new(server_url: &str) -> Result<Self, ApiError> {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .into();

        let endpoint = Url::parse(server_url)?.join("api/")?;

        Ok(Self { agent, endpoint })
    }

    /// Sends a single JSON-RPC request and deserializes the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the body cannot be
    /// parsed. Server-reported failures are not errors at this level; they
    /// arrive inside the response envelope.
    pub(crate) fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<Response<T>, ApiError> {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 0,
            "method": method,
            "params": params,
        });

        debug!("sending {method}");

        let mut response = self.agent.post(self.endpoint.as_str()).send_json(&request)?;

        Ok(response.body_mut().read_json()?)
    }

    /// Fetches a paged list, folding transport and parse failures into the
    /// response envelope so the caller renders them as an inline alert.
    pub(crate) fn list(&self, method: &str, params: Value) -> ListResponse {
        match self.call::<ListResult>(method, params) {
            Ok(response) => response,
            Err(err) => {
                error!("{method}: {err}");
                Response::from_error(err.to_string())
            }
        }
    }
}
