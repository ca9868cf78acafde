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

//! JSON-RPC response model.
//!
//! This module defines the wire types shared by every list view: the
//! error/result envelope, the paged list payload, and the opaque entity
//! record whose fields are read by name at render time.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Error object of a JSON-RPC response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct RpcError {
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) data: Option<String>,
}

impl RpcError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }

    /// The message with the optional detail appended, ready for display.
    pub(crate) fn display_message(&self) -> String {
        match &self.data {
            Some(data) if !data.is_empty() => format!("{}: {}", self.message, data),
            _ => self.message.clone(),
        }
    }
}

/// JSON-RPC response envelope.
///
/// Exactly one of `error` and `result` is meaningful; a body carrying
/// neither is a protocol error and is treated like an error by the list
/// classifier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Response<T> {
    #[serde(default)]
    pub(crate) error: Option<RpcError>,
    #[serde(default)]
    pub(crate) result: Option<T>,
}

impl<T> Response<T> {
    /// Wraps a client-side failure (transport, parse) in the same envelope
    /// the server uses, so every failure reaches the view as an inline
    /// alert instead of crashing the client.
    pub(crate) fn from_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(RpcError::new(message)),
            result: None,
        }
    }
}

/// A paged list payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListResult {
    #[serde(default)]
    pub(crate) data: Vec<Entity>,
    /// Total number of entities the query matches, `-1` when the source
    /// cannot count (proxied third-party search results).
    pub(crate) total_entities: i64,
    pub(crate) returned_entities: usize,
    #[serde(default)]
    pub(crate) offset: usize,
}

pub(crate) type ListResponse = Response<ListResult>;

/// One data item in a list result.
///
/// Entities have no fixed schema; views pick the fields they display by
/// name. The record travels with its rendered row so row actions can read
/// any field later without re-parsing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub(crate) struct Entity(Map<String, Value>);

impl Entity {
    pub(crate) fn str_field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub(crate) fn int_field(&self, name: &str) -> Option<i64> {
        self.0.get(name).and_then(Value::as_i64)
    }

    /// Best-effort display text for a field, empty when absent.
    pub(crate) fn display(&self, name: &str) -> String {
        match self.0.get(name) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            Some(Value::Bool(flag)) => flag.to_string(),
            Some(Value::Array(values)) => values
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Entity, ListResponse};

    #[test]
    fn parses_list_result() {
        let response: ListResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 0,
            "result": {
                "method": "MYMPD_API_QUEUE_SEARCH",
                "data": [
                    {"Title": "Halber Mensch", "Artist": "Einstürzende Neubauten", "Duration": 225},
                    {"Title": "Yü-Gung", "Duration": 430}
                ],
                "totalEntities": 12,
                "returnedEntities": 2,
                "offset": 0
            }
        }))
        .unwrap();

        assert!(response.error.is_none());
        let result = response.result.unwrap();
        assert_eq!(result.total_entities, 12);
        assert_eq!(result.returned_entities, 2);
        assert_eq!(result.data.len(), 2);
        assert_eq!(result.data[0].str_field("Title"), Some("Halber Mensch"));
        assert_eq!(result.data[0].int_field("Duration"), Some(225));
    }

    #[test]
    fn parses_error_response() {
        let response: ListResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 0,
            "error": {"message": "MPD disconnected", "data": ""}
        }))
        .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.display_message(), "MPD disconnected");
        assert!(response.result.is_none());
    }

    #[test]
    fn error_message_appends_data() {
        let response: ListResponse = serde_json::from_value(json!({
            "error": {"message": "Playlist not found", "data": "heavy-rotation"}
        }))
        .unwrap();

        assert_eq!(
            response.error.unwrap().display_message(),
            "Playlist not found: heavy-rotation"
        );
    }

    #[test]
    fn entity_display_covers_non_string_fields() {
        let entity: Entity = serde_json::from_value(json!({
            "Track": 7,
            "Live": true,
            "Genre": ["Industrial", "Noise"]
        }))
        .unwrap();

        assert_eq!(entity.display("Track"), "7");
        assert_eq!(entity.display("Live"), "true");
        assert_eq!(entity.display("Genre"), "Industrial, Noise");
        assert_eq!(entity.display("Missing"), "");
    }
}
