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

//! Result classification.
//!
//! Inspects a list response for error and empty conditions and decides what
//! the view should display. The caller drops any previously shown alert
//! before acting on the outcome, whatever the outcome is.

use crate::api::{ListResponse, ListResult};

/// What the view should display for a response.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ListDisplay<'a> {
    /// Replace the list body with a single error alert spanning all
    /// columns; pagination is cleared.
    Error(String),
    /// Replace the list body with the empty-list placeholder.
    Empty,
    /// Leave the current rows untouched. An empty page past offset zero
    /// while paging is still in progress is not an empty list.
    Keep,
    /// Render the returned rows.
    Rows(&'a ListResult),
}

/// Classifies a list response.
///
/// The empty placeholder is only shown when pagination is disabled or the
/// offset is zero; otherwise an empty page mid-scroll keeps the rows that
/// are already on screen.
pub(crate) fn classify(
    response: &ListResponse,
    pagination_enabled: bool,
    offset: usize,
) -> ListDisplay<'_> {
    if let Some(error) = &response.error {
        return ListDisplay::Error(error.display_message());
    }

    let Some(result) = &response.result else {
        return ListDisplay::Error("Invalid API response".to_string());
    };

    if result.returned_entities == 0 {
        return if !pagination_enabled || offset == 0 {
            ListDisplay::Empty
        } else {
            ListDisplay::Keep
        };
    }

    ListDisplay::Rows(result)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ListDisplay, classify};
    use crate::api::ListResponse;

    fn list_response(returned: usize, offset: usize) -> ListResponse {
        serde_json::from_value(json!({
            "result": {
                "data": (0..returned).map(|i| json!({"Title": format!("Song {i}")})).collect::<Vec<_>>(),
                "totalEntities": 100,
                "returnedEntities": returned,
                "offset": offset
            }
        }))
        .unwrap()
    }

    #[test]
    fn error_response_classifies_as_error() {
        let response: ListResponse = serde_json::from_value(json!({
            "error": {"message": "MPD disconnected"}
        }))
        .unwrap();

        assert_eq!(
            classify(&response, true, 0),
            ListDisplay::Error("MPD disconnected".to_string())
        );
    }

    #[test]
    fn missing_result_classifies_as_error() {
        let response: ListResponse = serde_json::from_value(json!({})).unwrap();

        assert!(matches!(classify(&response, true, 0), ListDisplay::Error(_)));
    }

    #[test]
    fn empty_first_page_shows_placeholder() {
        let response = list_response(0, 0);

        assert_eq!(classify(&response, true, 0), ListDisplay::Empty);
    }

    #[test]
    fn empty_later_page_keeps_rows_while_paging() {
        let response = list_response(0, 50);

        assert_eq!(classify(&response, true, 50), ListDisplay::Keep);
    }

    #[test]
    fn empty_later_page_without_pagination_shows_placeholder() {
        let response = list_response(0, 50);

        assert_eq!(classify(&response, false, 50), ListDisplay::Empty);
    }

    #[test]
    fn populated_response_yields_rows() {
        let response = list_response(3, 0);

        match classify(&response, true, 0) {
            ListDisplay::Rows(result) => assert_eq!(result.returned_entities, 3),
            other => panic!("expected rows, got {other:?}"),
        }
    }
}
