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

//! Per-view glue.
//!
//! Everything that is specific to one view lives here: its table columns
//! and the API method and parameters its data comes from. The list
//! pipeline itself never depends on a method name.

use ratatui::layout::Constraint;
use serde_json::{Value, json};

use crate::{
    components::Column,
    nav::{Fetch, ViewId},
};

/// Table columns for a view, in display order.
pub(crate) fn columns(view: ViewId) -> Vec<Column> {
    match view {
        ViewId::Queue => vec![
            Column::new("Pos", "#", Constraint::Length(4)),
            Column::new("Title", "Title", Constraint::Percentage(40)),
            Column::new("Artist", "Artist", Constraint::Percentage(30)),
            Column::new("Album", "Album", Constraint::Percentage(30)),
            Column::new("Duration", "Time", Constraint::Length(6)),
        ],
        ViewId::Search => vec![
            Column::new("Title", "Title", Constraint::Percentage(35)),
            Column::new("Artist", "Artist", Constraint::Percentage(25)),
            Column::new("Album", "Album", Constraint::Percentage(30)),
            Column::new("Duration", "Time", Constraint::Length(6)),
        ],
        ViewId::BrowseDatabase => vec![
            Column::new("Album", "Album", Constraint::Percentage(45)),
            Column::new("AlbumArtist", "Artist", Constraint::Percentage(35)),
            Column::new("Discs", "Discs", Constraint::Length(5)),
            Column::new("SongCount", "Songs", Constraint::Length(5)),
        ],
        ViewId::Playlists => vec![
            Column::new("Name", "Playlist", Constraint::Percentage(70)),
            Column::new("LastModified", "Last modified", Constraint::Percentage(30)),
        ],
    }
}

/// Builds the JSON-RPC method and params for a fetch.
pub(crate) fn request(fetch: &Fetch) -> (&'static str, Value) {
    let params = &fetch.params;
    let cols: Vec<&str> = columns(fetch.view).iter().map(|c| c.field).collect();

    match fetch.view {
        ViewId::Queue => (
            "MYMPD_API_QUEUE_SEARCH",
            json!({
                "offset": params.offset,
                "limit": params.limit,
                "filter": params.filter,
                "searchstr": params.search,
                "cols": cols,
            }),
        ),
        ViewId::Search => (
            "MYMPD_API_DATABASE_SEARCH",
            json!({
                "offset": params.offset,
                "limit": params.limit,
                "expression": search_expression(&params.filter, &params.search),
                "sort": params.sort.tag,
                "sortdesc": params.sort.desc,
                "cols": cols,
            }),
        ),
        ViewId::BrowseDatabase => (
            "MYMPD_API_DATABASE_ALBUM_LIST",
            json!({
                "offset": params.offset,
                "limit": params.limit,
                "expression": search_expression(&params.filter, &params.search),
                "sort": params.sort.tag,
                "sortdesc": params.sort.desc,
                "cols": cols,
            }),
        ),
        ViewId::Playlists => (
            "MYMPD_API_PLAYLIST_LIST",
            json!({
                "offset": params.offset,
                "limit": params.limit,
                "searchstr": params.search,
                "type": 0,
            }),
        ),
    }
}

/// Builds a server-side search expression, `(tag contains 'value')`.
///
/// An empty search produces an empty expression, which the server treats
/// as match-all.
pub(crate) fn search_expression(tag: &str, search: &str) -> String {
    if search.is_empty() {
        return String::new();
    }
    let escaped = search.replace('\\', "\\\\").replace('\'', "\\'");
    format!("({tag} contains '{escaped}')")
}

#[cfg(test)]
mod tests {
    use super::{request, search_expression};
    use crate::nav::{Fetch, ViewId, ViewParams};

    #[test]
    fn expression_quotes_and_escapes() {
        assert_eq!(
            search_expression("any", "don't stop"),
            "(any contains 'don\\'t stop')"
        );
        assert_eq!(search_expression("any", ""), "");
    }

    #[test]
    fn queue_request_carries_paging_params() {
        let mut params = ViewParams::with_limit(25);
        params.offset = 50;
        params.search = "bowie".to_string();
        let fetch = Fetch {
            view: ViewId::Queue,
            params,
            seq: 1,
        };

        let (method, body) = request(&fetch);

        assert_eq!(method, "MYMPD_API_QUEUE_SEARCH");
        assert_eq!(body["offset"], 50);
        assert_eq!(body["limit"], 25);
        assert_eq!(body["searchstr"], "bowie");
    }

    #[test]
    fn search_request_builds_an_expression() {
        let mut params = ViewParams::with_limit(25);
        params.search = "low".to_string();
        let fetch = Fetch {
            view: ViewId::Search,
            params,
            seq: 1,
        };

        let (method, body) = request(&fetch);

        assert_eq!(method, "MYMPD_API_DATABASE_SEARCH");
        assert_eq!(body["expression"], "(any contains 'low')");
    }
}
