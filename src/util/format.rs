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

use crate::api::Entity;

/// Formats a duration in seconds into a human-readable `MM:SS` string.
///
/// This is used primarily for displaying track durations in list columns.
pub(crate) fn format_time(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Renders one entity field as cell text.
///
/// A few well-known fields get special treatment; everything else falls
/// back to the entity's own display conversion.
pub(crate) fn cell_text(entity: &Entity, field: &str) -> String {
    match field {
        "Duration" => entity
            .int_field("Duration")
            .map(|seconds| format_time(seconds.max(0) as u64))
            .unwrap_or_default(),

        // Queue positions are zero-based on the wire
        "Pos" => entity
            .int_field("Pos")
            .map(|pos| (pos + 1).to_string())
            .unwrap_or_default(),

        "Track" => entity
            .int_field("Track")
            .map(|number| format!("{number:02}"))
            .unwrap_or_else(|| entity.display("Track")),

        _ => entity.display(field),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{cell_text, format_time};
    use crate::api::Entity;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(3600), "60:00");
        assert_eq!(format_time(0), "00:00");
    }

    #[test]
    fn duration_and_position_cells() {
        let entity: Entity =
            serde_json::from_value(json!({"Duration": 225, "Pos": 0, "Track": 7})).unwrap();

        assert_eq!(cell_text(&entity, "Duration"), "03:45");
        assert_eq!(cell_text(&entity, "Pos"), "1");
        assert_eq!(cell_text(&entity, "Track"), "07");
        assert_eq!(cell_text(&entity, "Missing"), "");
    }
}
