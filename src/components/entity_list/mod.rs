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

//! Reusable entity table component.
//!
//! Every paged view renders through this component: it feeds incoming list
//! responses to the list pipeline, keeps the reconciled rows together with
//! their entity records, and tracks the table cursor. Each row carries the
//! entity it was built from, so row actions read fields from a typed
//! record instead of scraping display text.

mod event;
mod render;

use ratatui::{layout::Constraint, widgets::TableState};

use crate::{
    api::{Entity, ListResponse},
    list::{ListDisplay, Pagination, classify, reconcile},
    util::format,
};

/// Maps an entity field to a table column.
pub(crate) struct Column {
    pub(crate) field: &'static str,
    pub(crate) title: &'static str,
    pub(crate) width: Constraint,
}

impl Column {
    pub(crate) fn new(field: &'static str, title: &'static str, width: Constraint) -> Self {
        Self {
            field,
            title,
            width,
        }
    }
}

/// A rendered row and the entity it was built from.
pub(crate) struct EntityRow {
    pub(crate) entity: Entity,
    pub(crate) cells: Vec<String>,
}

/// What the list body currently shows instead of, or in front of, rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum ListStatus {
    #[default]
    Loading,
    Ok,
    Empty,
    Error(String),
}

/// Action produced by key handling, resolved by the owning view.
#[derive(Debug)]
pub(crate) enum ListAction {
    Activate(Entity),
}

pub(crate) struct EntityListState {
    pub(crate) columns: Vec<Column>,
    pub(crate) rows: Vec<EntityRow>,
    pub(crate) status: ListStatus,
    pub(crate) pagination: Pagination,
    pub(crate) table_state: TableState,
}

impl EntityListState {
    pub(crate) fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: vec![],
            status: ListStatus::Loading,
            pagination: Pagination::cleared(),
            table_state: TableState::new(),
        }
    }

    /// Marks the list as waiting for data. Existing rows stay on screen
    /// until the response replaces them.
    pub(crate) fn set_loading(&mut self) {
        self.status = ListStatus::Loading;
    }

    /// Applies a list response: classify, reconcile, recompute pagination.
    ///
    /// Any previously shown alert is dropped regardless of the outcome;
    /// error and empty outcomes clear the rows and reset pagination.
    pub(crate) fn apply_result(
        &mut self,
        response: &ListResponse,
        pagination_enabled: bool,
        offset: usize,
        limit: usize,
    ) {
        match classify(response, pagination_enabled, offset) {
            ListDisplay::Error(message) => {
                self.rows.clear();
                self.status = ListStatus::Error(message);
                self.pagination = Pagination::cleared();
                self.table_state.select(None);
            }
            ListDisplay::Empty => {
                self.rows.clear();
                self.status = ListStatus::Empty;
                self.pagination = Pagination::cleared();
                self.table_state.select(None);
            }
            ListDisplay::Keep => {
                if self.status == ListStatus::Loading {
                    self.status = ListStatus::Ok;
                }
            }
            ListDisplay::Rows(result) => {
                let columns = &self.columns;
                reconcile(
                    &mut self.rows,
                    &result.data,
                    result.returned_entities,
                    |entity| build_row(columns, entity),
                );
                self.status = ListStatus::Ok;
                self.pagination = Pagination::compute(
                    result.total_entities,
                    result.returned_entities,
                    result.offset,
                    limit,
                );
                self.clamp_selection();
            }
        }
    }

    pub(crate) fn selected_entity(&self) -> Option<&Entity> {
        let index = self.table_state.selected()?;
        self.rows.get(index).map(|row| &row.entity)
    }

    fn clamp_selection(&mut self) {
        if self.rows.is_empty() {
            self.table_state.select(None);
            return;
        }
        match self.table_state.selected() {
            Some(index) if index >= self.rows.len() => {
                self.table_state.select(Some(self.rows.len() - 1));
            }
            None => self.table_state.select(Some(0)),
            _ => {}
        }
    }
}

fn build_row(columns: &[Column], entity: &Entity) -> EntityRow {
    let cells = columns
        .iter()
        .map(|column| format::cell_text(entity, column.field))
        .collect();

    EntityRow {
        entity: entity.clone(),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Constraint;
    use serde_json::json;

    use super::{Column, EntityListState, ListStatus};
    use crate::api::ListResponse;

    fn state() -> EntityListState {
        EntityListState::new(vec![
            Column::new("Title", "Title", Constraint::Percentage(70)),
            Column::new("Duration", "Time", Constraint::Length(6)),
        ])
    }

    fn page(returned: usize, total: i64, offset: usize) -> ListResponse {
        serde_json::from_value(json!({
            "result": {
                "data": (0..returned)
                    .map(|i| json!({"Title": format!("Song {}", offset + i), "Duration": 120 + i}))
                    .collect::<Vec<_>>(),
                "totalEntities": total,
                "returnedEntities": returned,
                "offset": offset
            }
        }))
        .unwrap()
    }

    #[test]
    fn error_response_clears_rows_and_pagination() {
        let mut list = state();
        list.apply_result(&page(5, 20, 0), true, 0, 25);
        assert_eq!(list.rows.len(), 5);

        let error: ListResponse =
            serde_json::from_value(json!({"error": {"message": "MPD disconnected"}})).unwrap();
        list.apply_result(&error, true, 0, 25);

        assert!(list.rows.is_empty());
        assert_eq!(list.status, ListStatus::Error("MPD disconnected".to_string()));
        assert!(!list.pagination.has_next);
        assert_eq!(list.table_state.selected(), None);
    }

    #[test]
    fn alert_is_dropped_when_rows_arrive() {
        let mut list = state();
        let error: ListResponse =
            serde_json::from_value(json!({"error": {"message": "timeout"}})).unwrap();
        list.apply_result(&error, true, 0, 25);

        list.apply_result(&page(3, 3, 0), true, 0, 25);

        assert_eq!(list.status, ListStatus::Ok);
        assert_eq!(list.rows.len(), 3);
    }

    #[test]
    fn rows_carry_their_entities_and_cells() {
        let mut list = state();
        list.apply_result(&page(2, 2, 0), true, 0, 25);

        assert_eq!(list.rows[0].cells, vec!["Song 0", "02:00"]);
        assert_eq!(list.rows[1].entity.str_field("Title"), Some("Song 1"));
    }

    #[test]
    fn selection_is_clamped_to_a_shrinking_page() {
        let mut list = state();
        list.apply_result(&page(5, 20, 0), true, 0, 25);
        list.table_state.select(Some(4));

        list.apply_result(&page(3, 3, 0), true, 0, 25);

        assert_eq!(list.rows.len(), 3);
        assert_eq!(list.table_state.selected(), Some(2));
    }

    #[test]
    fn empty_first_page_shows_placeholder_once() {
        let mut list = state();
        list.apply_result(&page(0, 0, 0), true, 0, 25);

        assert_eq!(list.status, ListStatus::Empty);
        assert!(list.rows.is_empty());
    }

    #[test]
    fn selected_entity_follows_the_cursor() {
        let mut list = state();
        list.apply_result(&page(3, 3, 0), true, 0, 25);
        list.table_state.select(Some(1));

        assert_eq!(
            list.selected_entity().and_then(|e| e.str_field("Title")),
            Some("Song 1")
        );
    }
}
