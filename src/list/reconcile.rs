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

//! Index-aligned row reconciliation.
//!
//! Aligns the rows already on screen with the entities a response returned:
//! rows that exist at an index are replaced in place, missing rows are
//! appended, and trailing rows beyond the result are removed. The work is
//! bounded by the result size, not the total list size, and the row vector
//! is never cleared and rebuilt, so selection and scroll state anchored to
//! it survive a refresh.

use crate::api::Entity;

/// Counts of the operations a reconciliation performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ReconcileOutcome {
    pub(crate) replaced: usize,
    pub(crate) appended: usize,
    pub(crate) removed: usize,
}

/// Reconciles `returned` entities against `rows` in index order.
///
/// `build_row` maps an entity to a row; it is only invoked for positions
/// that change. `returned` is clamped to the number of entities actually
/// present in the payload.
pub(crate) fn reconcile<T>(
    rows: &mut Vec<T>,
    entities: &[Entity],
    returned: usize,
    mut build_row: impl FnMut(&Entity) -> T,
) -> ReconcileOutcome {
    let keep = returned.min(entities.len());
    let mut outcome = ReconcileOutcome::default();

    for (index, entity) in entities.iter().take(keep).enumerate() {
        if index < rows.len() {
            rows[index] = build_row(entity);
            outcome.replaced += 1;
        } else {
            rows.push(build_row(entity));
            outcome.appended += 1;
        }
    }

    if rows.len() > keep {
        outcome.removed = rows.len() - keep;
        rows.truncate(keep);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ReconcileOutcome, reconcile};
    use crate::api::Entity;

    fn entities(count: usize) -> Vec<Entity> {
        (0..count)
            .map(|i| serde_json::from_value(json!({"Title": format!("Song {i}")})).unwrap())
            .collect()
    }

    fn titles(entities: &[Entity]) -> Vec<String> {
        entities.iter().map(|e| e.display("Title")).collect()
    }

    #[test]
    fn shrinking_page_replaces_and_trims() {
        let mut rows: Vec<String> = (0..5).map(|i| format!("old {i}")).collect();
        let data = entities(3);

        let outcome = reconcile(&mut rows, &data, 3, |e| e.display("Title"));

        assert_eq!(
            outcome,
            ReconcileOutcome {
                replaced: 3,
                appended: 0,
                removed: 2
            }
        );
        assert_eq!(rows, titles(&data));
    }

    #[test]
    fn growing_page_replaces_and_appends() {
        let mut rows: Vec<String> = (0..2).map(|i| format!("old {i}")).collect();
        let data = entities(5);

        let outcome = reconcile(&mut rows, &data, 5, |e| e.display("Title"));

        assert_eq!(
            outcome,
            ReconcileOutcome {
                replaced: 2,
                appended: 3,
                removed: 0
            }
        );
        assert_eq!(rows.len(), 5);
        assert_eq!(rows, titles(&data));
    }

    #[test]
    fn equal_sizes_replace_in_place_only() {
        let mut rows: Vec<String> = (0..4).map(|i| format!("old {i}")).collect();
        let data = entities(4);

        let outcome = reconcile(&mut rows, &data, 4, |e| e.display("Title"));

        assert_eq!(
            outcome,
            ReconcileOutcome {
                replaced: 4,
                appended: 0,
                removed: 0
            }
        );
    }

    #[test]
    fn reconciling_twice_is_idempotent() {
        let mut rows: Vec<String> = Vec::new();
        let data = entities(3);

        reconcile(&mut rows, &data, 3, |e| e.display("Title"));
        let first = rows.clone();
        let outcome = reconcile(&mut rows, &data, 3, |e| e.display("Title"));

        assert_eq!(rows, first);
        assert_eq!(rows.len(), 3);
        assert_eq!(outcome.removed, 0);
        assert_eq!(outcome.appended, 0);
    }

    #[test]
    fn returned_count_is_clamped_to_payload() {
        let mut rows: Vec<String> = Vec::new();
        let data = entities(2);

        // A malformed response claiming more entities than it carries must
        // not index past the payload.
        let outcome = reconcile(&mut rows, &data, 10, |e| e.display("Title"));

        assert_eq!(rows.len(), 2);
        assert_eq!(outcome.appended, 2);
    }

    #[test]
    fn zero_returned_clears_all_rows() {
        let mut rows: Vec<String> = (0..3).map(|i| format!("old {i}")).collect();

        let outcome = reconcile(&mut rows, &[], 0, |e| e.display("Title"));

        assert!(rows.is_empty());
        assert_eq!(outcome.removed, 3);
    }
}
