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

//! Pagination state.
//!
//! Derives the page controls from a list result's counts. A total of `-1`
//! means the source cannot count its matches (proxied third-party search
//! results); the controls then degrade to has-more/has-none instead of
//! exact page numbers.

/// Page controls derived from a list result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pagination {
    pub(crate) current_page: usize,
    /// `None` when the total entity count is unknown.
    pub(crate) total_pages: Option<usize>,
    pub(crate) has_prev: bool,
    pub(crate) has_next: bool,
}

impl Pagination {
    /// Computes the controls for a result.
    ///
    /// `limit` must already be normalized to the effective page size; a
    /// zero limit is treated as one to keep the math total.
    pub(crate) fn compute(total: i64, returned: usize, offset: usize, limit: usize) -> Self {
        let limit = limit.max(1);

        let current_page = offset.div_ceil(limit) + 1;

        let mut total_pages = if total < 0 {
            None
        } else if (total as usize) < limit {
            Some(1)
        } else {
            Some((total as usize).div_ceil(limit))
        };

        // A short page is the last page, whatever the reported total says.
        if limit > returned {
            total_pages = total_pages.map(|_| current_page);
        }

        let has_next = if total < 0 {
            returned == limit
        } else {
            offset + returned < total as usize
        };

        Self {
            current_page,
            total_pages,
            has_prev: offset > 0,
            has_next,
        }
    }

    /// The state shown alongside an error or empty result.
    pub(crate) fn cleared() -> Self {
        Self::compute(0, 0, 0, 1)
    }

    /// Human-readable page position, `"3 / 7"`, or just `"3"` when the
    /// total is unknown.
    pub(crate) fn label(&self) -> String {
        match self.total_pages {
            Some(total) => format!("{} / {}", self.current_page, total),
            None => self.current_page.to_string(),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::cleared()
    }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn full_pages_with_known_total() {
        let pagination = Pagination::compute(100, 25, 50, 25);

        assert_eq!(pagination.current_page, 3);
        assert_eq!(pagination.total_pages, Some(4));
        assert!(pagination.has_prev);
        assert!(pagination.has_next);
        assert_eq!(pagination.label(), "3 / 4");
    }

    #[test]
    fn first_page_has_no_prev() {
        let pagination = Pagination::compute(100, 25, 0, 25);

        assert_eq!(pagination.current_page, 1);
        assert!(!pagination.has_prev);
        assert!(pagination.has_next);
    }

    #[test]
    fn short_page_is_the_last_page() {
        let pagination = Pagination::compute(55, 5, 50, 25);

        assert_eq!(pagination.total_pages, Some(pagination.current_page));
        assert!(!pagination.has_next);
    }

    #[test]
    fn total_below_limit_is_a_single_page() {
        let pagination = Pagination::compute(10, 10, 0, 25);

        assert_eq!(pagination.total_pages, Some(1));
        assert!(!pagination.has_next);
    }

    #[test]
    fn unknown_total_with_full_page_has_more() {
        let pagination = Pagination::compute(-1, 25, 0, 25);

        assert_eq!(pagination.total_pages, None);
        assert!(pagination.has_next);
        assert_eq!(pagination.label(), "1");
    }

    #[test]
    fn unknown_total_with_short_page_has_none() {
        let pagination = Pagination::compute(-1, 12, 25, 25);

        assert_eq!(pagination.total_pages, None);
        assert!(!pagination.has_next);
        assert!(pagination.has_prev);
    }

    #[test]
    fn cleared_state_is_inert() {
        let pagination = Pagination::cleared();

        assert_eq!(pagination.current_page, 1);
        assert!(!pagination.has_prev);
        assert!(!pagination.has_next);
    }
}
