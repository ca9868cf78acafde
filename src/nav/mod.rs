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

//! View navigation state.
//!
//! The [`Router`] is the single owner of "where the user is browsing":
//! the active view plus its offset, limit, filter, sort and search. A
//! navigation applies a [`NavTarget`] whose fields are all optional; a
//! `None` field keeps its current value. Each navigation returns a
//! [`Fetch`] stamped with a monotonically increasing generation so that
//! responses from superseded navigations can be recognized and dropped.
//!
//! Leaving a view saves its parameters; returning restores them, so every
//! view remembers its own page and query.

use std::collections::HashMap;

/// The navigable list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ViewId {
    Queue,
    Search,
    BrowseDatabase,
    Playlists,
}

impl ViewId {
    pub(crate) const ALL: [ViewId; 4] = [
        ViewId::Queue,
        ViewId::Search,
        ViewId::BrowseDatabase,
        ViewId::Playlists,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            ViewId::Queue => "Queue",
            ViewId::Search => "Search",
            ViewId::BrowseDatabase => "Albums",
            ViewId::Playlists => "Playlists",
        }
    }
}

/// Sort order for views that support server-side sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Sort {
    pub(crate) tag: String,
    pub(crate) desc: bool,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            tag: "Title".to_string(),
            desc: false,
        }
    }
}

/// The browse parameters of one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ViewParams {
    pub(crate) offset: usize,
    pub(crate) limit: usize,
    pub(crate) filter: String,
    pub(crate) sort: Sort,
    pub(crate) tag: String,
    pub(crate) search: String,
}

impl ViewParams {
    pub(crate) fn with_limit(limit: usize) -> Self {
        Self {
            offset: 0,
            limit,
            filter: "any".to_string(),
            sort: Sort::default(),
            tag: String::new(),
            search: String::new(),
        }
    }
}

/// A navigation request. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub(crate) struct NavTarget {
    pub(crate) view: Option<ViewId>,
    pub(crate) offset: Option<usize>,
    pub(crate) limit: Option<usize>,
    pub(crate) filter: Option<String>,
    pub(crate) sort: Option<Sort>,
    pub(crate) tag: Option<String>,
    pub(crate) search: Option<String>,
}

impl NavTarget {
    pub(crate) fn to_view(view: ViewId) -> Self {
        Self {
            view: Some(view),
            ..Self::default()
        }
    }

    pub(crate) fn at_offset(offset: usize) -> Self {
        Self {
            offset: Some(offset),
            ..Self::default()
        }
    }
}

/// A data fetch for the command worker, stamped with the generation it
/// belongs to.
#[derive(Debug, Clone)]
pub(crate) struct Fetch {
    pub(crate) view: ViewId,
    pub(crate) params: ViewParams,
    pub(crate) seq: u64,
}

pub(crate) struct Router {
    current_view: ViewId,
    current: ViewParams,
    saved: HashMap<ViewId, ViewParams>,
    seq: u64,
    page_size: usize,
}

impl Router {
    pub(crate) fn new(page_size: usize) -> Self {
        Self {
            current_view: ViewId::Queue,
            current: ViewParams::with_limit(page_size),
            saved: HashMap::new(),
            seq: 0,
            page_size,
        }
    }

    pub(crate) fn view(&self) -> ViewId {
        self.current_view
    }

    pub(crate) fn params(&self) -> &ViewParams {
        &self.current
    }

    /// Whether a fetch is still the latest navigation. Responses failing
    /// this check are stale and must not touch any view state.
    pub(crate) fn is_current(&self, fetch: &Fetch) -> bool {
        fetch.seq == self.seq
    }

    /// Applies a navigation target and returns the fetch to run.
    ///
    /// Switching views saves the old view's parameters and restores the
    /// target view's saved ones; the target's explicit fields are then
    /// applied on top. A later `goto` supersedes an earlier one's intent:
    /// the in-flight request is not cancelled, but its response will fail
    /// [`Router::is_current`].
    pub(crate) fn goto(&mut self, target: NavTarget) -> Fetch {
        if let Some(view) = target.view
            && view != self.current_view
        {
            self.saved.insert(self.current_view, self.current.clone());
            self.current = self
                .saved
                .get(&view)
                .cloned()
                .unwrap_or_else(|| ViewParams::with_limit(self.page_size));
            self.current_view = view;
        }

        if let Some(offset) = target.offset {
            self.current.offset = offset;
        }
        if let Some(limit) = target.limit {
            self.current.limit = if limit == 0 { self.page_size } else { limit };
            // Snap the offset back onto a page boundary for the new limit.
            self.current.offset -= self.current.offset % self.current.limit;
        }
        if let Some(filter) = target.filter {
            self.current.filter = filter;
        }
        if let Some(sort) = target.sort {
            self.current.sort = sort;
        }
        if let Some(tag) = target.tag {
            self.current.tag = tag;
        }
        if let Some(search) = target.search {
            self.current.search = search;
        }

        self.next_fetch()
    }

    /// Re-requests the current view without changing any parameters.
    pub(crate) fn refetch(&mut self) -> Fetch {
        self.next_fetch()
    }

    pub(crate) fn next_page(&mut self) -> Fetch {
        let offset = self.current.offset + self.current.limit;
        self.goto(NavTarget::at_offset(offset))
    }

    pub(crate) fn prev_page(&mut self) -> Fetch {
        let offset = self.current.offset.saturating_sub(self.current.limit);
        self.goto(NavTarget::at_offset(offset))
    }

    fn next_fetch(&mut self) -> Fetch {
        self.seq += 1;
        Fetch {
            view: self.current_view,
            params: self.current.clone(),
            seq: self.seq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NavTarget, Router, Sort, ViewId};

    #[test]
    fn unset_fields_are_left_unchanged() {
        let mut router = Router::new(25);
        router.goto(NavTarget {
            offset: Some(50),
            search: Some("neubauten".to_string()),
            ..NavTarget::default()
        });

        let fetch = router.goto(NavTarget::default());

        assert_eq!(fetch.params.offset, 50);
        assert_eq!(fetch.params.search, "neubauten");
        assert_eq!(fetch.params.limit, 25);
    }

    #[test]
    fn every_navigation_bumps_the_generation() {
        let mut router = Router::new(25);

        let first = router.goto(NavTarget::at_offset(0));
        let second = router.goto(NavTarget::at_offset(25));

        assert!(second.seq > first.seq);
        assert!(!router.is_current(&first));
        assert!(router.is_current(&second));
    }

    #[test]
    fn switching_views_saves_and_restores_params() {
        let mut router = Router::new(25);
        router.goto(NavTarget {
            offset: Some(75),
            search: Some("nick cave".to_string()),
            ..NavTarget::default()
        });

        router.goto(NavTarget::to_view(ViewId::Playlists));
        assert_eq!(router.params().offset, 0);
        assert_eq!(router.params().search, "");

        let back = router.goto(NavTarget::to_view(ViewId::Queue));
        assert_eq!(back.view, ViewId::Queue);
        assert_eq!(back.params.offset, 75);
        assert_eq!(back.params.search, "nick cave");
    }

    #[test]
    fn switching_views_applies_explicit_fields_after_restore() {
        let mut router = Router::new(25);
        router.goto(NavTarget {
            view: Some(ViewId::Search),
            offset: Some(50),
            ..NavTarget::default()
        });

        router.goto(NavTarget::to_view(ViewId::Queue));
        let fetch = router.goto(NavTarget {
            view: Some(ViewId::Search),
            offset: Some(0),
            search: Some("swans".to_string()),
            ..NavTarget::default()
        });

        assert_eq!(fetch.params.offset, 0);
        assert_eq!(fetch.params.search, "swans");
    }

    #[test]
    fn zero_limit_falls_back_to_the_page_size() {
        let mut router = Router::new(100);

        let fetch = router.goto(NavTarget {
            limit: Some(0),
            ..NavTarget::default()
        });

        assert_eq!(fetch.params.limit, 100);
    }

    #[test]
    fn limit_change_snaps_offset_to_a_page_boundary() {
        let mut router = Router::new(25);
        router.goto(NavTarget::at_offset(70));

        let fetch = router.goto(NavTarget {
            limit: Some(50),
            ..NavTarget::default()
        });

        assert_eq!(fetch.params.offset, 50);
    }

    #[test]
    fn prev_page_clamps_at_zero() {
        let mut router = Router::new(25);
        router.goto(NavTarget::at_offset(10));

        let fetch = router.prev_page();

        assert_eq!(fetch.params.offset, 0);
    }

    #[test]
    fn sort_is_replaced_wholesale() {
        let mut router = Router::new(25);

        let fetch = router.goto(NavTarget {
            sort: Some(Sort {
                tag: "AlbumArtist".to_string(),
                desc: true,
            }),
            ..NavTarget::default()
        });

        assert_eq!(fetch.params.sort.tag, "AlbumArtist");
        assert!(fetch.params.sort.desc);
    }
}
