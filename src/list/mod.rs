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

//! The list rendering pipeline.
//!
//! Every paged view goes through the same three steps when a response
//! arrives:
//!
//! 1. [`classify`] decides whether the response yields rows, an empty
//!    placeholder, an error alert, or nothing at all.
//! 2. [`reconcile`] aligns the returned entities with the rows already on
//!    screen, replacing in place, appending, and trimming the tail.
//! 3. [`Pagination::compute`] derives the page controls from the result
//!    counts.
//!
//! All three are pure functions over the response model; no widget or
//! terminal state is touched here.

mod classify;
mod pagination;
mod reconcile;

pub(crate) use classify::{ListDisplay, classify};
pub(crate) use pagination::Pagination;
pub(crate) use reconcile::{ReconcileOutcome, reconcile};
