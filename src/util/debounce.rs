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

//! Cancel-and-restart debounce timer.
//!
//! Each restart supersedes the pending delivery: a generation counter is
//! bumped and a sleeper thread only delivers its payload if the counter
//! has not moved while it slept. This debounces rapid input; it does not
//! cancel requests that are already in flight (the navigation generation
//! handles those).

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
        mpsc::Sender,
    },
    thread,
    time::Duration,
};

use crate::actions::events::AppEvent;

pub(crate) struct Debouncer {
    generation: Arc<AtomicU64>,
    delay: Duration,
    event_tx: Sender<AppEvent>,
}

impl Debouncer {
    pub(crate) fn new(delay: Duration, event_tx: Sender<AppEvent>) -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            delay,
            event_tx,
        }
    }

    /// Schedules `query` for delivery after the delay, superseding any
    /// delivery still pending.
    pub(crate) fn restart(&self, query: String) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let event_tx = self.event_tx.clone();
        let delay = self.delay;

        thread::spawn(move || {
            thread::sleep(delay);
            if latest.load(Ordering::SeqCst) == generation {
                event_tx.send(AppEvent::SearchDebounced(query)).ok();
            }
        });
    }

    /// Drops any pending delivery without scheduling a new one.
    pub(crate) fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, time::Duration};

    use super::Debouncer;
    use crate::actions::events::AppEvent;

    #[test]
    fn only_the_latest_restart_is_delivered() {
        let (event_tx, event_rx) = mpsc::channel();
        let debouncer = Debouncer::new(Duration::from_millis(20), event_tx);

        debouncer.restart("b".to_string());
        debouncer.restart("bo".to_string());
        debouncer.restart("bow".to_string());

        let event = event_rx.recv_timeout(Duration::from_secs(2)).unwrap();
        match event {
            AppEvent::SearchDebounced(query) => assert_eq!(query, "bow"),
            other => panic!("expected a debounced search, got {other:?}"),
        }

        // The superseded restarts stay silent.
        assert!(
            event_rx.recv_timeout(Duration::from_millis(100)).is_err(),
            "superseded timer fired"
        );
    }

    #[test]
    fn cancel_suppresses_the_pending_delivery() {
        let (event_tx, event_rx) = mpsc::channel();
        let debouncer = Debouncer::new(Duration::from_millis(20), event_tx);

        debouncer.restart("query".to_string());
        debouncer.cancel();

        assert!(event_rx.recv_timeout(Duration::from_millis(100)).is_err());
    }
}
