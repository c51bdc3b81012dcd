//! Page Lifecycle
//!
//! Every data-bearing page moves through the same phases:
//! Idle -> Loading -> Loaded | LoadFailed, and Loaded -> Mutating -> Loading
//! after a successful write. `RequestGuard` drops responses that arrive
//! after a newer request was issued or the page went away.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    LoadFailed,
    Mutating,
}

/// Phase plus the last authoritative data set
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    phase: Phase,
    data: Option<T>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self { phase: Phase::Idle, data: None }
    }
}

impl<T> ViewState<T> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Nothing to show yet and a first load pending or running
    pub fn is_initial_load(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Loading) && self.data.is_none()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Loading | Phase::Mutating)
    }

    /// Previous data stays visible while a reload is in flight
    pub fn begin_load(&mut self) {
        self.phase = Phase::Loading;
    }

    /// A failed load clears data so partial results are never rendered
    pub fn finish_load<E>(&mut self, result: Result<T, E>) -> Result<(), E> {
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.phase = Phase::Loaded;
                Ok(())
            }
            Err(e) => {
                self.data = None;
                self.phase = Phase::LoadFailed;
                Err(e)
            }
        }
    }

    /// Only a loaded, idle page accepts a write; returns false otherwise
    pub fn begin_mutation(&mut self) -> bool {
        if self.phase != Phase::Loaded {
            return false;
        }
        self.phase = Phase::Mutating;
        true
    }

    /// Failed write: back to Loaded without reloading
    pub fn abort_mutation(&mut self) {
        if self.phase == Phase::Mutating {
            self.phase = Phase::Loaded;
        }
    }
}

/// Monotonic ticket issued per request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Shared by a page and its in-flight requests; clones observe the same state
#[derive(Debug, Clone)]
pub struct RequestGuard {
    generation: Arc<AtomicU64>,
    alive: Arc<AtomicBool>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn accepts(&self, ticket: Ticket) -> bool {
        self.alive.load(Ordering::SeqCst) && self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Called when the page unmounts; every outstanding ticket becomes stale
    pub fn retire(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    /// Awaits `fut` under a fresh ticket; `None` when the result is stale
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        let ticket = self.issue();
        let output = fut.await;
        if self.accepts(ticket) {
            Some(output)
        } else {
            log::debug!("[VIEW] Discarding stale response");
            None
        }
    }
}

impl Default for RequestGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;

    #[test]
    fn test_load_success_and_failure() {
        let mut state: ViewState<Vec<u32>> = ViewState::default();
        assert_eq!(state.phase(), Phase::Idle);

        state.begin_load();
        assert!(state.is_initial_load());
        state.finish_load::<()>(Ok(vec![1, 2])).unwrap();
        assert_eq!(state.phase(), Phase::Loaded);

        // Reload keeps old data until the new result arrives
        state.begin_load();
        assert_eq!(state.data(), Some(&vec![1, 2]));
        assert!(!state.is_initial_load());

        assert_eq!(state.finish_load(Err("boom")), Err("boom"));
        assert_eq!(state.phase(), Phase::LoadFailed);
        assert!(state.data().is_none());
    }

    #[test]
    fn test_mutation_only_from_loaded() {
        let mut state: ViewState<u32> = ViewState::default();
        assert!(!state.begin_mutation());

        state.begin_load();
        assert!(!state.begin_mutation());
        state.finish_load::<()>(Ok(7)).unwrap();

        assert!(state.begin_mutation());
        assert!(state.is_busy());
        assert!(!state.begin_mutation());

        state.abort_mutation();
        assert_eq!(state.phase(), Phase::Loaded);
        assert_eq!(state.data(), Some(&7));
    }

    #[test]
    fn test_guard_tickets() {
        let guard = RequestGuard::new();
        let first = guard.issue();
        assert!(guard.accepts(first));

        let second = guard.issue();
        assert!(!guard.accepts(first));
        assert!(guard.accepts(second));

        guard.clone().retire();
        assert!(!guard.accepts(second));
    }

    #[tokio::test]
    async fn test_overlapping_requests_keep_only_latest() {
        let guard = RequestGuard::new();
        let (tx, rx) = oneshot::channel::<u32>();

        let slow = guard.run(async move { rx.await.unwrap_or(0) });
        let fast = guard.run(async { 2 });
        let release = async move {
            let _ = tx.send(1);
        };

        let (slow, fast, ()) = futures::join!(slow, fast, release);
        assert_eq!(slow, None);
        assert_eq!(fast, Some(2));
    }

    #[tokio::test]
    async fn test_response_after_retire_is_dropped() {
        let guard = RequestGuard::new();
        let page = guard.clone();
        let result = guard
            .run(async move {
                page.retire();
                5
            })
            .await;
        assert_eq!(result, None);
    }
}
