//! Latest-wins generation gate for debounced input.
//!
//! DESIGN
//! ======
//! Each keystroke arms a new generation and spawns a task that sleeps for
//! the debounce window; when the task wakes it fires only if its generation
//! is still current. Re-arming or cancelling invalidates every sleeping
//! task, so exactly the last value within a quiescent window triggers work
//! and screen teardown leaves no detached timer behind.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Fixed debounce window for the flyer search input, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u64 = 1000;

/// Shared generation counter; clones observe the same gate.
#[derive(Clone, Debug, Default)]
pub struct DebounceGate {
    current: Arc<AtomicU64>,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating all previously armed ones.
    pub fn arm(&self) -> u64 {
        self.current.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether `generation` is still the latest armed one.
    pub fn is_current(&self, generation: u64) -> bool {
        self.current.load(Ordering::Relaxed) == generation
    }

    /// Invalidate every armed generation without starting a new one.
    pub fn cancel(&self) {
        self.current.fetch_add(1, Ordering::Relaxed);
    }
}
