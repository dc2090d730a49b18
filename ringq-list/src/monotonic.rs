//! # Monotonic Filter
//!
//! Tail-to-head pass that drops every element dominated by the element kept
//! after it, leaving a monotonic sequence.
//!
//! - `ascend`: an element is kept only if every element after it is
//!   strictly greater (result is strictly increasing head to tail)
//! - `descend`: an element is kept only if every element after it is
//!   strictly smaller (result is strictly decreasing head to tail)

use tracing::debug;

use crate::queue::Queue;
use crate::ring::SENTINEL;

impl Queue {
    /// Remove every element that has a smaller-or-equal value somewhere
    /// after it. Returns the number of elements left.
    pub fn ascend(&mut self) -> usize {
        self.retain_monotonic("ascend", |kept, candidate| kept <= candidate)
    }

    /// Remove every element that has a greater-or-equal value somewhere
    /// after it. Returns the number of elements left.
    pub fn descend(&mut self) -> usize {
        self.retain_monotonic("descend", |kept, candidate| kept >= candidate)
    }

    fn retain_monotonic<F>(&mut self, name: &'static str, dominates: F) -> usize
    where
        F: Fn(&str, &str) -> bool,
    {
        if self.ring.is_empty(SENTINEL) {
            return 0;
        }

        let mut kept = self.ring.last(SENTINEL);
        let mut candidate = self.ring.prev(kept);
        let mut remaining = 1;
        let mut removed = 0u64;

        while candidate != SENTINEL {
            if dominates(self.ring.value(kept), self.ring.value(candidate)) {
                if let Some(element) = self.ring.detach(candidate) {
                    element.release();
                    removed += 1;
                }
            } else {
                kept = candidate;
                remaining += 1;
            }
            candidate = self.ring.prev(kept);
        }

        self.metrics.record_releases(removed);
        self.metrics.record_structural_op();
        debug!("{}: kept {}, removed {}", name, remaining, removed);
        remaining
    }
}
