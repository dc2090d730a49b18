//! # Structural Algorithms
//!
//! In-place relinking passes over a queue's ring. None of them copy or move
//! values; they only rewrite links, and removed elements are released.
//!
//! ```text
//!   swap         1 2 3 4 5  ──>  2 1 4 3 5
//!   reverse      1 2 3 4 5  ──>  5 4 3 2 1
//!   reverse_k(2) 1 2 3 4 5  ──>  2 1 4 3 5   (short tail group kept as is)
//!   reverse_k(3) 1 2 3 4 5  ──>  3 2 1 4 5
//!   delete_mid   1 2 3 4    ──>  1 2 4       (second of two middles)
//!   delete_dup   a a b c c  ──>  b           (input sorted)
//! ```

use tracing::{debug, warn};

use crate::queue::Queue;
use crate::ring::{NodeId, SENTINEL};

impl Queue {
    /// Remove the middle element (the second one when the length is even).
    /// Returns `false` on an empty queue.
    pub fn delete_mid(&mut self) -> bool {
        if self.ring.is_empty(SENTINEL) {
            return false;
        }

        let mut slow = self.ring.first(SENTINEL);
        let mut fast = slow;
        while fast != SENTINEL && self.ring.next(fast) != SENTINEL {
            slow = self.ring.next(slow);
            fast = self.ring.next(self.ring.next(fast));
        }

        if let Some(element) = self.ring.detach(slow) {
            element.release();
            self.metrics.record_releases(1);
        }
        self.metrics.record_structural_op();
        debug!("Deleted middle element");
        true
    }

    /// On a sorted queue, remove every element whose value occurs more than
    /// once, keeping only values that were unique.
    pub fn delete_dup(&mut self) -> bool {
        let mut removed = 0u64;
        let mut cur = self.ring.first(SENTINEL);

        while cur != SENTINEL {
            let mut run_end = cur;
            loop {
                let next = self.ring.next(run_end);
                if next == SENTINEL || self.ring.value(next) != self.ring.value(cur) {
                    break;
                }
                run_end = next;
            }

            let after = self.ring.next(run_end);
            if run_end != cur {
                removed += self.release_run(cur, after);
            }
            cur = after;
        }

        self.metrics.record_releases(removed);
        self.metrics.record_structural_op();
        debug!("Removed {} duplicated elements", removed);
        true
    }

    /// Swap every two adjacent elements; an odd trailing element stays put.
    pub fn swap(&mut self) {
        let mut cur = self.ring.first(SENTINEL);
        while cur != SENTINEL {
            let partner = self.ring.next(cur);
            if partner == SENTINEL {
                break;
            }
            self.ring.unlink(partner);
            let before = self.ring.prev(cur);
            self.ring.link(partner, before, cur);
            cur = self.ring.next(cur);
        }
        self.metrics.record_structural_op();
    }

    /// Reverse the queue by swapping every node's links, sentinel included.
    pub fn reverse(&mut self) {
        if self.ring.is_empty(SENTINEL) {
            return;
        }
        let mut node = SENTINEL;
        loop {
            self.ring.swap_links(node);
            // The old `next` now sits in `prev`.
            node = self.ring.prev(node);
            if node == SENTINEL {
                break;
            }
        }
        self.metrics.record_structural_op();
    }

    /// Reverse each consecutive group of `k` elements. A trailing group with
    /// fewer than `k` elements is left in its original order; `k <= 1` is a
    /// no-op.
    pub fn reverse_k(&mut self, k: usize) {
        if k <= 1 || self.ring.is_empty(SENTINEL) {
            return;
        }
        let groups = self.size() / k;
        if groups == 0 {
            return;
        }

        let parked = match self.ring.new_anchor() {
            Ok(anchor) => anchor,
            Err(e) => {
                warn!("Grouped reverse skipped: {}", e);
                return;
            }
        };

        // `before` is the node preceding the group being reversed.
        let mut before = SENTINEL;
        for _ in 0..groups {
            for _ in 0..k {
                let node = self.ring.next(before);
                self.ring.move_to_front(node, parked);
            }
            let group_tail = self.ring.last(parked);
            self.ring.splice(parked, before);
            before = group_tail;
        }

        self.ring.release_anchor(parked);
        self.metrics.record_structural_op();
        debug!("Reversed {} groups of {}", groups, k);
    }

    /// Release the elements from `from` up to, not including, `until`
    fn release_run(&mut self, from: NodeId, until: NodeId) -> u64 {
        let mut released = 0;
        let mut node = from;
        while node != until {
            let next = self.ring.next(node);
            if let Some(element) = self.ring.detach(node) {
                element.release();
                released += 1;
            }
            node = next;
        }
        released
    }
}
