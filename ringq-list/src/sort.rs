//! # Sort Engine
//!
//! Top-down merge sort over the ring's `next` links.
//!
//! ```text
//!   ring ──detach_chain──> a -> d -> b -> c -> ⊥      (⊥ = the anchor)
//!                          split at slow/fast midpoint
//!                   a -> d -> ⊥          b -> c -> ⊥
//!                   sort, sort, merge
//!                          a -> b -> c -> d -> ⊥
//!   ring <──close_chain──  (prev links rebuilt in one pass)
//! ```
//!
//! Values compare byte-wise. When the heads of the two chains compare equal
//! the merge takes the right-hand chain first, in either order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use ringq_core::Timer;

use crate::queue::Queue;
use crate::ring::{NodeId, Ring, SENTINEL};

/// Direction of a sort or merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_descend(descend: bool) -> Self {
        if descend {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    /// Whether the left head is emitted before the right head
    #[inline]
    pub(crate) fn takes_left(self, left: &str, right: &str) -> bool {
        match self {
            SortOrder::Ascending => left < right,
            SortOrder::Descending => left > right,
        }
    }
}

impl Queue {
    /// Sort the queue in place. Empty and single-element queues are left
    /// untouched.
    pub fn sort(&mut self, order: SortOrder) {
        if self.ring.first(SENTINEL) == self.ring.last(SENTINEL) {
            return;
        }
        let timer = Timer::new("sort");
        self.ring.sort_anchor(SENTINEL, order);
        self.metrics.record_sort();
        debug!("Sorted {} elements ({:?})", self.ring.len(), order);
        timer.stop();
    }
}

impl Ring {
    /// Sort the nodes parked on `anchor`
    pub(crate) fn sort_anchor(&mut self, anchor: NodeId, order: SortOrder) {
        let head = self.detach_chain(anchor, anchor);
        let head = self.merge_sort(head, anchor, order);
        self.close_chain(anchor, head);
    }

    fn merge_sort(&mut self, head: NodeId, nil: NodeId, order: SortOrder) -> NodeId {
        if head == nil || self.next(head) == nil {
            return head;
        }

        let mut slow = head;
        let mut fast = head;
        while self.next(fast) != nil && self.next(self.next(fast)) != nil {
            slow = self.next(slow);
            fast = self.next(self.next(fast));
        }
        let right = self.next(slow);
        self.set_next(slow, nil);

        let left = self.merge_sort(head, nil, order);
        let right = self.merge_sort(right, nil, order);
        self.merge_chains(left, right, nil, order)
    }

    /// Merge two sorted chains, both terminated by `nil`, into one
    pub(crate) fn merge_chains(
        &mut self,
        mut left: NodeId,
        mut right: NodeId,
        nil: NodeId,
        order: SortOrder,
    ) -> NodeId {
        let mut head = nil;
        let mut tail = nil;

        while left != nil && right != nil {
            let node = if order.takes_left(self.value(left), self.value(right)) {
                let node = left;
                left = self.next(left);
                node
            } else {
                let node = right;
                right = self.next(right);
                node
            };

            if tail == nil {
                head = node;
            } else {
                self.set_next(tail, node);
            }
            tail = node;
        }

        let rest = if left != nil { left } else { right };
        if tail == nil {
            rest
        } else {
            self.set_next(tail, rest);
            head
        }
    }
}
