//! # K-way Merge
//!
//! A `QueueChain` owns several queues, each wrapped in a `QueueContext`.
//! `merge` folds every queue into the first one using the sort engine's
//! merge step, then frees the emptied queues, leaving their contexts in the
//! chain with no queue attached.
//!
//! ```text
//!   ctx 0: [a, d]          ctx 0: [a, b, c, d, e]
//!   ctx 1: [b, e]   ──>    ctx 1: (freed)
//!   ctx 2: [c]             ctx 2: (freed)
//! ```
//!
//! Every queue must already be sorted in the requested order.

use tracing::{debug, warn};

use ringq_core::{Metrics, QueueConfig, Result, Timer};

use crate::queue::Queue;
use crate::ring::SENTINEL;
use crate::sort::SortOrder;

/// One slot of a `QueueChain`
#[derive(Debug)]
pub struct QueueContext {
    id: usize,
    queue: Option<Queue>,
}

impl QueueContext {
    pub fn id(&self) -> usize {
        self.id
    }

    /// The queue, or `None` once it has been merged away
    pub fn queue(&self) -> Option<&Queue> {
        self.queue.as_ref()
    }

    pub fn queue_mut(&mut self) -> Option<&mut Queue> {
        self.queue.as_mut()
    }

    /// Element count; 0 when the queue has been freed
    pub fn size(&self) -> usize {
        self.queue.as_ref().map_or(0, Queue::size)
    }
}

/// Ordered collection of queues that can be merged into one
#[derive(Debug)]
pub struct QueueChain {
    contexts: Vec<QueueContext>,
    next_id: usize,
    config: QueueConfig,
    metrics: Metrics,
}

impl Default for QueueChain {
    fn default() -> Self {
        Self::new()
    }
}

impl QueueChain {
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default(), Metrics::new())
    }

    /// Queues created through `new_queue` share `config` and `metrics`
    pub fn with_config(config: QueueConfig, metrics: Metrics) -> Self {
        Self {
            contexts: Vec::new(),
            next_id: 0,
            config,
            metrics,
        }
    }

    /// Create an empty queue at the end of the chain and return its id
    pub fn new_queue(&mut self) -> Result<usize> {
        let queue = Queue::with_config(self.config.clone(), self.metrics.clone())?;
        Ok(self.push(queue))
    }

    /// Append an existing queue and return its id
    pub fn push(&mut self, queue: Queue) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.contexts.push(QueueContext {
            id,
            queue: Some(queue),
        });
        id
    }

    pub fn get(&self, id: usize) -> Option<&QueueContext> {
        self.contexts.iter().find(|ctx| ctx.id == id)
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut QueueContext> {
        self.contexts.iter_mut().find(|ctx| ctx.id == id)
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueueContext> {
        self.contexts.iter()
    }

    /// Merge every queue into the first context's queue and return its
    /// resulting size. Merged queues are freed. A queue that cannot be
    /// absorbed (element limit or allocation failure) is left where it was.
    /// Returns 0 when the chain is empty or its first queue was freed.
    pub fn merge(&mut self, order: SortOrder) -> usize {
        let Some((first, rest)) = self.contexts.split_first_mut() else {
            return 0;
        };
        let Some(target) = first.queue.as_mut() else {
            return 0;
        };

        let timer = Timer::new("merge");
        let mut merged = 0;
        for ctx in rest {
            let Some(source) = ctx.queue.as_mut() else {
                continue;
            };
            match target.absorb_sorted(source, order) {
                Ok(()) => {
                    ctx.queue = None;
                    merged += 1;
                }
                Err(e) => warn!("Queue {} not merged: {}", ctx.id, e),
            }
        }

        let total = target.size();
        target.metrics.record_merge();
        debug!("Merged {} queues into queue {} ({} elements)", merged, first.id, total);
        timer.stop();
        total
    }
}

impl Queue {
    /// Move every element of `source` into this queue, merging the two
    /// sorted sequences. `source` is left empty on success and untouched on
    /// failure.
    pub(crate) fn absorb_sorted(&mut self, source: &mut Queue, order: SortOrder) -> Result<()> {
        let incoming = source.ring.len();
        if incoming == 0 {
            return Ok(());
        }
        self.check_capacity(incoming)?;
        // One extra slot for the temporary anchor.
        self.ring.reserve(incoming + 1)?;

        let parked = self.ring.new_anchor()?;
        while let Some(element) = source.ring.detach(source.ring.first(SENTINEL)) {
            self.ring.push_back(parked, element)?;
        }

        let right = self.ring.detach_chain(parked, SENTINEL);
        let left = self.ring.detach_chain(SENTINEL, SENTINEL);
        let head = self.ring.merge_chains(left, right, SENTINEL, order);
        self.ring.close_chain(SENTINEL, head);
        self.ring.release_anchor(parked);
        Ok(())
    }
}
