//! # Queue
//!
//! Owned-string queue over a sentinel ring. The queue owns the sentinel and
//! every element; callers only ever see element values or whole `Element`s
//! handed out by a remove.
//!
//! ## Operation Costs
//!
//! - insert / remove at either end: O(1)
//! - `size`: O(n), counted by walking the ring
//! - structural algorithms, monotonic filters: O(n)
//! - `sort`: O(n log n)

use std::fmt;

use tracing::{debug, trace, warn};

use ringq_core::{Element, Error, Metrics, QueueConfig, Result};

use crate::ring::{Ring, SENTINEL};

/// Queue of owned strings
pub struct Queue {
    pub(crate) ring: Ring,
    pub(crate) config: QueueConfig,
    pub(crate) metrics: Metrics,
}

#[derive(Clone, Copy)]
enum End {
    Head,
    Tail,
}

impl Queue {
    /// Create an empty queue with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(QueueConfig::default(), Metrics::new())
    }

    /// Create an empty queue
    pub fn with_config(config: QueueConfig, metrics: Metrics) -> Result<Self> {
        config.validate()?;
        let ring = Ring::with_capacity(config.initial_capacity)?;
        debug!(
            "Created queue (capacity: {}, limit: {:?})",
            config.initial_capacity, config.max_elements
        );
        Ok(Self {
            ring,
            config,
            metrics,
        })
    }

    /// Release every element, then the queue itself. Returns the number of
    /// elements released.
    pub fn destroy(self) -> usize {
        let Queue { ring, metrics, .. } = self;
        let mut released = 0;
        for element in ring.into_elements() {
            element.release();
            released += 1;
        }
        metrics.record_releases(released as u64);
        debug!("Destroyed queue ({} elements released)", released);
        released
    }

    /// Copy `text` into a new element at the head
    pub fn insert_head(&mut self, text: &str) -> Result<()> {
        self.insert(End::Head, text)
    }

    /// Copy `text` into a new element at the tail
    pub fn insert_tail(&mut self, text: &str) -> Result<()> {
        self.insert(End::Tail, text)
    }

    /// Insert every value at the tail, in order. Stops at the first failure;
    /// values inserted before it stay in the queue.
    pub fn extend_tail<I, S>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inserted = 0;
        for value in values {
            self.insert_tail(value.as_ref())?;
            inserted += 1;
        }
        Ok(inserted)
    }

    /// Unlink the head element and hand it to the caller
    pub fn remove_head(&mut self) -> Option<Element> {
        self.remove(End::Head)
    }

    /// Unlink the tail element and hand it to the caller
    pub fn remove_tail(&mut self) -> Option<Element> {
        self.remove(End::Tail)
    }

    /// Like `remove_head`, also copying the value into `buf` as a
    /// NUL-terminated string truncated to `buf.len() - 1` bytes
    pub fn remove_head_into(&mut self, buf: &mut [u8]) -> Option<Element> {
        let element = self.remove(End::Head)?;
        element.copy_to(buf);
        Some(element)
    }

    /// Tail counterpart of `remove_head_into`
    pub fn remove_tail_into(&mut self, buf: &mut [u8]) -> Option<Element> {
        let element = self.remove(End::Tail)?;
        element.copy_to(buf);
        Some(element)
    }

    /// Number of elements, counted by one traversal of the ring
    pub fn size(&self) -> usize {
        self.ring.count(SENTINEL)
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty(SENTINEL)
    }

    pub fn front(&self) -> Option<&str> {
        self.ring.element(self.ring.first(SENTINEL)).map(Element::value)
    }

    pub fn back(&self) -> Option<&str> {
        self.ring.element(self.ring.last(SENTINEL)).map(Element::value)
    }

    /// Values from head to tail
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.ring.iter(SENTINEL).map(Element::value)
    }

    /// Check ring consistency, sentinel integrity and element accounting
    pub fn validate(&self) -> Result<()> {
        self.ring.validate(SENTINEL)
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Fail with `ResourceExhausted` if `additional` more elements would
    /// exceed the configured limit
    pub(crate) fn check_capacity(&self, additional: usize) -> Result<()> {
        match self.config.max_elements {
            Some(max) if self.ring.len() + additional > max => {
                self.metrics.record_allocation_failure();
                warn!(
                    "Queue element limit reached ({} live, {} requested, max {})",
                    self.ring.len(),
                    additional,
                    max
                );
                Err(Error::ResourceExhausted {
                    resource: format!("queue element limit ({})", max),
                })
            }
            _ => Ok(()),
        }
    }

    fn insert(&mut self, end: End, text: &str) -> Result<()> {
        self.check_capacity(1)?;

        let element = Element::new(text).map_err(|e| self.allocation_failed(e))?;
        let pushed = match end {
            End::Head => self.ring.push_front(SENTINEL, element),
            End::Tail => self.ring.push_back(SENTINEL, element),
        };
        pushed.map_err(|e| self.allocation_failed(e))?;

        self.metrics.record_insert();
        trace!(len = text.len(), "Inserted element");
        Ok(())
    }

    fn remove(&mut self, end: End) -> Option<Element> {
        let node = match end {
            End::Head => self.ring.first(SENTINEL),
            End::Tail => self.ring.last(SENTINEL),
        };
        // An empty queue yields the sentinel, which `detach` refuses.
        let element = self.ring.detach(node)?;
        self.metrics.record_removal();
        trace!(len = element.len(), "Removed element");
        Some(element)
    }

    fn allocation_failed(&self, err: Error) -> Error {
        self.metrics.record_allocation_failure();
        warn!("Insert failed: {}", err);
        err
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
