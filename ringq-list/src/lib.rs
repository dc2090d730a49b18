//! # ringq List
//!
//! Circular doubly-linked queue of owned strings with a sentinel node, and
//! the in-place algorithms that run over it.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Queue API                            │
//! │    insert/remove head & tail · size · validate · iter        │
//! ├───────────────┬───────────────┬───────────────┬─────────────┤
//! │  Structural   │  Sort Engine  │  Monotonic    │  K-way      │
//! │  delete_mid   │  merge sort   │  ascend       │  merge      │
//! │  delete_dup   │  (chain split │  descend      │  (QueueChain│
//! │  swap/reverse │   + merge)    │               │   contexts) │
//! │  reverse_k    │               │               │             │
//! ├───────────────┴───────────────┴───────────────┴─────────────┤
//! │              Ring Primitives (arena, tagged slots)           │
//! │        link · unlink · move front/back · splice              │
//! ├─────────────────────────────────────────────────────────────┤
//! │              Element Store (ringq-core::Element)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-threaded: a `Queue` performs no internal locking, and every
//! operation finishes in O(n log n) or better.

mod monotonic;
mod ring;
mod structural;

pub mod merge;
pub mod queue;
pub mod sort;

pub use merge::{QueueChain, QueueContext};
pub use queue::Queue;
pub use sort::SortOrder;

pub use ringq_core::{Element, Error, Metrics, QueueConfig, Result};
