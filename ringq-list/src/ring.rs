//! # Ring Primitives
//!
//! Arena-backed circular doubly-linked list. Nodes refer to their siblings
//! by `NodeId` (an index into the arena), never by ownership; the arena owns
//! every node and every element.
//!
//! ## Layout
//!
//! ```text
//!   nodes[0] = sentinel (Anchor)
//!
//!   ┌──────────┐   next   ┌──────────┐   next   ┌──────────┐
//!   │ sentinel │ ───────> │ elem "a" │ ───────> │ elem "b" │ ──┐
//!   │ (Anchor) │ <─────── │          │ <─────── │          │   │
//!   └──────────┘   prev   └──────────┘   prev   └──────────┘   │
//!        ▲                                                      │
//!        └──────────────────────── next ────────────────────────┘
//! ```
//!
//! Every slot is tagged:
//! - `Anchor`: the sentinel, or a temporary list head used to park a run of
//!   nodes before splicing it back (never carries a value)
//! - `Element`: a payload-bearing node
//! - `Vacant`: a free slot, threaded onto the free list
//!
//! Link primitives are O(1) and keep `a.next == b ⇔ b.prev == a` for every
//! node they touch. `unlink` only detaches; `detach` additionally vacates
//! the slot and hands the element back.

use std::mem;

use ringq_core::{Element, Error, Result};

/// Handle to a node inside one `Ring`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// The queue's own sentinel always occupies the first slot
pub(crate) const SENTINEL: NodeId = NodeId(0);

#[derive(Debug)]
enum Slot {
    Anchor,
    Element(Element),
    Vacant { next_free: Option<NodeId> },
}

#[derive(Debug)]
struct Node {
    prev: NodeId,
    next: NodeId,
    slot: Slot,
}

#[derive(Debug)]
pub(crate) struct Ring {
    nodes: Vec<Node>,
    free: Option<NodeId>,
    /// Element slots currently occupied
    len: usize,
}

impl Ring {
    /// Create a ring holding only its sentinel
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let capacity = capacity.max(1);
        let mut nodes = Vec::new();
        nodes
            .try_reserve(capacity)
            .map_err(|_| Error::Allocation {
                requested: capacity.saturating_mul(mem::size_of::<Node>()),
            })?;
        nodes.push(Node {
            prev: SENTINEL,
            next: SENTINEL,
            slot: Slot::Anchor,
        });
        Ok(Self {
            nodes,
            free: None,
            len: 0,
        })
    }

    /// Live elements, linked or parked on a temporary anchor
    pub fn len(&self) -> usize {
        self.len
    }

    /// Make room for `additional` nodes so the next inserts cannot fail
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        self.nodes
            .try_reserve(additional)
            .map_err(|_| Error::Allocation {
                requested: additional.saturating_mul(mem::size_of::<Node>()),
            })
    }

    #[inline]
    pub fn next(&self, id: NodeId) -> NodeId {
        self.nodes[id.0].next
    }

    #[inline]
    pub fn prev(&self, id: NodeId) -> NodeId {
        self.nodes[id.0].prev
    }

    #[inline]
    pub fn set_next(&mut self, id: NodeId, next: NodeId) {
        self.nodes[id.0].next = next;
    }

    #[inline]
    pub fn set_prev(&mut self, id: NodeId, prev: NodeId) {
        self.nodes[id.0].prev = prev;
    }

    #[inline]
    pub fn first(&self, anchor: NodeId) -> NodeId {
        self.next(anchor)
    }

    #[inline]
    pub fn last(&self, anchor: NodeId) -> NodeId {
        self.prev(anchor)
    }

    #[inline]
    pub fn is_empty(&self, anchor: NodeId) -> bool {
        self.next(anchor) == anchor
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes[id.0].slot {
            Slot::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Text of an element node. Anchors read as the empty string.
    #[inline]
    pub fn value(&self, id: NodeId) -> &str {
        debug_assert!(self.element(id).is_some(), "value read from non-element {:?}", id);
        self.element(id).map(Element::value).unwrap_or("")
    }

    /// Insert `node` between the adjacent nodes `prev` and `next`
    pub fn link(&mut self, node: NodeId, prev: NodeId, next: NodeId) {
        debug_assert_eq!(self.next(prev), next);
        self.nodes[node.0].prev = prev;
        self.nodes[node.0].next = next;
        self.nodes[prev.0].next = node;
        self.nodes[next.0].prev = node;
    }

    /// Detach `node` from its ring, leaving it self-linked
    pub fn unlink(&mut self, node: NodeId) {
        let prev = self.prev(node);
        let next = self.next(node);
        self.nodes[prev.0].next = next;
        self.nodes[next.0].prev = prev;
        self.nodes[node.0].prev = node;
        self.nodes[node.0].next = node;
    }

    pub fn move_to_front(&mut self, node: NodeId, anchor: NodeId) {
        self.unlink(node);
        let first = self.first(anchor);
        self.link(node, anchor, first);
    }

    pub fn move_to_back(&mut self, node: NodeId, anchor: NodeId) {
        self.unlink(node);
        let last = self.last(anchor);
        self.link(node, last, anchor);
    }

    /// Move every node parked on `source` to just after `after`, leaving
    /// `source` empty
    pub fn splice(&mut self, source: NodeId, after: NodeId) {
        if self.is_empty(source) {
            return;
        }
        let first = self.first(source);
        let last = self.last(source);
        let next = self.next(after);

        self.nodes[first.0].prev = after;
        self.nodes[after.0].next = first;
        self.nodes[last.0].next = next;
        self.nodes[next.0].prev = last;

        self.nodes[source.0].prev = source;
        self.nodes[source.0].next = source;
    }

    /// Exchange a node's `prev` and `next` links
    pub fn swap_links(&mut self, node: NodeId) {
        let n = &mut self.nodes[node.0];
        mem::swap(&mut n.prev, &mut n.next);
    }

    pub fn push_front(&mut self, anchor: NodeId, element: Element) -> Result<NodeId> {
        let node = self.alloc(Slot::Element(element))?;
        self.len += 1;
        self.move_to_front(node, anchor);
        Ok(node)
    }

    pub fn push_back(&mut self, anchor: NodeId, element: Element) -> Result<NodeId> {
        let node = self.alloc(Slot::Element(element))?;
        self.len += 1;
        self.move_to_back(node, anchor);
        Ok(node)
    }

    /// Unlink an element node, free its slot and return the element.
    /// Anchors and vacant slots yield `None` and are left untouched.
    pub fn detach(&mut self, node: NodeId) -> Option<Element> {
        if !matches!(self.nodes[node.0].slot, Slot::Element(_)) {
            return None;
        }
        self.unlink(node);
        let slot = mem::replace(
            &mut self.nodes[node.0].slot,
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(node);
        self.len -= 1;
        match slot {
            Slot::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Allocate a temporary list head
    pub fn new_anchor(&mut self) -> Result<NodeId> {
        self.alloc(Slot::Anchor)
    }

    /// Return a temporary anchor's slot to the free list
    pub fn release_anchor(&mut self, anchor: NodeId) {
        debug_assert_ne!(anchor, SENTINEL, "the sentinel is never released");
        debug_assert!(self.is_empty(anchor), "anchor released while holding nodes");
        self.nodes[anchor.0].slot = Slot::Vacant {
            next_free: self.free,
        };
        self.free = Some(anchor);
    }

    /// Turn the ring on `anchor` into a chain ending at `nil` (via `next`)
    /// and reset `anchor` to empty. Returns the chain head, or `nil` when
    /// the ring was empty. `prev` links inside the chain are left stale.
    pub fn detach_chain(&mut self, anchor: NodeId, nil: NodeId) -> NodeId {
        if self.is_empty(anchor) {
            return nil;
        }
        let head = self.first(anchor);
        let tail = self.last(anchor);
        self.set_next(tail, nil);
        self.set_next(anchor, anchor);
        self.set_prev(anchor, anchor);
        head
    }

    /// Close a `next`-linked chain (terminated by `anchor`) back into the
    /// ring on `anchor`, rebuilding every `prev` link
    pub fn close_chain(&mut self, anchor: NodeId, head: NodeId) {
        self.set_next(anchor, head);
        let mut prev = anchor;
        let mut cur = head;
        while cur != anchor {
            self.set_prev(cur, prev);
            prev = cur;
            cur = self.next(cur);
        }
        self.set_prev(anchor, prev);
    }

    /// Count the nodes on `anchor`'s ring by walking it once
    pub fn count(&self, anchor: NodeId) -> usize {
        let mut count = 0;
        let mut cur = self.first(anchor);
        while cur != anchor {
            count += 1;
            cur = self.next(cur);
        }
        count
    }

    pub fn iter(&self, anchor: NodeId) -> Iter<'_> {
        Iter {
            ring: self,
            front: self.first(anchor),
            back: self.last(anchor),
            done: self.is_empty(anchor),
        }
    }

    /// Walk `anchor`'s ring checking link symmetry, slot tags and that it
    /// holds every live element
    pub fn validate(&self, anchor: NodeId) -> Result<()> {
        let corrupt = |details: String| Err(Error::RingCorruption { details });

        if anchor.0 >= self.nodes.len() || !matches!(self.nodes[anchor.0].slot, Slot::Anchor) {
            return corrupt(format!("{:?} is not an anchor", anchor));
        }

        let mut count = 0;
        let mut cur = anchor;
        loop {
            let next = self.next(cur);
            if next.0 >= self.nodes.len() {
                return corrupt(format!("{:?} links past the arena to {:?}", cur, next));
            }
            if self.prev(next) != cur {
                return corrupt(format!(
                    "{:?}.next = {:?} but {:?}.prev = {:?}",
                    cur,
                    next,
                    next,
                    self.prev(next)
                ));
            }
            if next == anchor {
                break;
            }
            match self.nodes[next.0].slot {
                Slot::Element(_) => count += 1,
                Slot::Anchor => return corrupt(format!("anchor {:?} linked as an element", next)),
                Slot::Vacant { .. } => return corrupt(format!("vacant slot {:?} is linked", next)),
            }
            if count > self.len {
                return corrupt(format!("ring on {:?} does not close", anchor));
            }
            cur = next;
        }

        if count != self.len {
            return corrupt(format!(
                "ring holds {} elements but {} are live",
                count, self.len
            ));
        }
        Ok(())
    }

    /// Consume the ring, yielding every element it still owns
    pub fn into_elements(self) -> impl Iterator<Item = Element> {
        self.nodes.into_iter().filter_map(|node| match node.slot {
            Slot::Element(element) => Some(element),
            _ => None,
        })
    }

    fn alloc(&mut self, slot: Slot) -> Result<NodeId> {
        if let Some(id) = self.free {
            let node = &mut self.nodes[id.0];
            self.free = match node.slot {
                Slot::Vacant { next_free } => next_free,
                _ => None,
            };
            node.slot = slot;
            node.prev = id;
            node.next = id;
            return Ok(id);
        }

        self.reserve(1)?;
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            prev: id,
            next: id,
            slot,
        });
        Ok(id)
    }
}

/// Head-to-tail iterator over the elements of one ring
pub(crate) struct Iter<'a> {
    ring: &'a Ring,
    front: NodeId,
    back: NodeId,
    done: bool,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let node = self.front;
        if node == self.back {
            self.done = true;
        }
        self.front = self.ring.next(node);
        self.ring.element(node)
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let node = self.back;
        if node == self.front {
            self.done = true;
        }
        self.back = self.ring.prev(node);
        self.ring.element(node)
    }
}
