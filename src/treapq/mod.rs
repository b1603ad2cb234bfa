//! Treapq: a keyed priority structure.
//!
//! Three views share one arena of nodes:
//!
//! - an index (`FxHashMap<K, Idx>`) for O(1) membership, lookup and removal,
//! - a treap ordered by the entry's order value and heap-ordered by a random
//!   weight, which finds insertion points in O(log n) expected,
//! - a doubly linked list threading the nodes in ascending order, which gives
//!   O(1) min/max and O(n) iteration in either direction.
//!
//! ```text
//!             tree                          list
//!            b:2 (w=3)
//!           /        \              b:2 <-> d:2 <-> a:5 <-> c:8
//!      (none)       a:5 (w=9)       ^head                   ^tail
//!                  /       \
//!            d:2 (w=40)  c:8 (w=12)
//! ```
//!
//! Every mutation goes through the index first, then relinks the tree and the
//! list together, so the list is always the tree's in-order sequence.

mod invariants;
mod iter;
mod list;
mod tree;

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::ops::Index;

use rand_core::RngCore;
use rand_core::SeedableRng;
use rustc_hash::FxHashMap;

use crate::entry::Entry;
use crate::error::TreapqError;
use crate::profiling;
use crate::rng::XorShift64;

pub use iter::IntoItems;
pub use iter::Items;

/// Node index type. u32 keeps links compact.
type Idx = u32;

/// Null index marker.
const NULL: Idx = Idx::MAX;

/// A node in the arena.
///
/// `entry` is `None` only while the slot sits on the free list.
#[derive(Clone)]
struct Node<K, O> {
    entry: Option<Entry<K, O>>,
    /// Heap key for balancing. Never exposed.
    weight: u32,
    left: Idx,
    right: Idx,
    parent: Idx,
    /// Next larger entry in the order list.
    next: Idx,
    /// Next smaller entry in the order list.
    prev: Idx,
}

impl<K, O> Node<K, O> {
    fn new(entry: Entry<K, O>, weight: u32) -> Self {
        Node {
            entry: Some(entry),
            weight,
            left: NULL,
            right: NULL,
            parent: NULL,
            next: NULL,
            prev: NULL,
        }
    }
}

/// What a [`Treapq::put`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Put<K, O> {
    /// The key was absent and is now present.
    Inserted,
    /// The key was already present with the same order; nothing changed.
    Unchanged,
    /// The key was present with another order. The old entry was removed and
    /// the new one inserted in its sorted position.
    Replaced(Entry<K, O>),
}

/// An indexable, order-maintaining priority structure.
///
/// Keys are unique. Each key carries an order value; entries are kept sorted by
/// that value, with equal orders kept in insertion order (a later `put` lands
/// after every present entry with the same order).
///
/// | operation                       | cost              |
/// |---------------------------------|-------------------|
/// | `len`, `is_empty`, `min`, `max` | O(1)              |
/// | `get`, `contains`               | O(1) expected     |
/// | `put`, `remove`                 | O(log n) expected |
/// | `extract_min`, `extract_max`    | O(1) expected     |
/// | `items`                         | O(1) per step     |
///
/// In debug builds every mutation also runs [`Treapq::check_invariants`],
/// which is O(n).
#[derive(Clone)]
pub struct Treapq<K, O> {
    /// Arena of nodes.
    nodes: Vec<Node<K, O>>,
    /// Free list for reusing removed node slots.
    free_list: Vec<Idx>,
    /// Key to arena slot.
    index: FxHashMap<K, Idx>,
    root: Idx,
    /// Smallest entry.
    head: Idx,
    /// Largest entry.
    tail: Idx,
    /// Source of node weights.
    rng: XorShift64,
}

impl<K, O> Treapq<K, O> {
    // --- Node access helpers ---

    fn node(&self, idx: Idx) -> &Node<K, O> {
        &self.nodes[idx as usize]
    }

    fn node_mut(&mut self, idx: Idx) -> &mut Node<K, O> {
        &mut self.nodes[idx as usize]
    }

    fn entry(&self, idx: Idx) -> &Entry<K, O> {
        match &self.node(idx).entry {
            Some(entry) => entry,
            None => unreachable!("freed node {} is still linked", idx),
        }
    }

    fn alloc_node(&mut self, entry: Entry<K, O>, weight: u32) -> Idx {
        if let Some(idx) = self.free_list.pop() {
            *self.node_mut(idx) = Node::new(entry, weight);
            idx
        } else {
            let idx = self.nodes.len() as Idx;
            assert!(idx != NULL, "treapq arena is full");
            self.nodes.push(Node::new(entry, weight));
            idx
        }
    }

    /// Return a fully unlinked slot to the free list, handing back its entry.
    fn free_node(&mut self, idx: Idx) -> Entry<K, O> {
        let node = self.node_mut(idx);
        let entry = match node.entry.take() {
            Some(entry) => entry,
            None => unreachable!("node {} freed twice", idx),
        };
        node.left = NULL;
        node.right = NULL;
        node.parent = NULL;
        node.next = NULL;
        node.prev = NULL;
        self.free_list.push(idx);
        entry
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        return self.index.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.root == NULL;
    }

    /// Drop every entry. The weight generator keeps its state.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.index.clear();
        self.root = NULL;
        self.head = NULL;
        self.tail = NULL;
    }

    /// The entry with the smallest order, if any.
    ///
    /// Among equal orders this is the one put earliest.
    pub fn min(&self) -> Option<&Entry<K, O>> {
        if self.head == NULL {
            return None;
        }
        return Some(self.entry(self.head));
    }

    /// The entry with the largest order, if any.
    ///
    /// Among equal orders this is the one put latest.
    pub fn max(&self) -> Option<&Entry<K, O>> {
        if self.tail == NULL {
            return None;
        }
        return Some(self.entry(self.tail));
    }

    /// Iterate entries in ascending order, or descending if `descending`.
    ///
    /// Each call starts a fresh traversal. The iterator is double-ended, so
    /// `items(false).rev()` visits the same sequence as `items(true)`.
    pub fn items(&self, descending: bool) -> Items<'_, K, O> {
        return Items::new(self, descending);
    }

    /// Iterate entries in ascending order.
    pub fn iter(&self) -> Items<'_, K, O> {
        return self.items(false);
    }
}

impl<K: Hash + Eq + Clone, O: Ord> Treapq<K, O> {
    /// Create an empty structure with weights seeded from the OS.
    pub fn new() -> Treapq<K, O> {
        return Self::from_parts(0, XorShift64::from_entropy());
    }

    /// Create an empty structure with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Treapq<K, O> {
        return Self::from_parts(capacity, XorShift64::from_entropy());
    }

    /// Create an empty structure whose weights come from a fixed seed.
    ///
    /// The shape of the tree then depends only on the sequence of operations,
    /// which makes runs reproducible.
    pub fn with_seed(seed: u64) -> Treapq<K, O> {
        return Self::from_parts(0, XorShift64::seed_from_u64(seed));
    }

    fn from_parts(capacity: usize, rng: XorShift64) -> Treapq<K, O> {
        return Treapq {
            nodes: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            root: NULL,
            head: NULL,
            tail: NULL,
            rng,
        };
    }

    /// Whether `key` is present.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        return self.index.contains_key(key);
    }

    /// The entry stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Result<&Entry<K, O>, TreapqError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.index.get(key).copied().ok_or(TreapqError::KeyNotFound)?;
        return Ok(self.entry(idx));
    }

    /// Insert `key` with `order`.
    ///
    /// - Absent key: inserted in sorted position.
    /// - Present with an equal order: nothing happens.
    /// - Present with another order: the old entry is removed and the key is
    ///   inserted again, so it lands after any entries sharing the new order.
    pub fn put(&mut self, key: K, order: O) -> Put<K, O> {
        let mut outcome = Put::Inserted;

        if let Some(&idx) = self.index.get(&key) {
            if self.entry(idx).order == order {
                profiling::noop_put();
                return Put::Unchanged;
            }
            self.index.remove(&key);
            outcome = Put::Replaced(self.unlink(idx));
            profiling::replacement();
        }

        self.insert_absent(key, order);
        self.debug_check();
        return outcome;
    }

    /// Remove `key`, returning its entry.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<Entry<K, O>, TreapqError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.index.remove(key).ok_or(TreapqError::KeyNotFound)?;
        let entry = self.unlink(idx);
        self.debug_check();
        return Ok(entry);
    }

    /// Remove and return the entry with the smallest order.
    pub fn extract_min(&mut self) -> Option<Entry<K, O>> {
        let idx = self.head;
        if idx == NULL {
            return None;
        }
        self.unindex(idx);

        // The head is leftmost in the tree; at most its right subtree remains.
        let successor = self.node(idx).next;
        self.splice_out(idx);
        let (left, right) = (self.node(idx).left, self.node(idx).right);
        if left == NULL {
            self.transplant(idx, right);
        } else {
            self.detach(idx, successor);
        }

        let entry = self.free_node(idx);
        self.debug_check();
        return Some(entry);
    }

    /// Remove and return the entry with the largest order.
    pub fn extract_max(&mut self) -> Option<Entry<K, O>> {
        let idx = self.tail;
        if idx == NULL {
            return None;
        }
        self.unindex(idx);

        // The tail is rightmost in the tree; at most its left subtree remains.
        let successor = self.node(idx).next;
        self.splice_out(idx);
        let (left, right) = (self.node(idx).left, self.node(idx).right);
        if right == NULL {
            self.transplant(idx, left);
        } else {
            self.detach(idx, successor);
        }

        let entry = self.free_node(idx);
        self.debug_check();
        return Some(entry);
    }

    /// Allocate and link a node for a key the index does not hold.
    fn insert_absent(&mut self, key: K, order: O) {
        let point = self.search_insertion_point(&order);
        let weight = self.rng.next_u32();
        let idx = self.alloc_node(Entry { key: key.clone(), order }, weight);
        self.index.insert(key, idx);

        self.splice_in(idx, point.prev, point.next);

        self.node_mut(idx).parent = point.parent;
        if point.parent == NULL {
            self.root = idx;
        } else if point.as_left_child {
            self.node_mut(point.parent).left = idx;
        } else {
            self.node_mut(point.parent).right = idx;
        }

        self.bubble_up(idx);
    }

    /// Unlink an already unindexed node from list and tree and free it.
    fn unlink(&mut self, idx: Idx) -> Entry<K, O> {
        // Read before the splice clears it; this is the in-order successor.
        let successor = self.node(idx).next;
        self.splice_out(idx);
        self.detach(idx, successor);
        return self.free_node(idx);
    }

    fn unindex(&mut self, idx: Idx) {
        if let Some(entry) = &self.nodes[idx as usize].entry {
            self.index.remove(&entry.key);
        }
    }

    #[cfg(debug_assertions)]
    fn debug_check(&self) {
        self.check_invariants();
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn debug_check(&self) {}
}

impl<K: Hash + Eq + Clone, O: Ord> Default for Treapq<K, O> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<K, O, Q> Index<&Q> for Treapq<K, O>
where
    K: Hash + Eq + Clone + Borrow<Q>,
    O: Ord,
    Q: Hash + Eq + ?Sized,
{
    type Output = Entry<K, O>;

    /// Panics if `key` is absent.
    fn index(&self, key: &Q) -> &Entry<K, O> {
        match self.get(key) {
            Ok(entry) => entry,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<K: Hash + Eq + Clone, O: Ord> Extend<(K, O)> for Treapq<K, O> {
    fn extend<I: IntoIterator<Item = (K, O)>>(&mut self, iter: I) {
        for (key, order) in iter {
            self.put(key, order);
        }
    }
}

impl<K: Hash + Eq + Clone, O: Ord> FromIterator<(K, O)> for Treapq<K, O> {
    fn from_iter<I: IntoIterator<Item = (K, O)>>(iter: I) -> Self {
        let mut treapq = Treapq::new();
        treapq.extend(iter);
        return treapq;
    }
}

impl<K: fmt::Debug, O: fmt::Debug> fmt::Debug for Treapq<K, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Treapq ")?;
        f.debug_map()
            .entries(self.iter().map(|entry| (&entry.key, &entry.order)))
            .finish()
    }
}
