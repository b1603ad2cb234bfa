//! Treap shape: search, rotations, transplant and weight repair.
//!
//! All parent/child relinking goes through `transplant`, so the parent pointer
//! of a moved subtree and the child slot that points at it change together.

use super::Idx;
use super::NULL;
use super::Treapq;
use crate::profiling;

/// Where a new order value attaches.
pub(super) struct InsertionPoint {
    /// Last node visited; the new node becomes its child.
    pub parent: Idx,
    /// Attach as `parent.left` rather than `parent.right`.
    pub as_left_child: bool,
    /// Smallest node on the path with a larger order.
    pub next: Idx,
    /// Largest node on the path with an order less than or equal.
    pub prev: Idx,
}

impl<K, O: Ord> Treapq<K, O> {
    /// Descend from the root to the leaf slot for `order`. Ties go right.
    ///
    /// The last left turn and the last right turn on the way down are the new
    /// node's in-order neighbors, so the list splice needs no separate search.
    pub(super) fn search_insertion_point(&self, order: &O) -> InsertionPoint {
        let mut point = InsertionPoint {
            parent: NULL,
            as_left_child: false,
            next: NULL,
            prev: NULL,
        };

        let mut idx = self.root;
        while idx != NULL {
            point.parent = idx;
            let node = self.node(idx);
            if *order < self.entry(idx).order {
                point.as_left_child = true;
                point.next = idx;
                idx = node.left;
            } else {
                point.as_left_child = false;
                point.prev = idx;
                idx = node.right;
            }
        }

        point
    }
}

impl<K, O> Treapq<K, O> {
    /// Put subtree `y` in `x`'s slot. `x`'s own links are left as they are.
    pub(super) fn transplant(&mut self, x: Idx, y: Idx) {
        let parent = self.node(x).parent;
        if parent == NULL {
            self.root = y;
        } else if self.node(parent).left == x {
            self.node_mut(parent).left = y;
        } else {
            self.node_mut(parent).right = y;
        }
        if y != NULL {
            self.node_mut(y).parent = parent;
        }
        profiling::transplant();
    }

    /// Lift `x.right` into `x`'s place; `x` becomes its left child.
    pub(super) fn rotate_left(&mut self, x: Idx) {
        let y = self.node(x).right;
        let y_left = self.node(y).left;

        self.node_mut(x).right = y_left;
        if y_left != NULL {
            self.node_mut(y_left).parent = x;
        }
        self.transplant(x, y);
        self.node_mut(y).left = x;
        self.node_mut(x).parent = y;
        profiling::rotation();
    }

    /// Lift `x.left` into `x`'s place; `x` becomes its right child.
    pub(super) fn rotate_right(&mut self, x: Idx) {
        let y = self.node(x).left;
        let y_right = self.node(y).right;

        self.node_mut(x).left = y_right;
        if y_right != NULL {
            self.node_mut(y_right).parent = x;
        }
        self.transplant(x, y);
        self.node_mut(y).right = x;
        self.node_mut(x).parent = y;
        profiling::rotation();
    }

    /// The lightest of `p` and its children. `p` wins ties.
    fn lightest(&self, p: Idx) -> Idx {
        let node = self.node(p);
        let mut lightest = p;
        let mut weight = node.weight;
        for child in [node.left, node.right] {
            if child != NULL && self.node(child).weight < weight {
                lightest = child;
                weight = self.node(child).weight;
            }
        }
        lightest
    }

    /// Rotate a freshly attached leaf upward until its parent is lighter.
    pub(super) fn bubble_up(&mut self, idx: Idx) {
        let mut p = self.node(idx).parent;
        while p != NULL {
            let lightest = self.lightest(p);
            if lightest == self.node(p).left {
                self.rotate_right(p);
            } else if lightest == self.node(p).right {
                self.rotate_left(p);
            } else {
                break;
            }
            p = self.node(idx).parent;
        }
    }

    /// Take `p` out of the tree.
    ///
    /// `successor` must be `p`'s in-order successor as it was before `p` left
    /// the list. With two children, the successor moves into `p`'s slot and
    /// takes over `p`'s weight: it now has exactly `p`'s parent and subtrees,
    /// so the heap order that held around `p` still holds and nothing rotates.
    pub(super) fn detach(&mut self, p: Idx, successor: Idx) {
        let left = self.node(p).left;
        let right = self.node(p).right;

        if left == NULL {
            self.transplant(p, right);
        } else if right == NULL {
            self.transplant(p, left);
        } else {
            let s = successor;
            debug_assert!(s != NULL && self.node(s).left == NULL);

            if s != right {
                let s_right = self.node(s).right;
                self.transplant(s, s_right);
                self.node_mut(s).right = right;
                self.node_mut(right).parent = s;
            }
            self.node_mut(s).left = left;
            self.node_mut(left).parent = s;
            self.transplant(p, s);

            self.node_mut(s).weight = self.node(p).weight;
            profiling::weight_copy();
        }
    }
}
