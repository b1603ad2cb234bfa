//! Whole-structure consistency check.

use std::hash::Hash;

use super::NULL;
use super::Treapq;

impl<K: Hash + Eq + Clone, O: Ord> Treapq<K, O> {
    /// Walk every node and panic if tree, list, index and arena disagree.
    ///
    /// O(n). Debug builds run this after every mutation; it is public so tests
    /// can call it in release builds too.
    pub fn check_invariants(&self) {
        // Invariant 1: root, head and tail are null together, exactly when empty.
        let empty = self.root == NULL;
        assert_eq!(empty, self.head == NULL, "INVARIANT VIOLATED: root/head emptiness differ");
        assert_eq!(empty, self.tail == NULL, "INVARIANT VIOLATED: root/tail emptiness differ");
        assert_eq!(empty, self.index.is_empty(), "INVARIANT VIOLATED: root/index emptiness differ");
        if !empty {
            assert_eq!(self.node(self.root).parent, NULL, "INVARIANT VIOLATED: root has a parent");
        }

        // Invariant 2: parent links mirror child links and weights are heap ordered.
        let mut in_order = Vec::with_capacity(self.index.len());
        let mut stack = Vec::new();
        let mut idx = self.root;
        loop {
            while idx != NULL {
                stack.push(idx);
                idx = self.node(idx).left;
            }
            let Some(top) = stack.pop() else { break };
            let node = self.node(top);
            assert!(node.entry.is_some(), "INVARIANT VIOLATED: freed node {} in tree", top);
            for child in [node.left, node.right] {
                if child == NULL {
                    continue;
                }
                assert_eq!(
                    self.node(child).parent, top,
                    "INVARIANT VIOLATED: node {} is a child of {} but points elsewhere",
                    child, top
                );
                assert!(
                    node.weight <= self.node(child).weight,
                    "INVARIANT VIOLATED: weight of {} exceeds its child {}",
                    top, child
                );
            }
            in_order.push(top);
            idx = node.right;
        }
        assert_eq!(
            in_order.len(),
            self.index.len(),
            "INVARIANT VIOLATED: tree holds {} nodes, index {}",
            in_order.len(),
            self.index.len()
        );

        // Invariant 3: the list is the in-order sequence, sorted, with mirrored prev links.
        let mut prev = NULL;
        let mut idx = self.head;
        let mut pos = 0usize;
        while idx != NULL {
            assert!(pos < in_order.len(), "INVARIANT VIOLATED: list longer than tree");
            assert_eq!(idx, in_order[pos], "INVARIANT VIOLATED: list leaves in-order at {}", pos);
            assert_eq!(self.node(idx).prev, prev, "INVARIANT VIOLATED: bad prev link at {}", pos);
            if prev != NULL {
                assert!(
                    self.entry(prev).order <= self.entry(idx).order,
                    "INVARIANT VIOLATED: orders decrease at {}",
                    pos
                );
            }
            prev = idx;
            idx = self.node(idx).next;
            pos += 1;
        }
        assert_eq!(pos, in_order.len(), "INVARIANT VIOLATED: list shorter than tree");
        assert_eq!(self.tail, prev, "INVARIANT VIOLATED: tail is not the last list node");

        // Invariant 4: every indexed key points at the live node holding it.
        for (key, &idx) in self.index.iter() {
            let entry = self.node(idx).entry.as_ref();
            assert!(
                entry.is_some_and(|entry| entry.key == *key),
                "INVARIANT VIOLATED: index slot {} holds another key",
                idx
            );
        }

        // Invariant 5: every arena slot is either live or free.
        assert_eq!(
            self.index.len() + self.free_list.len(),
            self.nodes.len(),
            "INVARIANT VIOLATED: arena slots leaked"
        );
    }
}
