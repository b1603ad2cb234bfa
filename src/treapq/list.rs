//! The order list: `prev`/`next` links threading nodes in ascending order.

use super::Idx;
use super::NULL;
use super::Treapq;

impl<K, O> Treapq<K, O> {
    /// Link `idx` between `prev` and `next`, moving head/tail as needed.
    pub(super) fn splice_in(&mut self, idx: Idx, prev: Idx, next: Idx) {
        let node = self.node_mut(idx);
        node.prev = prev;
        node.next = next;

        if prev != NULL {
            self.node_mut(prev).next = idx;
        } else {
            self.head = idx;
        }
        if next != NULL {
            self.node_mut(next).prev = idx;
        } else {
            self.tail = idx;
        }
    }

    /// Unlink `idx` from its neighbors, moving head/tail as needed.
    pub(super) fn splice_out(&mut self, idx: Idx) {
        let node = self.node_mut(idx);
        let prev = node.prev;
        let next = node.next;
        node.prev = NULL;
        node.next = NULL;

        if prev != NULL {
            self.node_mut(prev).next = next;
        } else {
            self.head = next;
        }
        if next != NULL {
            self.node_mut(next).prev = prev;
        } else {
            self.tail = prev;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;

    fn list_with(n: u32) -> Treapq<u32, u32> {
        let mut treapq = Treapq::with_seed(1);
        let mut prev = NULL;
        for i in 0..n {
            let idx = treapq.alloc_node(Entry { key: i, order: i }, 0);
            treapq.splice_in(idx, prev, NULL);
            prev = idx;
        }
        return treapq;
    }

    fn forward(treapq: &Treapq<u32, u32>) -> Vec<u32> {
        let mut out = Vec::new();
        let mut idx = treapq.head;
        while idx != NULL {
            out.push(treapq.entry(idx).order);
            idx = treapq.node(idx).next;
        }
        return out;
    }

    fn backward(treapq: &Treapq<u32, u32>) -> Vec<u32> {
        let mut out = Vec::new();
        let mut idx = treapq.tail;
        while idx != NULL {
            out.push(treapq.entry(idx).order);
            idx = treapq.node(idx).prev;
        }
        return out;
    }

    #[test]
    fn splice_in_appends() {
        let treapq = list_with(4);
        assert_eq!(forward(&treapq), vec![0, 1, 2, 3]);
        assert_eq!(backward(&treapq), vec![3, 2, 1, 0]);
    }

    #[test]
    fn splice_in_at_head_and_middle() {
        let mut treapq = list_with(2);
        let (first, second) = (treapq.head, treapq.tail);

        let front = treapq.alloc_node(Entry { key: 10, order: 10 }, 0);
        treapq.splice_in(front, NULL, first);
        let middle = treapq.alloc_node(Entry { key: 20, order: 20 }, 0);
        treapq.splice_in(middle, first, second);

        assert_eq!(treapq.head, front);
        assert_eq!(forward(&treapq), vec![10, 0, 20, 1]);
        assert_eq!(backward(&treapq), vec![1, 20, 0, 10]);
    }

    #[test]
    fn splice_out_middle_head_tail() {
        let mut treapq = list_with(5);
        let middle = treapq.node(treapq.head).next;
        treapq.splice_out(middle);
        assert_eq!(forward(&treapq), vec![0, 2, 3, 4]);
        assert_eq!(treapq.node(middle).next, NULL);
        assert_eq!(treapq.node(middle).prev, NULL);

        let head = treapq.head;
        treapq.splice_out(head);
        let tail = treapq.tail;
        treapq.splice_out(tail);
        assert_eq!(forward(&treapq), vec![2, 3]);
        assert_eq!(backward(&treapq), vec![3, 2]);
    }

    #[test]
    fn splice_out_last_node_empties() {
        let mut treapq = list_with(1);
        let only = treapq.head;
        treapq.splice_out(only);
        assert_eq!(treapq.head, NULL);
        assert_eq!(treapq.tail, NULL);
    }
}
