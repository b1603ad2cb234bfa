//! Ordered iteration by walking the order list.

use std::hash::Hash;
use std::iter::FusedIterator;

use super::Idx;
use super::NULL;
use super::Treapq;
use crate::entry::Entry;

/// Borrowing iterator over entries in order. See [`Treapq::items`].
///
/// Holding it borrows the structure, so it cannot be mutated mid-walk.
pub struct Items<'a, K, O> {
    treapq: &'a Treapq<K, O>,
    /// Next node from the low end.
    front: Idx,
    /// Next node from the high end.
    back: Idx,
    /// Entries not yet yielded from either end.
    remaining: usize,
    descending: bool,
}

impl<'a, K, O> Items<'a, K, O> {
    pub(super) fn new(treapq: &'a Treapq<K, O>, descending: bool) -> Self {
        Items {
            treapq,
            front: treapq.head,
            back: treapq.tail,
            remaining: treapq.index.len(),
            descending,
        }
    }

    fn pop_front(&mut self) -> Option<&'a Entry<K, O>> {
        if self.remaining == 0 || self.front == NULL {
            return None;
        }
        let treapq: &'a Treapq<K, O> = self.treapq;
        let idx = self.front;
        self.front = treapq.node(idx).next;
        self.remaining -= 1;
        Some(treapq.entry(idx))
    }

    fn pop_back(&mut self) -> Option<&'a Entry<K, O>> {
        if self.remaining == 0 || self.back == NULL {
            return None;
        }
        let treapq: &'a Treapq<K, O> = self.treapq;
        let idx = self.back;
        self.back = treapq.node(idx).prev;
        self.remaining -= 1;
        Some(treapq.entry(idx))
    }
}

impl<'a, K, O> Iterator for Items<'a, K, O> {
    type Item = &'a Entry<K, O>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.descending {
            self.pop_back()
        } else {
            self.pop_front()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, O> DoubleEndedIterator for Items<'a, K, O> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.descending {
            self.pop_front()
        } else {
            self.pop_back()
        }
    }
}

impl<K, O> ExactSizeIterator for Items<'_, K, O> {}

impl<K, O> FusedIterator for Items<'_, K, O> {}

impl<K, O> Clone for Items<'_, K, O> {
    fn clone(&self) -> Self {
        Items {
            treapq: self.treapq,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
            descending: self.descending,
        }
    }
}

impl<'a, K, O> IntoIterator for &'a Treapq<K, O> {
    type Item = &'a Entry<K, O>;
    type IntoIter = Items<'a, K, O>;

    fn into_iter(self) -> Items<'a, K, O> {
        self.iter()
    }
}

/// Consuming iterator yielding entries in ascending order.
pub struct IntoItems<K, O> {
    treapq: Treapq<K, O>,
}

impl<K: Hash + Eq + Clone, O: Ord> Iterator for IntoItems<K, O> {
    type Item = Entry<K, O>;

    fn next(&mut self) -> Option<Entry<K, O>> {
        self.treapq.extract_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.treapq.len();
        (len, Some(len))
    }
}

impl<K: Hash + Eq + Clone, O: Ord> DoubleEndedIterator for IntoItems<K, O> {
    fn next_back(&mut self) -> Option<Entry<K, O>> {
        self.treapq.extract_max()
    }
}

impl<K: Hash + Eq + Clone, O: Ord> ExactSizeIterator for IntoItems<K, O> {}

impl<K: Hash + Eq + Clone, O: Ord> IntoIterator for Treapq<K, O> {
    type Item = Entry<K, O>;
    type IntoIter = IntoItems<K, O>;

    fn into_iter(self) -> IntoItems<K, O> {
        IntoItems { treapq: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Treapq<char, u32> {
        let mut treapq = Treapq::with_seed(21);
        for (i, key) in "hello world".chars().filter(|c| *c != ' ').enumerate() {
            treapq.put(key, (i as u32 * 7) % 5);
        }
        return treapq;
    }

    #[test]
    fn ascending_and_descending_mirror() {
        let treapq = sample();
        let up: Vec<_> = treapq.items(false).collect();
        let mut down: Vec<_> = treapq.items(true).collect();
        down.reverse();
        assert_eq!(up, down);
        assert_eq!(up.len(), treapq.len());
    }

    #[test]
    fn rev_matches_descending() {
        let treapq = sample();
        let rev: Vec<_> = treapq.items(false).rev().collect();
        let down: Vec<_> = treapq.items(true).collect();
        assert_eq!(rev, down);
    }

    #[test]
    fn both_ends_meet_without_overlap() {
        let treapq = sample();
        let mut items = treapq.iter();
        let mut seen = Vec::new();
        loop {
            match (items.next(), items.next_back()) {
                (Some(a), Some(b)) => {
                    seen.push(a.key);
                    seen.push(b.key);
                }
                (Some(a), None) => seen.push(a.key),
                (None, _) => break,
            }
        }
        assert_eq!(seen.len(), treapq.len());
        assert_eq!(items.len(), 0);
        assert!(items.next().is_none());
    }

    #[test]
    fn exact_size_counts_down() {
        let treapq = sample();
        let mut items = treapq.items(true);
        let len = treapq.len();
        assert_eq!(items.len(), len);
        items.next();
        assert_eq!(items.len(), len - 1);
    }

    #[test]
    fn restartable_after_partial_walk() {
        let treapq = sample();
        let first: Vec<_> = treapq.iter().take(2).collect();
        let again: Vec<_> = treapq.iter().take(2).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn into_iter_consumes_ascending() {
        let treapq = sample();
        let expected: Vec<_> = treapq.iter().cloned().collect();
        let consumed: Vec<_> = treapq.into_iter().collect();
        assert_eq!(consumed, expected);
    }

    #[test]
    fn into_iter_from_back() {
        let treapq = sample();
        let mut expected: Vec<_> = treapq.iter().cloned().collect();
        expected.reverse();
        let consumed: Vec<_> = treapq.into_iter().rev().collect();
        assert_eq!(consumed, expected);
    }

    #[test]
    fn borrow_for_loop() {
        let treapq = sample();
        let mut count = 0;
        for entry in &treapq {
            assert!(treapq.contains(&entry.key));
            count += 1;
        }
        assert_eq!(count, treapq.len());
    }
}
