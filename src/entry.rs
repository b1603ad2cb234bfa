use std::fmt;

/// A key together with the order value it is sorted by.
///
/// Entries are read-only once inserted; changing the order of a key means
/// putting it again.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry<K, O> {
    pub(crate) key: K,
    pub(crate) order: O,
}

impl<K, O> Entry<K, O> {
    pub fn key(&self) -> &K {
        return &self.key;
    }

    pub fn order(&self) -> &O {
        return &self.order;
    }

    /// Split into `(key, order)`.
    pub fn into_parts(self) -> (K, O) {
        return (self.key, self.order);
    }
}

impl<K: fmt::Display, O: fmt::Display> fmt::Display for Entry<K, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.order)
    }
}
