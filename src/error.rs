//! Errors surfaced by [`Treapq`](crate::Treapq).

use thiserror::Error;

/// Error returned by key-addressed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreapqError {
    /// `get` or `remove` named a key that is not present.
    #[error("key not found")]
    KeyNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_reason() {
        assert_eq!(TreapqError::KeyNotFound.to_string(), "key not found");
    }
}
