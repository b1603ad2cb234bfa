//! Treapq - an indexable priority structure.
//!
//! Entries are `(key, order)` pairs with unique keys. The structure answers
//! key lookups in O(1) expected, reads the smallest and largest order in O(1),
//! inserts and removes in O(log n) expected, and iterates in order either way.
//!
//! # Quick Start
//!
//! ```
//! use treapq::Treapq;
//!
//! let mut queue = Treapq::new();
//! queue.put("write docs", 3);
//! queue.put("fix bug", 1);
//! queue.put("review", 2);
//!
//! assert_eq!(queue.min().map(|e| *e.key()), Some("fix bug"));
//! assert_eq!(queue.get("review").map(|e| *e.order()), Ok(2));
//!
//! // Reprioritise by putting the key again.
//! queue.put("write docs", 0);
//! let order: Vec<_> = queue.items(false).map(|e| *e.key()).collect();
//! assert_eq!(order, ["write docs", "fix bug", "review"]);
//!
//! assert_eq!(queue.extract_max().map(|e| e.into_parts()), Some(("review", 2)));
//! ```

pub mod entry;
pub mod error;
pub mod profiling;
pub mod rng;
pub mod treapq;

pub use entry::Entry;
pub use error::TreapqError;
pub use treapq::IntoItems;
pub use treapq::Items;
pub use treapq::Put;
pub use treapq::Treapq;
