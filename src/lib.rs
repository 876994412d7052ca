//! Two in-memory building blocks for graph and scheduling algorithms: an
//! indexed priority queue and a disjoint-set/union-find forest, both
//! addressed by dense unsigned integer identifiers.
//!
//! [`IndexedPriorityQueue<E, P>`] is a binary min-heap over `(priority,
//! element)` pairs that additionally records the heap slot of every
//! element. The side index makes membership and priority lookups `O(1)`
//! and lets an arbitrary element be re-prioritized in `O(log n)`, the
//! decrease-key operation that algorithms like Dijkstra's need.
//!
//! [`DisjointSetForest<E>`] partitions its identifiers into disjoint sets
//! that can be merged with `join` and queried with `find`, with an
//! amortized complexity of `O(α(n))` through union-by-size and path
//! compression where `α` is the inverse Ackermann function. The `α(n)` has
//! value below 5 for any `n` that can be written in the observable
//! universe. The forest keeps exact subtree sizes, so set sizes and the
//! partition-wide set and singleton counts never drift.
//!
//! The structures are independent of each other and share only two
//! conventions. Identifiers are dense, so every internal lookup is a
//! direct array index instead of a hash; any unsigned integer type
//! implementing [`DenseId`] can name elements. Identifiers outside the
//! bounds fixed at construction produce an [`Error::OutOfRange`], while
//! semantically valid "nothing to do" cases such as a duplicate push or a
//! redundant join are ordinary `bool` results.
//!
//! Both structures implement `proptest::arbitrary::Arbitrary` for use in
//! property based testing. This is a feature enabled by default; opt out
//! with:
//!
//! ```toml
//! [dependencies.densekit]
//! version = "0.1"
//! default-features = false
//! ```
//!
//! [`IndexedPriorityQueue<E, P>`]: struct.IndexedPriorityQueue.html
//! [`DisjointSetForest<E>`]: struct.DisjointSetForest.html
//! [`DenseId`]: trait.DenseId.html
//! [`Error::OutOfRange`]: enum.Error.html#variant.OutOfRange

pub mod disjoint_set;
mod error;
mod id;
pub mod indexed_heap;

pub use crate::disjoint_set::DisjointSetForest;
pub use crate::error::{Error, Result};
pub use crate::id::DenseId;
pub use crate::indexed_heap::IndexedPriorityQueue;
