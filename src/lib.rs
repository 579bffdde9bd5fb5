//! Fixed-capacity, allocation-free collections.
//!
//! This crate provides containers for code that must not allocate after
//! startup: embedded targets, latency-critical services, anything
//! sized to a known worst case. Every container makes exactly one
//! allocation, at construction, and never grows.
//!
//! # Design
//!
//! The linked structures separate storage from structure:
//!
//! ```text
//! Pool        - owns the slots, hands them out through a free chain
//! List        - threads head/tail/links through pool slots, owns no storage
//! OwnedList   - the two bundled into one value
//! BoundedVec  - contiguous storage, fixed capacity, in-place shifting
//! ```
//!
//! Links are 16-bit slot indices by default (`u16`, sentinel `MAX` for
//! "no link"), not pointers: four bytes of linkage per node, and the
//! whole pool can be moved or sent without fixing anything up.
//!
//! # Choosing a container
//!
//! | Container | Layout | Strengths |
//! |-----------|--------|-----------|
//! | [`BoundedVec`] | contiguous | slice access, cache-friendly scans |
//! | [`OwnedList`] | pooled nodes | O(1) push/pop/remove at stable indices |
//! | [`Pool`] + [`List`] | shared pooled nodes | several queues over one slot arena, O(1) splice between them |
//!
//! # Failure policy
//!
//! Capacity is a hard edge, never a reallocation. Every fallible
//! operation has a `try_*` form: insertion returns
//! [`Full`] (which hands the rejected value back), count-based
//! operations return [`CapacityError`], and removal from an empty
//! container returns `None`. The panicking forms (`push`, `insert`,
//! slice indexing) are thin wrappers for callers that size their
//! containers to the workload; each documents its panic. No operation
//! partially applies: anything that would overflow fails before it
//! mutates.
//!
//! # Sharing one pool
//!
//! A pool does not care how many lists thread through it. Moving an
//! element between two lists that share a pool rewrites index links and
//! never touches the element:
//!
//! ```
//! use ballast::{List, Pool};
//!
//! let mut pool: Pool<&str> = Pool::with_capacity(16);
//! let mut pending: List<&str> = List::new();
//! let mut active: List<&str> = List::new();
//!
//! let job = pending.try_push_back(&mut pool, "reindex").unwrap();
//! pending.try_push_back(&mut pool, "compact").unwrap();
//!
//! // Promote one job: O(1), no copy, index stays valid.
//! pending.unlink(&mut pool, job);
//! active.link_back(&mut pool, job);
//!
//! assert_eq!(active.get(&pool, job), Some(&"reindex"));
//! assert_eq!(pending.len(), 1);
//! ```
//!
//! The pairing discipline is the caller's: a list must always be used
//! with the pool it was fed from, and positional indices must come from
//! that list. Mixing them up is structure corruption, not memory
//! unsafety; every access is occupancy-checked.

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod index;
pub mod list;
pub mod owned;
pub mod pool;
pub mod vec;

pub use index::SlotIndex;
pub use list::{Cursor, Drain, Indices, Iter, IterMut, List};
pub use owned::OwnedList;
pub use pool::{CapacityError, Full, Pool};
pub use vec::BoundedVec;
