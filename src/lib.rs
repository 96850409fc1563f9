//! An unbalanced binary search tree for Rust.
//!
//! This crate provides [`BstSet`], an ordered set of unique keys backed by a
//! plain (unbalanced) binary search tree. Alongside the usual set operations
//! it exposes:
//!
//! - [`find`](BstSet::find) - Successor-or-exact lookup: the smallest stored
//!   key that is greater than or equal to a query key
//! - [`preorder`](BstSet::preorder) / [`postorder`](BstSet::postorder) -
//!   Non-sorted tree traversals, in addition to the ascending
//!   [`iter`](BstSet::iter)
//!
//! # Example
//!
//! ```
//! use plain_bst::BstSet;
//!
//! let mut primes = BstSet::from([5, 2, 7, 3]);
//!
//! // Standard set operations work as expected
//! assert!(primes.insert(11));
//! assert!(!primes.insert(7)); // duplicates are rejected
//! assert_eq!(primes.len(), 5);
//!
//! // Successor-or-exact lookup
//! assert_eq!(primes.find(&4), Some(&5));
//! assert_eq!(primes.find(&7), Some(&7));
//! assert_eq!(primes.find(&12), None);
//!
//! // Ascending iteration
//! let sorted: Vec<_> = primes.iter().copied().collect();
//! assert_eq!(sorted, [2, 3, 5, 7, 11]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Familiar API** - Mirrors the relevant parts of `std::collections::BTreeSet`
//! - **Arena storage** - Nodes live in a contiguous slot pool addressed by
//!   compact handles; parent links are plain indices, never ownership edges
//! - **Iterative traversal** - Iterators carry an explicit stack, so even a
//!   chain-shaped tree cannot overflow the call stack
//!
//! # Limitations
//!
//! The tree performs no rebalancing. Operations are O(height), and the height
//! is only bounded by the element count: inserting keys in sorted order
//! produces a chain and degrades every operation to O(n). Use a balanced
//! structure if your insertion order is adversarial.
//!
//! The set is single-threaded by design. Wrap it in a lock if it must be
//! shared across threads.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod bst_set;

pub use bst_set::BstSet;
