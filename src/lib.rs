//! Pluggable map and set containers behind one capability contract.
//!
//! Three maps implement the [`Map`] trait, each with a different cost profile:
//!
//! - [`BinaryTreeMap`] - an unbalanced binary search tree with root rotation primitives.
//! - [`HashMap`] - separate chaining over a fixed table of [`DEFAULT_TABLE_SIZE`] buckets.
//! - [`FlatMap`] - one sorted vector, binary-searched on lookup.
//!
//! The two sorted maps also implement [`OrderedMap`]. Ordering comes from an injected
//! [`Comparator`] and hashing from an injected [`KeyHasher`]; [`Natural`] is the default for both.
//!
//! Sets are [`MapSet`]s: key-only views over any of the maps, implementing [`Set`] and, over a
//! sorted map, [`OrderedSet`].
//!
//! # Example
//!
//! ```
//! use mapkit::{BinaryTreeSet, HashSet, OrderedSet, Set};
//!
//! let mut ordered = BinaryTreeSet::new();
//! for item in [1, 2, 3, 2, 4] {
//!     ordered.add(item);
//! }
//! assert_eq!(ordered.to_string(), "{1, 2, 3, 4}");
//! assert!(ordered.contains(&2));
//! assert!(!ordered.contains(&5));
//! assert!(!ordered.remove(&5));
//! assert_eq!(ordered.size(), 4);
//! assert_eq!((ordered.first(), ordered.last()), (Some(&1), Some(&4)));
//!
//! let mut hashed = HashSet::new();
//! hashed.extend([1, 2, 3, 2]);
//! assert_eq!(hashed.size(), 3);
//! assert!(hashed.remove(&2));
//! assert_eq!(hashed.to_string(), "{1, 3}");
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - only `alloc` is required.
//! - **`complex`** (default) - default comparators and hashes for `num_complex::Complex` keys.

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

mod collection;
mod raw;

pub mod binary_tree_map;
pub mod comparator;
pub mod flat_map;
pub mod hash_map;
pub mod hasher;
pub mod set;

pub use binary_tree_map::BinaryTreeMap;
pub use collection::{Collection, Entry, Map, OrderedMap, OrderedSet, Set};
pub use comparator::{Comparator, Natural};
pub use flat_map::FlatMap;
pub use hash_map::{DEFAULT_TABLE_SIZE, HashMap};
pub use hasher::KeyHasher;
pub use set::{BinaryTreeSet, FlatSet, HashSet, MapSet};
