//! A size-augmented binary search tree with two balancing disciplines.
//!
//! This crate provides [`Bst`] and [`BstSet`], ordered collections backed by a
//! binary search tree whose nodes cache their subtree sizes. The same tree
//! supports:
//!
//! - an **unbalanced** path - [`insert`](Bst::insert) and
//!   [`delete`](Bst::delete) never restructure, so the shape follows the
//!   insertion order and can degrade to a list;
//! - a **randomized balanced** path - [`balanced_insert`](Bst::balanced_insert)
//!   makes the new key the root of a subtree of size `s` with probability
//!   `1 / (s + 1)`, and [`balanced_delete`](Bst::balanced_delete) replaces the
//!   removed node with the join of its children. Every key is equally likely to
//!   be the root, giving expected O(log n) height.
//!
//! Cached sizes make order statistics cheap: [`select`](Bst::select) and
//! [`rank_of`](Bst::rank_of) run in O(height), as do [`pred`](Bst::pred) and
//! [`succ`](Bst::succ). Whole trees can be [`split`](Bst::split) at a key and
//! [`join`](Bst::join)ed back together.
//!
//! # Example
//!
//! ```
//! use randbst::{Bst, Rank};
//!
//! let mut scores = Bst::new();
//! scores.balanced_insert("Carol", 92);
//! scores.balanced_insert("Alice", 100);
//! scores.balanced_insert("Bob", 85);
//!
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Ranks are one-based.
//! assert_eq!(scores.select(2), (&"Bob", &85));
//! assert_eq!(scores.rank_of(&"Carol"), Some(3));
//! assert_eq!(scores[Rank(1)], 100);
//!
//! // Nearest keys at or around a missing key.
//! assert_eq!(scores.pred(&"Bz"), Some((&"Bob", &85)));
//! assert_eq!(scores.succ(&"Bz"), Some((&"Carol", &92)));
//!
//! let (low, high) = scores.split(&"Bob");
//! assert_eq!(low.len(), 2);
//! assert_eq!(high.len(), 1);
//! ```
//!
//! # Implementation
//!
//! Each node owns its children, so [`split`](Bst::split) and
//! [`join`](Bst::join) relink subtrees along a root-to-leaf path instead of
//! moving entries between trees. All algorithms are iterative, dropping
//! included; no operation recurses on the tree's height.

#![no_std]
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
#[cfg(test)]
extern crate std;

mod order_statistic;
mod random;
mod raw;

pub mod bst;
pub mod bst_set;

pub use bst::Bst;
pub use bst_set::BstSet;
pub use order_statistic::Rank;
pub use random::{DEFAULT_SEED, DefaultRng, RandomSource};
