//! Multi-pass ranking of a candidate pool.
//!
//! [`RankingBuilder::build`] produces three views of one pool:
//!
//! - **Primary**: the `k` best items of the whole pool (nearest first by
//!   default). These `k` items form the *bounded subset*.
//! - **Secondary** and **Tertiary**: the bounded subset re-ranked by two
//!   further policies (cheapest first, best rated first). Both are exact
//!   permutations of the primary ranking; nothing is added or dropped.
//!
//! Every pass builds an [`OrderedHeap`](crate::heap::OrderedHeap), drains
//! it and discards it. The pool is only read.
//!
//! # Key Types
//!
//! - [`RankingBuilder`]: the three policies plus [`RankingConfig`]
//! - [`RankingSet`]: the three [`RankingResult`]s of one request
//! - [`Criterion`]: selects a ranking from a set for display
//!
//! With the `parallel` feature the secondary and tertiary passes run on
//! the rayon pool; results are identical.

mod config;
mod runner;
mod types;

pub use config::{RankingConfig, INTERACTIVE_MAX_RESULTS};
pub use runner::{rank_all, rank_top_k, RankingBuilder};
pub use types::{Criterion, RankingResult, RankingSet};
