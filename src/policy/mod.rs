//! Composite ranking policies.
//!
//! A [`RankingPolicy`] orders items by:
//!
//! 1. **Primary key**: a numeric score from a [`RankKey`], compared in the
//!    policy's [`Direction`] (smallest first or largest first).
//! 2. **Identifier tie-break**: when primary keys are equal, items are
//!    ordered by [`compare_ids`] in the tie-break direction.
//!
//! The two directions are configured independently. A descending policy
//! does NOT flip its tie-break; a rating ranking with an ascending
//! tie-break yields `[9, 10, 5]` for ratings `{9: 4.0, 10: 4.0, 5: 3.5}`.

mod compare;
mod types;

pub use compare::{compare_ids, compare_keys, RankingPolicy};
pub use types::{Direction, RankKey, Rankable};
