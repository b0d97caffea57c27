//! Deterministic multi-criteria ranking over a bounded candidate pool.
//!
//! Given a pool of entities with several numeric attributes, produces
//! independent orderings of a subset of that pool, each by a different
//! attribute and all sharing one identifier tie-break rule.
//!
//! - **Heap**: [`heap::OrderedHeap`], one binary heap for both min-first
//!   and max-first extraction; the comparison function sets the direction.
//! - **Policy**: [`policy::RankingPolicy`], a primary key with direction
//!   plus an independently directed identifier tie-break.
//! - **Entity**: [`entity::Candidate`], a validated place record with
//!   distance, rating and price level.
//! - **Pool**: [`pool::CandidatePool`], identifier-keyed input snapshot.
//! - **Ranking**: [`ranking::RankingBuilder`], nearest-`k` selection and
//!   two re-rankings of exactly that selection.
//!
//! # Example
//!
//! ```
//! use u_ranking::entity::Candidate;
//! use u_ranking::pool::CandidatePool;
//! use u_ranking::ranking::{Criterion, RankingBuilder};
//!
//! let pool = CandidatePool::try_from_candidates([
//!     Candidate::new("9", "Same Day Cafe", "2651 N Kedzie Blvd", "(773)342-7040", 0.3, 4.0, 2)?,
//!     Candidate::new("10", "Chiqueolatte", "2643 N Milwaukee Ave", "(312)846-6839", 0.2, 4.0, 4)?,
//!     Candidate::new("5", "La Boulangerie", "3129 W Logan Blvd", "(773)666-5880", 0.7, 3.5, 3)?,
//! ])?;
//!
//! let set = RankingBuilder::default().build(&pool, 3);
//! assert_eq!(set.ordered_by(Criterion::Distance).as_slice(), ["10", "9", "5"]);
//! assert_eq!(set.ordered_by(Criterion::Rating).as_slice(), ["9", "10", "5"]);
//! assert_eq!(set.ordered_by(Criterion::PriceLevel).as_slice(), ["9", "5", "10"]);
//! # Ok::<(), u_ranking::RankingError>(())
//! ```
//!
//! # Architecture
//!
//! The crate performs no I/O. Geocoding, place lookup, prompting and
//! display belong to callers, which hand in a finished pool and read back
//! identifier sequences.

pub mod entity;
pub mod error;
pub mod heap;
pub mod policy;
pub mod pool;
pub mod ranking;

pub use error::{RankingError, Result};
