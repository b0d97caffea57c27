//! Core traits for ranked items and their keys.

use std::cmp::Ordering;

/// An item with a stable, unique identifier.
///
/// The identifier is the tie-break key of every [`RankingPolicy`](super::RankingPolicy)
/// and the value stored in ranking results.
pub trait Rankable {
    /// Returns the item's identifier.
    fn id(&self) -> &str;
}

impl<T: Rankable + ?Sized> Rankable for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// A numeric attribute used as the primary key of a ranking.
///
/// # Examples
///
/// ```
/// use u_ranking::policy::{RankKey, Rankable};
///
/// struct Job { id: String, minutes: u32 }
///
/// impl Rankable for Job {
///     fn id(&self) -> &str { &self.id }
/// }
///
/// struct Duration;
///
/// impl RankKey<Job> for Duration {
///     fn name(&self) -> &str { "duration" }
///     fn key(&self, job: &Job) -> f64 { job.minutes as f64 }
/// }
/// ```
pub trait RankKey<T>: Send + Sync {
    /// Returns the name of this key.
    fn name(&self) -> &str;

    /// Computes the key for the given item.
    fn key(&self, item: &T) -> f64;
}

/// Which end of the key range is extracted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Smallest value first.
    #[default]
    Ascending,

    /// Largest value first.
    Descending,
}

impl Direction {
    /// Orients an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}
