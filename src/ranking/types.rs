//! Ranking outputs.

use crate::policy::Rankable;
use crate::pool::CandidatePool;
use std::fmt;

/// Ordered identifiers produced by one ranking pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RankingResult {
    ids: Vec<String>,
}

impl RankingResult {
    /// Collects the identifiers of already ranked items.
    pub fn from_ranked<T: Rankable>(items: &[&T]) -> Self {
        Self {
            ids: items.iter().map(|item| item.id().to_owned()).collect(),
        }
    }

    /// Identifiers in rank order.
    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    /// Iterates identifiers in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Number of ranked identifiers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifier at 0-based `rank`.
    pub fn get(&self, rank: usize) -> Option<&str> {
        self.ids.get(rank).map(String::as_str)
    }

    /// Returns true if `id` is in this ranking.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    /// Consumes the result, returning the identifiers.
    pub fn into_vec(self) -> Vec<String> {
        self.ids
    }
}

impl From<Vec<String>> for RankingResult {
    fn from(ids: Vec<String>) -> Self {
        Self { ids }
    }
}

impl IntoIterator for RankingResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.into_iter()
    }
}

/// Attribute a presentation layer can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Criterion {
    /// Nearest first.
    Distance,
    /// Best rated first.
    Rating,
    /// Cheapest first.
    PriceLevel,
}

impl Criterion {
    pub const ALL: [Criterion; 3] = [Criterion::Distance, Criterion::Rating, Criterion::PriceLevel];

    /// Human-readable description of the ordering.
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Distance => "distance in miles (low to high)",
            Criterion::Rating => "rating (high to low)",
            Criterion::PriceLevel => "price level (low to high)",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three rankings of one request.
///
/// `secondary` and `tertiary` are permutations of `primary`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingSet {
    /// Bounded full-pool ranking (nearest first by default).
    pub primary: RankingResult,
    /// Re-ranking of `primary` (cheapest first by default).
    pub secondary: RankingResult,
    /// Re-ranking of `primary` (best rated first by default).
    pub tertiary: RankingResult,
}

impl RankingSet {
    /// The primary ranking.
    pub fn by_distance(&self) -> &RankingResult {
        &self.primary
    }

    /// The secondary ranking.
    pub fn by_price(&self) -> &RankingResult {
        &self.secondary
    }

    /// The tertiary ranking.
    pub fn by_rating(&self) -> &RankingResult {
        &self.tertiary
    }

    /// The ranking matching `criterion` under the default policies.
    pub fn ordered_by(&self, criterion: Criterion) -> &RankingResult {
        match criterion {
            Criterion::Distance => self.by_distance(),
            Criterion::Rating => self.by_rating(),
            Criterion::PriceLevel => self.by_price(),
        }
    }

    /// Resolves the `criterion` ranking to items from `pool`.
    pub fn resolve<'a, T: Rankable>(
        &'a self,
        criterion: Criterion,
        pool: &'a CandidatePool<T>,
    ) -> impl Iterator<Item = &'a T> + 'a {
        pool.resolve(self.ordered_by(criterion).as_slice())
    }

    /// Number of entries in each ranking.
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    /// Returns true if no candidate was selected.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }
}
