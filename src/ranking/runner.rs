//! Ranking passes.

use super::config::RankingConfig;
use super::types::{RankingResult, RankingSet};
use crate::entity::{Candidate, Distance, PriceLevel, Rating};
use crate::error::ConfigError;
use crate::heap::OrderedHeap;
use crate::policy::{RankingPolicy, Rankable};
use crate::pool::CandidatePool;
use tracing::{debug, trace};

/// Returns up to `k` items in policy order.
///
/// Inserts every item into an [`OrderedHeap`] ordered by `policy`, then
/// extracts until `k` items are taken or the heap is empty. `k = 0` yields
/// an empty ranking.
///
/// # Examples
///
/// ```
/// use u_ranking::policy::{RankingPolicy, Rankable};
/// use u_ranking::ranking::rank_top_k;
///
/// struct Job(&'static str, f64);
/// impl Rankable for Job {
///     fn id(&self) -> &str { self.0 }
/// }
///
/// let jobs = [Job("a", 3.0), Job("b", 1.0), Job("c", 2.0)];
/// let shortest = RankingPolicy::by_fn("minutes", |j: &Job| j.1);
///
/// let top: Vec<&str> = rank_top_k(&jobs, &shortest, 2).iter().map(|j| j.0).collect();
/// assert_eq!(top, vec!["b", "c"]);
/// ```
pub fn rank_top_k<'a, T, I>(items: I, policy: &RankingPolicy<T>, k: usize) -> Vec<&'a T>
where
    T: Rankable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if k == 0 {
        return Vec::new();
    }

    let items = items.into_iter();
    let mut heap = OrderedHeap::with_capacity(items.size_hint().0, |a: &&T, b: &&T| {
        policy.compare(a, b)
    });
    heap.extend(items);

    let take = k.min(heap.len());
    let mut ranked = Vec::with_capacity(take);
    while ranked.len() < take {
        match heap.pop() {
            Some(item) => ranked.push(item),
            None => break,
        }
    }
    ranked
}

/// Ranks every item in policy order.
pub fn rank_all<'a, T, I>(items: I, policy: &RankingPolicy<T>) -> Vec<&'a T>
where
    T: Rankable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    rank_top_k(items, policy, usize::MAX)
}

/// Builds the primary, secondary and tertiary rankings of a pool.
///
/// 1. **Primary**: the whole pool under the primary policy, truncated to
///    `k`. This defines the bounded subset.
/// 2. **Secondary**: exactly that subset under the secondary policy.
/// 3. **Tertiary**: exactly that subset under the tertiary policy.
///
/// The default builder for [`Candidate`] ranks by distance ascending,
/// price level ascending and rating descending, all tie-broken by
/// ascending identifier.
///
/// # Examples
///
/// ```
/// use u_ranking::entity::Candidate;
/// use u_ranking::pool::CandidatePool;
/// use u_ranking::ranking::RankingBuilder;
///
/// let pool: CandidatePool = [
///     ("1", 0.1, 5.0, 4),
///     ("2", 1.0, 4.8, 2),
///     ("3", 0.9, 4.5, 4),
/// ]
/// .into_iter()
/// .map(|(id, d, r, p)| Candidate::new(id, "name", "address", "phone", d, r, p).unwrap())
/// .collect();
///
/// let set = RankingBuilder::default().build(&pool, 2);
/// assert_eq!(set.primary.as_slice(), ["1", "3"]);
/// assert_eq!(set.secondary.as_slice(), ["1", "3"]);
/// assert_eq!(set.tertiary.as_slice(), ["1", "3"]);
/// ```
#[derive(Debug)]
pub struct RankingBuilder<T = Candidate> {
    primary: RankingPolicy<T>,
    secondary: RankingPolicy<T>,
    tertiary: RankingPolicy<T>,
    config: RankingConfig,
}

impl<T> RankingBuilder<T> {
    /// Creates a builder from three policies.
    pub fn new(
        primary: RankingPolicy<T>,
        secondary: RankingPolicy<T>,
        tertiary: RankingPolicy<T>,
    ) -> Self {
        Self {
            primary,
            secondary,
            tertiary,
            config: RankingConfig::default(),
        }
    }

    /// Applies a validated configuration.
    ///
    /// The config's epsilon replaces the epsilon of all three policies.
    pub fn with_config(mut self, config: RankingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.primary = self.primary.with_epsilon(config.epsilon);
        self.secondary = self.secondary.with_epsilon(config.epsilon);
        self.tertiary = self.tertiary.with_epsilon(config.epsilon);
        self.config = config;
        Ok(self)
    }

    /// Active configuration.
    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Policy that selects the bounded subset.
    pub fn primary_policy(&self) -> &RankingPolicy<T> {
        &self.primary
    }

    /// Policy for the first re-ranking of the subset.
    pub fn secondary_policy(&self) -> &RankingPolicy<T> {
        &self.secondary
    }

    /// Policy for the second re-ranking of the subset.
    pub fn tertiary_policy(&self) -> &RankingPolicy<T> {
        &self.tertiary
    }
}

impl RankingBuilder<Candidate> {
    /// Default candidate policies with `config` applied.
    pub fn from_config(config: RankingConfig) -> Result<Self, ConfigError> {
        Self::default().with_config(config)
    }
}

impl Default for RankingBuilder<Candidate> {
    fn default() -> Self {
        Self::new(
            RankingPolicy::ascending(Distance),
            RankingPolicy::ascending(PriceLevel),
            RankingPolicy::descending(Rating),
        )
    }
}

impl<T: Rankable + Sync> RankingBuilder<T> {
    /// Builds all three rankings.
    ///
    /// `k` is clamped by [`RankingConfig::max_results`]. A `k` larger than
    /// the pool ranks the whole pool; `k = 0` or an empty pool gives three
    /// empty rankings.
    pub fn build(&self, pool: &CandidatePool<T>, k: usize) -> RankingSet {
        let k = self.config.clamp(k);
        debug!(pool_size = pool.len(), k, "building rankings");

        let subset = rank_top_k(pool.iter(), &self.primary, k);
        trace!(
            key = self.primary.key_name(),
            selected = subset.len(),
            "primary ranking done"
        );

        let (secondary, tertiary) = self.rank_subset(&subset);

        debug!(subset_size = subset.len(), "rankings built");
        RankingSet {
            primary: RankingResult::from_ranked(&subset),
            secondary: RankingResult::from_ranked(&secondary),
            tertiary: RankingResult::from_ranked(&tertiary),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn rank_subset<'a>(&self, subset: &[&'a T]) -> (Vec<&'a T>, Vec<&'a T>) {
        let secondary = rank_all(subset.iter().copied(), &self.secondary);
        trace!(key = self.secondary.key_name(), "secondary ranking done");
        let tertiary = rank_all(subset.iter().copied(), &self.tertiary);
        trace!(key = self.tertiary.key_name(), "tertiary ranking done");
        (secondary, tertiary)
    }

    #[cfg(feature = "parallel")]
    fn rank_subset<'a>(&self, subset: &[&'a T]) -> (Vec<&'a T>, Vec<&'a T>) {
        let (secondary, tertiary) = rayon::join(
            || rank_all(subset.iter().copied(), &self.secondary),
            || rank_all(subset.iter().copied(), &self.tertiary),
        );
        trace!(
            secondary = self.secondary.key_name(),
            tertiary = self.tertiary.key_name(),
            "subset rankings done"
        );
        (secondary, tertiary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Direction;

    fn candidate(id: &str, distance: f64, rating: f64, price_level: i64) -> Candidate {
        Candidate::new(id, "name", "address", "phone", distance, rating, price_level).unwrap()
    }

    // Same values as the demo data set of ten Logan Square restaurants.
    fn logan_square() -> CandidatePool {
        vec![
            candidate("1", 0.1, 5.0, 4),
            candidate("2", 1.0, 4.8, 2),
            candidate("3", 0.9, 4.5, 4),
            candidate("4", 0.8, 3.9, 1),
            candidate("5", 0.7, 3.5, 3),
            candidate("6", 0.6, 4.9, 3),
            candidate("7", 0.5, 1.9, 1),
            candidate("8", 0.4, 2.0, 1),
            candidate("9", 0.3, 2.9, 2),
            candidate("10", 0.2, 4.0, 3),
        ]
        .into_iter()
        .collect()
    }

    fn ids(items: &[&Candidate]) -> Vec<String> {
        items.iter().map(|c| c.id().to_string()).collect()
    }

    #[test]
    fn test_distance_tie_break() {
        let items = [
            candidate("3", 0.6, 3.0, 1),
            candidate("2", 0.1, 3.0, 1),
            candidate("1", 0.1, 3.0, 1),
        ];
        let ranked = rank_all(&items, &RankingPolicy::ascending(Distance));
        assert_eq!(ids(&ranked), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_price_level_tie_break() {
        let items = [
            candidate("10", 0.2, 4.0, 4),
            candidate("6", 0.6, 4.9, 3),
            candidate("5", 0.7, 3.5, 3),
        ];
        let ranked = rank_all(&items, &RankingPolicy::ascending(PriceLevel));
        assert_eq!(ids(&ranked), vec!["5", "6", "10"]);
    }

    #[test]
    fn test_rating_descending_ascending_tie_break() {
        let items = [
            candidate("9", 0.3, 4.0, 2),
            candidate("10", 0.2, 4.0, 4),
            candidate("5", 0.7, 3.5, 3),
        ];
        let ranked = rank_all(&items, &RankingPolicy::descending(Rating));
        assert_eq!(ids(&ranked), vec!["9", "10", "5"]);
    }

    #[test]
    fn test_rank_top_k_zero() {
        let items = [candidate("1", 0.1, 3.0, 1)];
        assert!(rank_top_k(&items, &RankingPolicy::ascending(Distance), 0).is_empty());
    }

    #[test]
    fn test_build_k_smaller_than_pool() {
        let set = RankingBuilder::default().build(&logan_square(), 3);

        assert_eq!(set.primary.as_slice(), ["1", "10", "9"]);
        // price: 9 -> 2, 10 -> 3, 1 -> 4
        assert_eq!(set.secondary.as_slice(), ["9", "10", "1"]);
        // rating: 1 -> 5.0, 10 -> 4.0, 9 -> 2.9
        assert_eq!(set.tertiary.as_slice(), ["1", "10", "9"]);
    }

    #[test]
    fn test_build_whole_pool() {
        let pool = logan_square();
        let set = RankingBuilder::default().build(&pool, 100);

        assert_eq!(
            set.primary.as_slice(),
            ["1", "10", "9", "8", "7", "6", "5", "4", "3", "2"]
        );
        assert_eq!(
            set.secondary.as_slice(),
            ["4", "7", "8", "2", "9", "5", "6", "10", "1", "3"]
        );
        assert_eq!(
            set.tertiary.as_slice(),
            ["1", "6", "2", "3", "10", "4", "5", "9", "8", "7"]
        );
    }

    #[test]
    fn test_build_empty_pool() {
        let set = RankingBuilder::default().build(&CandidatePool::new(), 5);
        assert!(set.primary.is_empty());
        assert!(set.secondary.is_empty());
        assert!(set.tertiary.is_empty());
    }

    #[test]
    fn test_build_zero_k() {
        let set = RankingBuilder::default().build(&logan_square(), 0);
        assert!(set.is_empty());
        assert!(set.secondary.is_empty());
        assert!(set.tertiary.is_empty());
    }

    #[test]
    fn test_build_single_candidate() {
        let pool: CandidatePool = vec![candidate("42", 1.5, 2.5, 0)].into_iter().collect();
        let set = RankingBuilder::default().build(&pool, 3);
        assert_eq!(set.primary.as_slice(), ["42"]);
        assert_eq!(set.secondary.as_slice(), ["42"]);
        assert_eq!(set.tertiary.as_slice(), ["42"]);
    }

    #[test]
    fn test_build_respects_max_results() {
        let builder =
            RankingBuilder::from_config(RankingConfig::default().with_max_results(2)).unwrap();
        let set = builder.build(&logan_square(), 5);
        assert_eq!(set.primary.as_slice(), ["1", "10"]);
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let err = RankingBuilder::from_config(RankingConfig::default().with_epsilon(-0.1))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidEpsilon(-0.1));
    }

    #[test]
    fn test_config_epsilon_reaches_policies() {
        let builder =
            RankingBuilder::from_config(RankingConfig::default().with_epsilon(0.05)).unwrap();
        assert!((builder.primary_policy().epsilon() - 0.05).abs() < 1e-12);
        assert!((builder.tertiary_policy().epsilon() - 0.05).abs() < 1e-12);

        // 0.11 and 0.13 share a bucket, so the identifier decides
        let pool: CandidatePool = vec![
            candidate("12", 0.11, 3.0, 1),
            candidate("11", 0.13, 3.0, 1),
        ]
        .into_iter()
        .collect();
        let set = builder.build(&pool, 2);
        assert_eq!(set.primary.as_slice(), ["11", "12"]);
    }

    #[test]
    fn test_epsilon_chain_is_stable_across_pools() {
        let builder =
            RankingBuilder::from_config(RankingConfig::default().with_epsilon(0.05)).unwrap();
        let policy = builder.primary_policy();

        // 0.00 ~ 0.04 ~ 0.08 pairwise within epsilon, but not end to end
        for _ in 0..50 {
            let pool: CandidatePool = vec![
                candidate("3", 0.00, 3.0, 1),
                candidate("1", 0.08, 3.0, 1),
                candidate("2", 0.04, 3.0, 1),
            ]
            .into_iter()
            .collect();
            let set = builder.build(&pool, 3);
            assert_eq!(set.primary.as_slice(), ["2", "3", "1"]);

            let ranked: Vec<&Candidate> = pool.resolve(set.primary.as_slice()).collect();
            for (i, a) in ranked.iter().enumerate() {
                for b in &ranked[i + 1..] {
                    assert_eq!(policy.compare(a, b), std::cmp::Ordering::Less);
                }
            }
        }
    }

    #[test]
    fn test_rank_subset_matches_sequential_passes() {
        let builder = RankingBuilder::default();
        let pool = logan_square();
        let subset = rank_top_k(pool.iter(), builder.primary_policy(), 6);

        let (secondary, tertiary) = builder.rank_subset(&subset);
        let expected_secondary = rank_all(subset.iter().copied(), builder.secondary_policy());
        let expected_tertiary = rank_all(subset.iter().copied(), builder.tertiary_policy());
        assert_eq!(ids(&secondary), ids(&expected_secondary));
        assert_eq!(ids(&tertiary), ids(&expected_tertiary));
    }

    #[test]
    fn test_default_policies() {
        let builder = RankingBuilder::default();
        assert_eq!(builder.primary_policy().key_name(), "distance");
        assert_eq!(builder.secondary_policy().key_name(), "price_level");
        assert_eq!(builder.tertiary_policy().key_name(), "rating");
        assert_eq!(builder.tertiary_policy().direction(), Direction::Descending);
        assert_eq!(builder.tertiary_policy().tie_break(), Direction::Ascending);
    }

    #[test]
    fn test_custom_policies() {
        let builder = RankingBuilder::new(
            RankingPolicy::descending(Rating),
            RankingPolicy::ascending(Distance),
            RankingPolicy::descending(PriceLevel),
        );
        let set = builder.build(&logan_square(), 2);
        assert_eq!(set.primary.as_slice(), ["1", "6"]);
        assert_eq!(set.secondary.as_slice(), ["1", "6"]);
        assert_eq!(set.tertiary.as_slice(), ["1", "6"]);
    }
}
