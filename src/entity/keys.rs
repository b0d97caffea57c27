//! Rank keys over [`Candidate`] attributes.

use super::candidate::Candidate;
use crate::policy::RankKey;

/// Distance from the searcher in miles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Distance;

impl RankKey<Candidate> for Distance {
    fn name(&self) -> &str {
        "distance"
    }

    fn key(&self, c: &Candidate) -> f64 {
        c.distance()
    }
}

/// Price level, 0 (free) to 4 (very expensive).
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceLevel;

impl RankKey<Candidate> for PriceLevel {
    fn name(&self) -> &str {
        "price_level"
    }

    fn key(&self, c: &Candidate) -> f64 {
        f64::from(c.price_level())
    }
}

/// Average rating, 1.0 to 5.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rating;

impl RankKey<Candidate> for Rating {
    fn name(&self) -> &str {
        "rating"
    }

    fn key(&self, c: &Candidate) -> f64 {
        c.rating()
    }
}
