//! Error types.
//!
//! Each concern has its own enum; [`RankingError`] wraps them for callers
//! that want a single error type.

use thiserror::Error;

/// A candidate attribute failed its domain check during construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("distance must be a non-negative number, got {0}")]
    InvalidDistance(f64),

    #[error("rating must be within 1.0 - 5.0, got {0}")]
    RatingOutOfRange(f64),

    #[error("price level must be within 0 - 4, got {0}")]
    PriceLevelOutOfRange(i64),
}

/// Misuse of an [`OrderedHeap`](crate::heap::OrderedHeap).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    #[error("priority queue underflow")]
    Underflow,
}

/// A candidate pool could not be assembled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("duplicate candidate id: {0}")]
    DuplicateId(String),
}

/// Invalid [`RankingConfig`](crate::ranking::RankingConfig).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),

    #[error("max_results must be positive when set")]
    ZeroMaxResults,
}

/// Umbrella error for the crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Heap(#[from] HeapError),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, RankingError>;
