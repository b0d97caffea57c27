//! Ranked entities: validated candidate records and their keys.
//!
//! - [`Candidate`]: an immutable place record, validated at construction
//! - [`Distance`], [`PriceLevel`], [`Rating`]: [`RankKey`](crate::policy::RankKey)
//!   implementations over candidate attributes
//! - [`haversine_miles`]: great-circle distance for precomputing
//!   [`Candidate::distance`]

mod candidate;
mod geo;
mod keys;

pub use candidate::{Candidate, MAX_PRICE_LEVEL, MAX_RATING, MIN_RATING};
pub use geo::{haversine_miles, EARTH_RADIUS_MILES};
pub use keys::{Distance, PriceLevel, Rating};
