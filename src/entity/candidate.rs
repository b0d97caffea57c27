//! Candidate record.

use crate::error::ValidationError;
use crate::policy::Rankable;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Lowest accepted rating.
pub const MIN_RATING: f64 = 1.0;

/// Highest accepted rating.
pub const MAX_RATING: f64 = 5.0;

/// Highest accepted price level (0 = free ... 4 = very expensive).
pub const MAX_PRICE_LEVEL: u8 = 4;

/// A place that can be ranked.
///
/// Fields are private and checked once in [`Candidate::new`]; a value of
/// this type always satisfies:
///
/// - `id`, `name`, `address`, `phone` are non-empty
/// - `distance >= 0` (miles from the searcher)
/// - `rating` in `[1.0, 5.0]`
/// - `price_level` in `[0, 4]`
///
/// Equality and hashing cover every field. Pools treat the `id` alone as
/// the uniqueness key.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CandidateRecord"))]
pub struct Candidate {
    id: String,
    name: String,
    address: String,
    phone: String,
    distance: f64,
    rating: f64,
    price_level: u8,
}

impl Candidate {
    /// Creates a validated candidate.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking string fields
    /// first, then distance, rating and price level.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_ranking::entity::Candidate;
    ///
    /// let c = Candidate::new("1", "Longman & Eagle", "2657 N Kedzie Ave", "(773)276-7110", 0.1, 5.0, 4)
    ///     .unwrap();
    /// assert_eq!(c.price_level(), 4);
    ///
    /// assert!(Candidate::new("2", "Cafe", "Addr", "Phone", 0.1, 5.5, 2).is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
        distance: f64,
        rating: f64,
        price_level: i64,
    ) -> Result<Self, ValidationError> {
        let id = non_empty("id", id.into())?;
        let name = non_empty("name", name.into())?;
        let address = non_empty("address", address.into())?;
        let phone = non_empty("phone", phone.into())?;

        if distance.is_nan() || distance < 0.0 {
            return Err(ValidationError::InvalidDistance(distance));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ValidationError::RatingOutOfRange(rating));
        }
        if !(0..=i64::from(MAX_PRICE_LEVEL)).contains(&price_level) {
            return Err(ValidationError::PriceLevelOutOfRange(price_level));
        }

        Ok(Self {
            id,
            name,
            address,
            phone,
            distance,
            rating,
            price_level: price_level as u8,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Distance from the searcher in miles.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn price_level(&self) -> u8 {
        self.price_level
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.is_empty() {
        Err(ValidationError::EmptyField { field })
    } else {
        Ok(value)
    }
}

impl Rankable for Candidate {
    fn id(&self) -> &str {
        &self.id
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.address == other.address
            && self.phone == other.phone
            && self.distance.to_bits() == other.distance.to_bits()
            && self.rating.to_bits() == other.rating.to_bits()
            && self.price_level == other.price_level
    }
}

impl Eq for Candidate {}

impl Hash for Candidate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.address.hash(state);
        self.phone.hash(state);
        self.distance.to_bits().hash(state);
        self.rating.to_bits().hash(state);
        self.price_level.hash(state);
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "Phone number: {}", self.phone)?;
        writeln!(f, "Distance: {:.2} mi", self.distance)?;
        writeln!(f, "Rating: {:.1}", self.rating)?;
        writeln!(f, "Price level: {}", self.price_level)
    }
}

/// Unvalidated wire shape; deserialization goes through [`Candidate::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CandidateRecord {
    id: String,
    name: String,
    address: String,
    phone: String,
    distance: f64,
    rating: f64,
    price_level: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<CandidateRecord> for Candidate {
    type Error = ValidationError;

    fn try_from(r: CandidateRecord) -> Result<Self, Self::Error> {
        Candidate::new(
            r.id,
            r.name,
            r.address,
            r.phone,
            r.distance,
            r.rating,
            r.price_level,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn longman() -> Candidate {
        Candidate::new(
            "1",
            "Longman & Eagle",
            "2657 N Kedzie Ave, Chicago, IL 60647",
            "(773)276-7110",
            0.1,
            5.0,
            4,
        )
        .unwrap()
    }

    fn hash_of(c: &Candidate) -> u64 {
        let mut h = DefaultHasher::new();
        c.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_valid_candidate() {
        let c = longman();
        assert_eq!(c.id(), "1");
        assert_eq!(c.name(), "Longman & Eagle");
        assert!((c.distance() - 0.1).abs() < 1e-12);
        assert!((c.rating() - 5.0).abs() < 1e-12);
        assert_eq!(c.price_level(), 4);
    }

    #[test]
    fn test_empty_fields_rejected() {
        let err = Candidate::new("", "n", "a", "p", 0.0, 3.0, 1).unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { field: "id" });

        let err = Candidate::new("1", "n", "a", "", 0.0, 3.0, 1).unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { field: "phone" });
    }

    #[test]
    fn test_negative_distance_rejected() {
        let err = Candidate::new("1", "n", "a", "p", -0.5, 3.0, 1).unwrap_err();
        assert_eq!(err, ValidationError::InvalidDistance(-0.5));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(Candidate::new("1", "n", "a", "p", f64::NAN, 3.0, 1).is_err());
        assert!(Candidate::new("1", "n", "a", "p", 0.0, f64::NAN, 1).is_err());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Candidate::new("1", "n", "a", "p", 0.0, 1.0, 1).is_ok());
        assert!(Candidate::new("1", "n", "a", "p", 0.0, 5.0, 1).is_ok());
        assert_eq!(
            Candidate::new("1", "n", "a", "p", 0.0, 0.9, 1).unwrap_err(),
            ValidationError::RatingOutOfRange(0.9)
        );
        assert!(Candidate::new("1", "n", "a", "p", 0.0, 5.1, 1).is_err());
    }

    #[test]
    fn test_price_level_bounds() {
        assert!(Candidate::new("1", "n", "a", "p", 0.0, 3.0, 0).is_ok());
        assert!(Candidate::new("1", "n", "a", "p", 0.0, 3.0, 4).is_ok());
        assert_eq!(
            Candidate::new("1", "n", "a", "p", 0.0, 3.0, 5).unwrap_err(),
            ValidationError::PriceLevelOutOfRange(5)
        );
        assert!(Candidate::new("1", "n", "a", "p", 0.0, 3.0, -1).is_err());
    }

    #[test]
    fn test_equality_same_attributes() {
        assert_eq!(longman(), longman());
        assert_eq!(hash_of(&longman()), hash_of(&longman()));
    }

    #[test]
    fn test_equality_covers_all_fields() {
        let other = Candidate::new(
            "1",
            "Longman & Eagle",
            "2657 N Kedzie Ave, Chicago, IL 60647",
            "(773)276-7110",
            0.1,
            4.9,
            4,
        )
        .unwrap();
        assert_ne!(longman(), other);
    }

    #[test]
    fn test_display() {
        let text = longman().to_string();
        assert!(text.contains("Name: Longman & Eagle\n"));
        assert!(text.contains("Distance: 0.10 mi\n"));
        assert!(text.contains("Rating: 5.0\n"));
        assert!(text.ends_with("Price level: 4\n"));
    }
}
