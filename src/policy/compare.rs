//! Policy comparison logic.

use super::types::{Direction, RankKey, Rankable};
use std::cmp::Ordering;
use std::fmt;

/// Compares two identifiers.
///
/// Identifiers made only of ASCII digits compare by numeric value, so
/// `"9" < "10"`; equal values with different zero padding fall back to byte
/// order. All-digit identifiers sort before every other identifier, and
/// the rest compare lexicographically by bytes. This is a total order.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use u_ranking::policy::compare_ids;
///
/// assert_eq!(compare_ids("9", "10"), Ordering::Less);
/// assert_eq!(compare_ids("abc", "abd"), Ordering::Less);
/// assert_eq!(compare_ids("42", "a1"), Ordering::Less);
/// ```
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (digits(a), digits(b)) {
        (Some(x), Some(y)) => x
            .len()
            .cmp(&y.len())
            .then_with(|| x.cmp(y))
            .then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Returns the significant digits of an all-digit identifier.
fn digits(id: &str) -> Option<&str> {
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        Some(id.trim_start_matches('0'))
    } else {
        None
    }
}

/// Compares two keys ascending.
///
/// With `epsilon > 0` keys are quantized to buckets of width `epsilon`
/// (`floor(key / epsilon)`); keys in the same bucket are equal, so key
/// equality stays transitive. Otherwise keys compare exactly, with
/// `-0.0 == 0.0` and NaN ordered by [`f64::total_cmp`].
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use u_ranking::policy::compare_keys;
///
/// assert_eq!(compare_keys(0.00, 0.04, 0.05), Ordering::Equal);
/// assert_eq!(compare_keys(0.04, 0.08, 0.05), Ordering::Less);
/// assert_eq!(compare_keys(-0.0, 0.0, 0.0), Ordering::Equal);
/// ```
pub fn compare_keys(a: f64, b: f64, epsilon: f64) -> Ordering {
    if epsilon > 0.0 {
        total_cmp((a / epsilon).floor(), (b / epsilon).floor())
    } else {
        total_cmp(a, b)
    }
}

fn total_cmp(a: f64, b: f64) -> Ordering {
    if a == b {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

/// Adapts a closure to [`RankKey`].
struct FnKey<F> {
    name: String,
    f: F,
}

impl<T, F> RankKey<T> for FnKey<F>
where
    F: Fn(&T) -> f64 + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn key(&self, item: &T) -> f64 {
        (self.f)(item)
    }
}

/// A primary key with direction plus an identifier tie-break.
///
/// `compare(a, b) == Ordering::Less` means `a` ranks ahead of `b`, which
/// is the contract [`OrderedHeap`](crate::heap::OrderedHeap) expects.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use u_ranking::policy::{Direction, RankingPolicy, Rankable};
///
/// struct Item(&'static str, f64);
/// impl Rankable for Item {
///     fn id(&self) -> &str { self.0 }
/// }
///
/// let by_score = RankingPolicy::by_fn("score", |i: &Item| i.1)
///     .with_direction(Direction::Descending);
///
/// // Same score: the smaller id wins even though scores are descending.
/// assert_eq!(by_score.compare(&Item("9", 4.0), &Item("10", 4.0)), Ordering::Less);
/// assert_eq!(by_score.compare(&Item("5", 3.5), &Item("10", 4.0)), Ordering::Greater);
/// ```
pub struct RankingPolicy<T> {
    key: Box<dyn RankKey<T>>,
    direction: Direction,
    tie_break: Direction,
    epsilon: f64,
}

impl<T> RankingPolicy<T> {
    /// Creates an ascending policy with ascending tie-break.
    pub fn new<K: RankKey<T> + 'static>(key: K) -> Self {
        Self {
            key: Box::new(key),
            direction: Direction::Ascending,
            tie_break: Direction::Ascending,
            epsilon: 0.0,
        }
    }

    /// Smallest key first.
    pub fn ascending<K: RankKey<T> + 'static>(key: K) -> Self {
        Self::new(key)
    }

    /// Largest key first; the tie-break stays ascending.
    pub fn descending<K: RankKey<T> + 'static>(key: K) -> Self {
        Self::new(key).with_direction(Direction::Descending)
    }

    /// Creates an ascending policy from a closure.
    pub fn by_fn<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        Self::new(FnKey {
            name: name.into(),
            f,
        })
    }

    /// Sets the primary key direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the identifier tie-break direction.
    pub fn with_tie_break(mut self, tie_break: Direction) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the bucket width under which primary keys count as equal.
    ///
    /// See [`compare_keys`].
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Name of the primary key.
    pub fn key_name(&self) -> &str {
        self.key.name()
    }

    /// Primary key direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Identifier tie-break direction.
    pub fn tie_break(&self) -> Direction {
        self.tie_break
    }

    /// Key bucket width; 0.0 compares exactly.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Primary key of `item`.
    pub fn key(&self, item: &T) -> f64 {
        self.key.key(item)
    }
}

impl<T: Rankable> RankingPolicy<T> {
    /// Orders `a` relative to `b`; `Less` ranks `a` first.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        let primary = compare_keys(self.key.key(a), self.key.key(b), self.epsilon);
        self.direction
            .apply(primary)
            .then_with(|| self.tie_break.apply(compare_ids(a.id(), b.id())))
    }
}

impl<T> fmt::Debug for RankingPolicy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RankingPolicy")
            .field("key", &self.key.name())
            .field("direction", &self.direction)
            .field("tie_break", &self.tie_break)
            .field("epsilon", &self.epsilon)
            .finish()
    }
}
