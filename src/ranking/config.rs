//! Ranking configuration.

use crate::error::ConfigError;

/// Result cap used by [`RankingConfig::interactive`].
pub const INTERACTIVE_MAX_RESULTS: usize = 10;

/// Configuration for [`RankingBuilder`](super::RankingBuilder).
///
/// # Examples
///
/// ```
/// use u_ranking::ranking::RankingConfig;
///
/// let config = RankingConfig::default()
///     .with_max_results(10)
///     .with_epsilon(1e-9);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.clamp(25), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RankingConfig {
    /// Upper bound applied to the requested result count. `None` = no cap.
    pub max_results: Option<usize>,

    /// Width of the buckets primary keys are quantized to. Keys in the same
    /// bucket are tied and fall through to the identifier tie-break.
    /// 0.0 = exact.
    pub epsilon: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_results: None,
            epsilon: 0.0,
        }
    }
}

impl RankingConfig {
    /// Preset for a result list shown to a person: at most 10 entries.
    pub fn interactive() -> Self {
        Self::default().with_max_results(INTERACTIVE_MAX_RESULTS)
    }

    pub fn with_max_results(mut self, n: usize) -> Self {
        self.max_results = Some(n);
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Applies `max_results` to a requested bound.
    pub fn clamp(&self, k: usize) -> usize {
        match self.max_results {
            Some(max) => k.min(max),
            None => k,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }
        if self.max_results == Some(0) {
            return Err(ConfigError::ZeroMaxResults);
        }
        Ok(())
    }
}
