//! Configuration for a search session

use crate::core::Difficulty;
use crate::core::constants::{MAX_AUTO_SPEED, MIN_AUTO_SPEED, MIN_TICK_MILLIS, TICK_BUDGET_MILLIS};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters fixed for one search session.
///
/// A session replaces its configuration wholesale on reset; the only
/// mid-session mutation path is the session's own `set_*` operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Static block data searched over
    #[serde(default)]
    pub data: Vec<u8>,

    /// Required count of leading zero hex characters
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Automatic stepping speed, `MIN_AUTO_SPEED..=MAX_AUTO_SPEED`
    #[serde(default = "default_auto_speed")]
    pub auto_speed: u32,
}

fn default_auto_speed() -> u32 {
    50
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            difficulty: Difficulty::new(2),
            auto_speed: default_auto_speed(),
        }
    }
}

impl SearchConfig {
    /// Create a validated configuration
    pub fn new(data: impl Into<Vec<u8>>, difficulty: Difficulty, auto_speed: u32) -> Result<Self> {
        let config = Self {
            data: data.into(),
            difficulty,
            auto_speed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject out-of-range parameters before any state mutation.
    ///
    /// Difficulty is structurally non-negative and deliberately unbounded
    /// above: levels past the digest length are unattainable but valid.
    pub fn validate(&self) -> Result<()> {
        validate_auto_speed(self.auto_speed)
    }

    /// Interval between automatic ticks.
    ///
    /// Monotonic in speed (higher speed, shorter interval) with a floor
    /// of `MIN_TICK_MILLIS` so the digest provider is never overwhelmed.
    pub fn tick_interval(&self) -> Duration {
        let millis = (TICK_BUDGET_MILLIS / u64::from(self.auto_speed.max(1))).max(MIN_TICK_MILLIS);
        Duration::from_millis(millis)
    }
}

/// Validate an automatic-speed level
pub(crate) fn validate_auto_speed(level: u32) -> Result<()> {
    if (MIN_AUTO_SPEED..=MAX_AUTO_SPEED).contains(&level) {
        Ok(())
    } else {
        Err(Error::validation(format!(
            "auto speed {} outside {}..={}",
            level, MIN_AUTO_SPEED, MAX_AUTO_SPEED
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(10)]
    #[test_case(50)]
    #[test_case(100)]
    fn test_valid_auto_speed(level: u32) {
        let config = SearchConfig::new(&b"data"[..], Difficulty::new(2), level).unwrap();
        assert_eq!(config.auto_speed, level);
    }

    #[test_case(0)]
    #[test_case(9)]
    #[test_case(101)]
    fn test_invalid_auto_speed(level: u32) {
        let err = SearchConfig::new(&b"data"[..], Difficulty::new(2), level).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.difficulty, Difficulty::new(2));
    }

    #[test]
    fn test_tick_interval_mapping() {
        let slow = SearchConfig::new(Vec::new(), Difficulty::new(1), 10).unwrap();
        let fast = SearchConfig::new(Vec::new(), Difficulty::new(1), 100).unwrap();

        assert_eq!(slow.tick_interval(), Duration::from_millis(100));
        assert_eq!(fast.tick_interval(), Duration::from_millis(10));
        // Higher speed never lengthens the interval.
        assert!(fast.tick_interval() <= slow.tick_interval());
    }

    #[test]
    fn test_tick_interval_floor() {
        for level in MIN_AUTO_SPEED..=MAX_AUTO_SPEED {
            let config = SearchConfig::new(Vec::new(), Difficulty::new(1), level).unwrap();
            assert!(config.tick_interval() >= Duration::from_millis(MIN_TICK_MILLIS));
        }
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = SearchConfig::new(&b"Block #1"[..], Difficulty::new(3), 80).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
