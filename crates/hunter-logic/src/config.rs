//! Detector thresholds

use serde::{Deserialize, Serialize};

use crate::error::HunterError;

/// Minimum-evidence guards and tolerances for every hunter.
///
/// Below its guard a hunter cooperates without computing anything.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Own rounds before the defector/cooperator hunters may fire.
    pub min_rounds_constant: usize,
    /// Own rounds before the alternator hunter may fire.
    pub min_rounds_alternator: usize,
    /// Opponent rounds before the eventual cycle hunter may fire.
    pub min_rounds_eventual: usize,
    /// Trailing window searched for an eventual cycle.
    pub eventual_window: usize,
    /// Own rounds before the cooperation-ratio windows are compared.
    pub min_rounds_ratio: usize,
    /// Largest ratio drift still considered stationary.
    pub ratio_tolerance: f64,
    /// Own rounds that must be exceeded before response probabilities are used.
    pub min_rounds_random: usize,
    /// Samples that must be exceeded before a conditional probability counts.
    pub min_response_samples: usize,
    /// Largest distance from 0.5 still considered a coin flip.
    pub response_tolerance: f64,
}

impl DetectorConfig {
    pub fn standard() -> Self {
        Self {
            min_rounds_constant: 4,
            min_rounds_alternator: 6,
            min_rounds_eventual: 10,
            eventual_window: 15,
            min_rounds_ratio: 8,
            ratio_tolerance: 0.2,
            min_rounds_random: 10,
            min_response_samples: 5,
            response_tolerance: 0.25,
        }
    }

    /// Load overrides from JSON; missing fields keep their standard values.
    pub fn from_json(json: &str) -> Result<Self, HunterError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| HunterError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HunterError> {
        if self.eventual_window == 0 {
            return Err(HunterError::InvalidConfig(
                "eventual_window must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("ratio_tolerance", self.ratio_tolerance),
            ("response_tolerance", self.response_tolerance),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(HunterError::InvalidConfig(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::standard()
    }
}
