//! Engine configuration.
//!
//! Every knob has the classic-game value as its default, so
//! `EngineConfig::default()` plays the standard 4×4 game with fair 2/4
//! spawns and an entropy-seeded random source.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// When the turn driver spawns a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnPolicy {
    /// Spawn at the start of every turn, even after a move that changed
    /// nothing.
    #[default]
    Always,
    /// Spawn only when the grid changed since the previous spawn.
    OnChange,
}

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length of the square board.
    pub size: usize,

    /// Probability that a spawned tile is a 4 rather than a 2.
    pub four_probability: f64,

    /// Tiles placed by `BoardEngine::new_game`.
    pub initial_spawns: usize,

    /// Spawn gating used by the session driver.
    pub spawn_policy: SpawnPolicy,

    /// Fixed seed for the default random source. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: 4,
            four_probability: 0.5,
            initial_spawns: 1,
            spawn_policy: SpawnPolicy::Always,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, p: f64) -> Self {
        self.four_probability = p;
        self
    }

    /// Set the number of tiles placed at game start.
    #[must_use]
    pub fn with_initial_spawns(mut self, count: usize) -> Self {
        self.initial_spawns = count;
        self
    }

    /// Set the spawn policy.
    #[must_use]
    pub fn with_spawn_policy(mut self, policy: SpawnPolicy) -> Self {
        self.spawn_policy = policy;
        self
    }

    /// Use a fixed seed instead of entropy.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(EngineError::InvalidSize(self.size));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(EngineError::InvalidProbability(self.four_probability));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.size, 4);
        assert_eq!(config.four_probability, 0.5);
        assert_eq!(config.initial_spawns, 1);
        assert_eq!(config.spawn_policy, SpawnPolicy::Always);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_size(5)
            .with_four_probability(0.1)
            .with_initial_spawns(2)
            .with_spawn_policy(SpawnPolicy::OnChange)
            .with_seed(9);

        assert_eq!(config.size, 5);
        assert_eq!(config.four_probability, 0.1);
        assert_eq!(config.initial_spawns, 2);
        assert_eq!(config.spawn_policy, SpawnPolicy::OnChange);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            EngineConfig::new().with_size(0).validate(),
            Err(EngineError::InvalidSize(0))
        );
        assert_eq!(
            EngineConfig::new().with_four_probability(1.5).validate(),
            Err(EngineError::InvalidProbability(1.5))
        );
        assert!(EngineConfig::new().with_four_probability(f64::NAN).validate().is_err());
        assert!(EngineConfig::new().with_four_probability(0.0).validate().is_ok());
    }

    #[test]
    fn test_serde_partial() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"size": 3, "spawn_policy": "on_change"}"#).unwrap();

        assert_eq!(config.size, 3);
        assert_eq!(config.spawn_policy, SpawnPolicy::OnChange);
        assert_eq!(config.four_probability, 0.5);

        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
