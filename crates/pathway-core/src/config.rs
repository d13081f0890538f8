//! Configuration loading for Pathway

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{PathwayError, Result};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub training: TrainingConfig,
    pub data: DataConfig,
}

/// Hyperparameters for the training run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Number of episodes to run
    pub episodes: u64,

    /// Learning rate, in (0, 1]
    pub alpha: f64,

    /// Discount factor, in [0, 1]
    pub gamma: f64,

    /// Candidate actions generated per episode
    pub candidates_per_episode: usize,

    /// Seed for every random draw in the run
    pub seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 100,
            alpha: 0.5,
            gamma: 0.9,
            candidates_per_episode: 5,
            seed: 42,
        }
    }
}

impl TrainingConfig {
    /// Validate hyperparameter ranges; failures are fatal before training
    pub fn validate(&self) -> Result<()> {
        if self.episodes == 0 {
            return Err(PathwayError::Config(
                "episodes must be positive".to_string(),
            ));
        }
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(PathwayError::Config(format!(
                "alpha must be in (0, 1], got {}",
                self.alpha
            )));
        }
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(PathwayError::Config(format!(
                "gamma must be in [0, 1], got {}",
                self.gamma
            )));
        }
        if self.candidates_per_episode == 0 {
            return Err(PathwayError::Config(
                "candidates_per_episode must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input and output locations
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Catalog spec JSON; the built-in catalog is used when absent
    pub catalog_path: Option<String>,

    /// Student profile JSON; a synthetic pool is used when absent
    pub students_path: Option<String>,

    /// Where the trained table artifact is written
    pub output_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            students_path: None,
            output_path: "q_table.json".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, preferring an explicitly supplied file
    pub fn load_from(path: Option<&Path>) -> anyhow::Result<Self> {
        let explicit = path.is_some();
        let config_path = path.map(Path::to_path_buf).or_else(Self::find_config_file);

        let mut builder = ConfigBuilder::<config::builder::DefaultState>::default();

        if let Some(path) = &config_path {
            tracing::info!("Loading config from: {:?}", path);
            builder = builder.add_source(File::from(path.clone()).required(explicit));
        } else {
            tracing::info!("No config file found, using defaults");
        }

        // Environment variables with PATHWAY_ prefix
        builder = builder.add_source(
            Environment::with_prefix("PATHWAY")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Find the configuration file
    fn find_config_file() -> Option<PathBuf> {
        // Check in order: PATHWAY_CONFIG env, ./pathway.toml, ~/.config/pathway/pathway.toml
        if let Ok(path) = std::env::var("PATHWAY_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let local = PathBuf::from("pathway.toml");
        if local.exists() {
            return Some(local);
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home
                .join(".config")
                .join("pathway")
                .join("pathway.toml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TrainingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.alpha, 0.5);
        assert_eq!(config.gamma, 0.9);
        assert_eq!(config.candidates_per_episode, 5);
    }

    #[test]
    fn test_zero_episodes_rejected() {
        let config = TrainingConfig {
            episodes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_alpha_range() {
        for alpha in [0.0, -0.1, 1.5] {
            let config = TrainingConfig {
                alpha,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "alpha {alpha} should fail");
        }
        let config = TrainingConfig {
            alpha: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_gamma_range() {
        for gamma in [-0.1, 1.1] {
            let config = TrainingConfig {
                gamma,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "gamma {gamma} should fail");
        }
        for gamma in [0.0, 1.0] {
            let config = TrainingConfig {
                gamma,
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "gamma {gamma} should pass");
        }
    }

    #[test]
    fn test_zero_candidates_rejected() {
        let config = TrainingConfig {
            candidates_per_episode: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
