//! Tabular action-value estimates and their persisted form

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use pathway_core::{PathwayError, Result, TrainingConfig};

use crate::action::ActionKey;
use crate::key::StateKey;
use crate::trainer::TrainingStats;

/// Mapping from (state, action) pairs to estimated scalar value.
///
/// Entries default to 0.0 until first update. There is no eviction; the
/// table grows with the number of distinct pairs observed.
#[derive(Debug, Default)]
pub struct ActionValueTable {
    entries: HashMap<(StateKey, ActionKey), f64>,
}

impl ActionValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value, or 0.0 for an unseen pair. Never fails.
    pub fn get(&self, state: &StateKey, action: &ActionKey) -> f64 {
        self.entries
            .get(&(state.clone(), action.clone()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Single-step update toward the immediate reward:
    /// `q += alpha * (reward + gamma * 0 - q)`.
    ///
    /// The next-state value is fixed at zero. This is a deliberate
    /// contextual-bandit simplification, not multi-step temporal-difference
    /// learning; extending it to bootstrap across episodes would be a
    /// behavior change, not a fix. Returns the new value.
    pub fn update(
        &mut self,
        state: StateKey,
        action: ActionKey,
        reward: f64,
        alpha: f64,
        gamma: f64,
    ) -> f64 {
        let entry = self.entries.entry((state, action)).or_insert(0.0);
        *entry += alpha * (reward + gamma * 0.0 - *entry);
        *entry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(StateKey, ActionKey), &f64)> {
        self.entries.iter()
    }

    /// Explicit serialization into the run artifact. Composite keys use the
    /// escaped `state#action` string encoding.
    pub fn to_artifact(&self, config: &TrainingConfig, stats: &TrainingStats) -> TableArtifact {
        let entries = self
            .entries
            .iter()
            .map(|((state, action), value)| {
                (format!("{}#{}", state.encode(), action.encode()), *value)
            })
            .collect();

        TableArtifact {
            run_id: Uuid::new_v4(),
            trained_at: Utc::now(),
            config: config.clone(),
            stats: stats.clone(),
            entries,
        }
    }
}

/// Persisted output of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableArtifact {
    pub run_id: Uuid,
    pub trained_at: DateTime<Utc>,
    pub config: TrainingConfig,
    pub stats: TrainingStats,

    /// Encoded `(state, action)` composite -> estimated value
    pub entries: BTreeMap<String, f64>,
}

impl TableArtifact {
    /// Write the artifact as pretty-printed JSON. A failure here is fatal
    /// for the run, though the in-memory table is unaffected.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| {
            PathwayError::Persistence(format!("failed to write {}: {e}", path.display()))
        })?;
        info!(path = %path.display(), entries = self.entries.len(), "action-value table persisted");
        Ok(())
    }

    pub fn read_json(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PathwayError::Persistence(format!("failed to read {}: {e}", path.display()))
        })?;
        let artifact = serde_json::from_str(&contents)?;
        Ok(artifact)
    }
}
