//! Training loop - runs episodes and updates the action-value table

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use pathway_core::{CurriculumGraph, Result, StudentState, TrainingConfig};

use crate::key::StateKey;
use crate::pool::StudentPool;
use crate::reward::RewardModel;
use crate::sampler::CandidateSampler;
use crate::table::ActionValueTable;

/// Orchestrates episodes against a shared, caller-owned table.
///
/// Strictly sequential: one student, one chosen action, one table update
/// per episode, for a fixed episode count. No I/O happens inside the loop.
#[derive(Debug)]
pub struct Trainer<'a> {
    graph: &'a CurriculumGraph,
    reward: RewardModel<'a>,
    sampler: CandidateSampler,
    config: TrainingConfig,
}

impl<'a> Trainer<'a> {
    /// Validates hyperparameters up front; a bad configuration is fatal
    /// before any training occurs.
    pub fn new(graph: &'a CurriculumGraph, config: TrainingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            graph,
            reward: RewardModel::new(graph),
            sampler: CandidateSampler::seeded(config.seed),
            config,
        })
    }

    /// Run the configured number of episodes.
    ///
    /// Invalid student records and malformed sampled actions skip the
    /// episode with a warning and continue; they never abort the run.
    pub fn run(
        &mut self,
        pool: &mut dyn StudentPool,
        table: &mut ActionValueTable,
    ) -> Result<TrainingStats> {
        let mut stats = TrainingStats::default();

        info!(
            episodes = self.config.episodes,
            alpha = self.config.alpha,
            gamma = self.config.gamma,
            seed = self.config.seed,
            "training started"
        );

        for episode in 0..self.config.episodes {
            let profile = pool.next_student()?;
            let student_id = profile.id;

            let state = match StudentState::from_profile(profile) {
                Ok(state) => state,
                Err(e) => {
                    warn!(episode, student_id, error = %e, "skipping episode: invalid student record");
                    stats.episodes_skipped += 1;
                    continue;
                }
            };

            let state_key = StateKey::from_state(&state);
            let available = self.graph.available_courses(&state.completed);

            let candidates = self
                .sampler
                .candidates(&available, self.config.candidates_per_episode)?;
            let Some(action) = self.sampler.choose(&candidates) else {
                warn!(episode, student_id, "skipping episode: no candidate actions");
                stats.episodes_skipped += 1;
                continue;
            };

            if let Err(e) = action.validate(self.graph) {
                warn!(episode, student_id, error = %e, "skipping episode: invalid action");
                stats.episodes_skipped += 1;
                continue;
            }

            let reward = self.reward.score(&state, &action);
            let value = table.update(
                state_key,
                action.key(),
                reward,
                self.config.alpha,
                self.config.gamma,
            );

            debug!(episode, student_id, %action, reward, value, "episode complete");

            stats.episodes_run += 1;
            stats.total_reward += reward;
        }

        if stats.episodes_run > 0 {
            stats.mean_reward = stats.total_reward / stats.episodes_run as f64;
        }
        stats.table_entries = table.len();

        info!(
            episodes_run = stats.episodes_run,
            episodes_skipped = stats.episodes_skipped,
            mean_reward = stats.mean_reward,
            table_entries = stats.table_entries,
            "training finished"
        );

        Ok(stats)
    }
}

/// Summary of a training run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingStats {
    pub episodes_run: u64,
    pub episodes_skipped: u64,
    pub total_reward: f64,
    pub mean_reward: f64,
    pub table_entries: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use pathway_core::{CatalogSpec, CourseId, Grade, PathwayError, StudentProfile};

    use crate::pool::{JsonStudentPool, SyntheticStudentPool};

    fn graph() -> CurriculumGraph {
        CurriculumGraph::from_spec(&CatalogSpec::default_catalog()).unwrap()
    }

    fn config(episodes: u64) -> TrainingConfig {
        TrainingConfig {
            episodes,
            ..Default::default()
        }
    }

    fn valid_profile(id: u32) -> StudentProfile {
        StudentProfile {
            id,
            completed_courses: vec![
                CourseId::from("IntroProgramming"),
                CourseId::from("MathBasics"),
            ],
            grades: [
                (CourseId::from("IntroProgramming"), Grade::A),
                (CourseId::from("MathBasics"), Grade::B),
            ]
            .into_iter()
            .collect(),
            gpa: 3.5,
            term: 2,
            interests: vec!["AI".to_string()],
        }
    }

    #[test]
    fn test_invalid_config_rejected_before_training() {
        let graph = graph();
        let bad = TrainingConfig {
            alpha: 0.0,
            ..Default::default()
        };
        let err = Trainer::new(&graph, bad).unwrap_err();
        assert!(matches!(err, PathwayError::Config(_)));
    }

    #[test]
    fn test_training_populates_table() {
        let graph = graph();
        let mut pool = SyntheticStudentPool::new(&graph, 5).unwrap();
        let mut table = ActionValueTable::new();
        let mut trainer = Trainer::new(&graph, config(50)).unwrap();

        let stats = trainer.run(&mut pool, &mut table).unwrap();

        assert_eq!(stats.episodes_run, 50);
        assert_eq!(stats.episodes_skipped, 0);
        assert!(!table.is_empty());
        assert_eq!(stats.table_entries, table.len());
    }

    #[test]
    fn test_bad_records_skip_and_continue() {
        let graph = graph();

        let mut broken = valid_profile(2);
        broken.grades = HashMap::new(); // GPA undefined

        let mut pool =
            JsonStudentPool::from_profiles(vec![valid_profile(1), broken], 3).unwrap();
        let mut table = ActionValueTable::new();
        let mut trainer = Trainer::new(&graph, config(40)).unwrap();

        let stats = trainer.run(&mut pool, &mut table).unwrap();

        assert_eq!(stats.episodes_run + stats.episodes_skipped, 40);
        assert!(stats.episodes_skipped > 0, "broken record should be drawn");
        assert!(stats.episodes_run > 0, "valid record should be drawn");
        assert!(!table.is_empty());
    }

    #[test]
    fn test_student_with_everything_completed_updates_with_empty_action() {
        let graph = graph();

        let all: Vec<CourseId> = graph.courses().cloned().collect();
        let grades: HashMap<CourseId, Grade> =
            all.iter().map(|c| (c.clone(), Grade::A)).collect();
        let done = StudentProfile {
            id: 9,
            completed_courses: all,
            grades,
            gpa: 4.0,
            term: 8,
            interests: vec!["AI".to_string()],
        };

        let mut pool = JsonStudentPool::from_profiles(vec![done], 3).unwrap();
        let mut table = ActionValueTable::new();
        let mut trainer = Trainer::new(&graph, config(5)).unwrap();

        let stats = trainer.run(&mut pool, &mut table).unwrap();

        assert_eq!(stats.episodes_run, 5);
        assert_eq!(table.len(), 1, "one (state, empty action) entry");
        // Straight-A student: every episode earns exactly the GPA bonus
        assert_eq!(stats.total_reward, 5.0);
    }

    #[test]
    fn test_mean_reward_consistent() {
        let graph = graph();
        let mut pool = JsonStudentPool::from_profiles(vec![valid_profile(1)], 3).unwrap();
        let mut table = ActionValueTable::new();
        let mut trainer = Trainer::new(&graph, config(20)).unwrap();

        let stats = trainer.run(&mut pool, &mut table).unwrap();
        assert!(
            (stats.mean_reward - stats.total_reward / stats.episodes_run as f64).abs() < 1e-12
        );
    }
}
