//! Seeded candidate-action sampling
//!
//! All randomness flows through an injected `StdRng`, so a run is fully
//! reproducible from its seed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use pathway_core::{CourseId, PathwayError, Result};

use crate::action::{CandidateAction, MAX_ACTION_LEN};

/// Generates candidate actions from a student's available-course set
#[derive(Debug)]
pub struct CandidateSampler {
    rng: StdRng,
}

impl CandidateSampler {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw exactly `count` distinct courses from `available`.
    ///
    /// Fails when more courses are requested than exist; the public
    /// sampling path clamps before calling this, so the error never
    /// reaches the training loop.
    fn draw(&mut self, available: &[CourseId], count: usize) -> Result<Vec<CourseId>> {
        if count > available.len() {
            return Err(PathwayError::Sampling(format!(
                "requested {count} courses but only {} are available",
                available.len()
            )));
        }
        Ok(available
            .choose_multiple(&mut self.rng, count)
            .cloned()
            .collect())
    }

    /// One candidate: up to [`MAX_ACTION_LEN`] courses sampled without
    /// replacement, clamped to the available count
    pub fn sample_action(&mut self, available: &[CourseId]) -> Result<CandidateAction> {
        let count = MAX_ACTION_LEN.min(available.len());
        if count < MAX_ACTION_LEN {
            debug!(
                available = available.len(),
                "sample size clamped to available courses"
            );
        }
        Ok(CandidateAction::new(self.draw(available, count)?))
    }

    /// The per-episode candidate set.
    ///
    /// With at least [`MAX_ACTION_LEN`] courses available, `count` sampled
    /// candidates are generated. With fewer, the full available set is the
    /// single candidate; with none, the single candidate is the empty
    /// action.
    pub fn candidates(
        &mut self,
        available: &[CourseId],
        count: usize,
    ) -> Result<Vec<CandidateAction>> {
        if available.len() < MAX_ACTION_LEN {
            return Ok(vec![CandidateAction::new(available.to_vec())]);
        }
        (0..count).map(|_| self.sample_action(available)).collect()
    }

    /// Uniform choice among the generated candidates
    pub fn choose(&mut self, candidates: &[CandidateAction]) -> Option<CandidateAction> {
        candidates.choose(&mut self.rng).cloned()
    }
}
