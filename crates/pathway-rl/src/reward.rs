//! Reward function scoring a candidate action against a student state

use pathway_core::{CurriculumGraph, StudentState};

use crate::action::CandidateAction;

/// Penalty for recommending a course whose prerequisites are not met
pub const PREREQ_VIOLATION: f64 = -4.0;

/// Penalty for recommending a course the student already completed
pub const REDUNDANT_COURSE: f64 = -2.0;

/// Bonus when an interest tag substring-matches the course name
pub const INTEREST_MATCH: f64 = 3.0;

/// Bonus when the course unlocks at least one other catalog course
pub const UNLOCKS_DEPENDENTS: f64 = 2.0;

/// One-time bonus for students with GPA above this threshold
pub const GPA_THRESHOLD: f64 = 3.0;
pub const GPA_BONUS: f64 = 1.0;

/// Pure, deterministic scoring of candidate recommendations.
///
/// Holds no state between calls; identical `(state, action)` inputs always
/// yield the identical reward.
#[derive(Debug)]
pub struct RewardModel<'a> {
    graph: &'a CurriculumGraph,
}

impl<'a> RewardModel<'a> {
    pub fn new(graph: &'a CurriculumGraph) -> Self {
        Self { graph }
    }

    /// Score an action for a student.
    ///
    /// Per course, in order: a prerequisite violation or a redundant
    /// recommendation is penalized; otherwise interest alignment and
    /// unlocking dependents are rewarded. The GPA bonus applies once per
    /// action, after all courses, so the empty action still earns it.
    pub fn score(&self, state: &StudentState, action: &CandidateAction) -> f64 {
        let mut reward = 0.0;

        for course in action.courses() {
            if !self.graph.is_available(course, &state.completed) {
                reward += PREREQ_VIOLATION;
            } else if state.completed.contains(course) {
                reward += REDUNDANT_COURSE;
            } else {
                let name = course.as_str().to_lowercase();
                if state
                    .interests
                    .iter()
                    .any(|tag| name.contains(&tag.to_lowercase()))
                {
                    reward += INTEREST_MATCH;
                }
                if self.graph.has_dependents(course) {
                    reward += UNLOCKS_DEPENDENTS;
                }
            }
        }

        if state.gpa > GPA_THRESHOLD {
            reward += GPA_BONUS;
        }

        reward
    }
}
