//! Candidate actions and their table keys

use std::collections::HashSet;

use pathway_core::{CourseId, CurriculumGraph, PathwayError, Result};

use crate::key::escape;

/// Maximum number of courses in a single recommendation
pub const MAX_ACTION_LEN: usize = 3;

/// An ordered bundle of at most [`MAX_ACTION_LEN`] courses proposed as a
/// recommendation. The empty bundle is a valid action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateAction {
    courses: Vec<CourseId>,
}

impl CandidateAction {
    pub fn new(courses: Vec<CourseId>) -> Self {
        Self { courses }
    }

    pub fn empty() -> Self {
        Self {
            courses: Vec::new(),
        }
    }

    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Check the action before it is scored: length bound, no duplicate
    /// courses, every course present in the catalog
    pub fn validate(&self, graph: &CurriculumGraph) -> Result<()> {
        if self.courses.len() > MAX_ACTION_LEN {
            return Err(PathwayError::Data(format!(
                "action {self} has more than {MAX_ACTION_LEN} courses"
            )));
        }
        let mut seen: HashSet<&CourseId> = HashSet::new();
        for course in &self.courses {
            if !seen.insert(course) {
                return Err(PathwayError::Data(format!(
                    "action {self} contains duplicate course {course}"
                )));
            }
            if !graph.contains(course) {
                return Err(PathwayError::Data(format!(
                    "action {self} references unknown course {course}"
                )));
            }
        }
        Ok(())
    }

    /// Table key preserving the original course order. Two actions with the
    /// same courses in different order are distinct entries.
    pub fn key(&self) -> ActionKey {
        ActionKey(self.courses.clone())
    }
}

impl std::fmt::Display for CandidateAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.courses.is_empty() {
            return write!(f, "(empty)");
        }
        let names: Vec<&str> = self.courses.iter().map(CourseId::as_str).collect();
        write!(f, "{}", names.join("+"))
    }
}

/// Order-sensitive table key for a candidate action
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionKey(Vec<CourseId>);

impl ActionKey {
    pub fn courses(&self) -> &[CourseId] {
        &self.0
    }

    /// Delimiter-escaped string form for the persisted table
    pub fn encode(&self) -> String {
        let parts: Vec<String> = self.0.iter().map(|c| escape(c.as_str())).collect();
        parts.join(",")
    }
}

impl std::fmt::Display for ActionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(empty)");
        }
        let names: Vec<&str> = self.0.iter().map(CourseId::as_str).collect();
        write!(f, "{}", names.join("+"))
    }
}
