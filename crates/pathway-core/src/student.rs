//! Student records and validated student state

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::catalog::CourseId;
use crate::error::{PathwayError, Result};

/// Letter grade on the 4.0 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// Numeric grade points
    pub fn points(self) -> f64 {
        match self {
            Grade::A => 4.0,
            Grade::B => 3.0,
            Grade::C => 2.0,
            Grade::D => 1.0,
            Grade::F => 0.0,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{letter}")
    }
}

/// Mean of the grade points over all graded courses, rounded to 2 decimals.
///
/// An empty grade map has no defined GPA and fails explicitly.
pub fn derive_gpa(grades: &HashMap<CourseId, Grade>) -> Result<f64> {
    if grades.is_empty() {
        return Err(PathwayError::Data(
            "GPA undefined: grade map is empty".to_string(),
        ));
    }
    let sum: f64 = grades.values().map(|g| g.points()).sum();
    let mean = sum / grades.len() as f64;
    Ok((mean * 100.0).round() / 100.0)
}

/// Raw student record as supplied by the student pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: u32,
    pub completed_courses: Vec<CourseId>,
    pub grades: HashMap<CourseId, Grade>,
    pub gpa: f64,
    pub term: u32,
    pub interests: Vec<String>,
}

/// Validated, per-episode student state
///
/// The GPA is always derived from the grade map, never taken on faith from
/// the input record.
#[derive(Debug, Clone)]
pub struct StudentState {
    pub id: u32,
    pub completed: BTreeSet<CourseId>,
    pub grades: HashMap<CourseId, Grade>,
    pub gpa: f64,
    pub term: u32,
    pub interests: BTreeSet<String>,
}

impl StudentState {
    /// Validate a raw profile into a usable state.
    ///
    /// Fails with a data error when the grade map is empty or a completed
    /// course has no grade; such records are skipped by the training loop.
    pub fn from_profile(profile: StudentProfile) -> Result<Self> {
        let gpa = derive_gpa(&profile.grades)?;

        for course in &profile.completed_courses {
            if !profile.grades.contains_key(course) {
                return Err(PathwayError::Data(format!(
                    "student {}: completed course {course} has no grade",
                    profile.id
                )));
            }
        }

        Ok(Self {
            id: profile.id,
            completed: profile.completed_courses.into_iter().collect(),
            grades: profile.grades,
            gpa,
            term: profile.term,
            interests: profile.interests.into_iter().collect(),
        })
    }
}
