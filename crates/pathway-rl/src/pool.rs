//! Student pools - the per-episode source of student records
//!
//! The training loop only sees the [`StudentPool`] trait. The JSON pool
//! replays records from a file; the synthetic pool fabricates plausible
//! progress histories by walking the catalog in prerequisite order.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use pathway_core::{
    derive_gpa, CourseId, CurriculumGraph, Grade, PathwayError, Result, StudentProfile,
};

/// Interest tags assigned to synthetic students
pub const INTEREST_AREAS: [&str; 5] = ["Cloud", "Cyber", "AI", "Frontend", "Visualization"];

/// Source of one student record per episode
pub trait StudentPool {
    fn next_student(&mut self) -> Result<StudentProfile>;
}

/// Uniform random draws from a fixed set of profiles loaded from JSON
#[derive(Debug)]
pub struct JsonStudentPool {
    profiles: Vec<StudentProfile>,
    rng: StdRng,
}

impl JsonStudentPool {
    pub fn from_profiles(profiles: Vec<StudentProfile>, seed: u64) -> Result<Self> {
        if profiles.is_empty() {
            return Err(PathwayError::Data("student pool is empty".to_string()));
        }
        Ok(Self {
            profiles,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn from_file(path: &Path, seed: u64) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let profiles: Vec<StudentProfile> = serde_json::from_str(&contents)?;
        info!(count = profiles.len(), path = %path.display(), "student pool loaded");
        Self::from_profiles(profiles, seed)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl StudentPool for JsonStudentPool {
    fn next_student(&mut self) -> Result<StudentProfile> {
        self.profiles
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| PathwayError::Data("student pool is empty".to_string()))
    }
}

/// Synthesizes student histories against a curriculum graph.
///
/// Each student completes prerequisite-satisfied courses in a shuffled
/// catalog walk until a random target of 3 to 6 completions, with random
/// grades, 1 to 2 interests, and a term between 1 and 8.
pub struct SyntheticStudentPool<'a> {
    graph: &'a CurriculumGraph,
    rng: StdRng,
    next_id: u32,
}

impl<'a> SyntheticStudentPool<'a> {
    pub fn new(graph: &'a CurriculumGraph, seed: u64) -> Result<Self> {
        if graph.is_empty() {
            return Err(PathwayError::Config(
                "cannot synthesize students for an empty catalog".to_string(),
            ));
        }
        Ok(Self {
            graph,
            rng: StdRng::seed_from_u64(seed),
            next_id: 1,
        })
    }

    fn generate(&mut self) -> Result<StudentProfile> {
        let mut order: Vec<CourseId> = self.graph.courses().cloned().collect();
        order.shuffle(&mut self.rng);

        let target: usize = self.rng.gen_range(3..=6);
        let mut completed_set: BTreeSet<CourseId> = BTreeSet::new();
        let mut completed: Vec<CourseId> = Vec::new();
        let mut grades: HashMap<CourseId, Grade> = HashMap::new();

        // Single shuffled pass; a DAG always has at least one root course,
        // so at least one course is completed.
        for course in order {
            if self.graph.is_available(&course, &completed_set) {
                completed_set.insert(course.clone());
                completed.push(course.clone());
                let grade = *Grade::ALL
                    .choose(&mut self.rng)
                    .unwrap_or(&Grade::C);
                grades.insert(course, grade);
                if completed.len() >= target {
                    break;
                }
            }
        }

        let gpa = derive_gpa(&grades)?;

        let interest_count = self.rng.gen_range(1..=2);
        let interests: Vec<String> = INTEREST_AREAS
            .choose_multiple(&mut self.rng, interest_count)
            .map(ToString::to_string)
            .collect();

        let id = self.next_id;
        self.next_id += 1;

        Ok(StudentProfile {
            id,
            completed_courses: completed,
            grades,
            gpa,
            term: self.rng.gen_range(1..=8),
            interests,
        })
    }

    /// Batch generation for `pathway students generate`
    pub fn generate_batch(&mut self, count: usize) -> Result<Vec<StudentProfile>> {
        (0..count).map(|_| self.generate()).collect()
    }
}

impl StudentPool for SyntheticStudentPool<'_> {
    fn next_student(&mut self) -> Result<StudentProfile> {
        self.generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathway_core::{CatalogSpec, StudentState};

    fn graph() -> CurriculumGraph {
        CurriculumGraph::from_spec(&CatalogSpec::default_catalog()).unwrap()
    }

    fn profile(id: u32) -> StudentProfile {
        StudentProfile {
            id,
            completed_courses: vec![CourseId::from("IntroProgramming")],
            grades: [(CourseId::from("IntroProgramming"), Grade::B)]
                .into_iter()
                .collect(),
            gpa: 3.0,
            term: 1,
            interests: vec!["AI".to_string()],
        }
    }

    #[test]
    fn test_json_pool_rejects_empty_input() {
        let err = JsonStudentPool::from_profiles(vec![], 1).unwrap_err();
        assert!(matches!(err, PathwayError::Data(_)));
    }

    #[test]
    fn test_json_pool_draws_from_profiles() {
        let mut pool =
            JsonStudentPool::from_profiles(vec![profile(1), profile(2), profile(3)], 1).unwrap();
        assert_eq!(pool.len(), 3);

        for _ in 0..10 {
            let student = pool.next_student().unwrap();
            assert!((1..=3).contains(&student.id));
        }
    }

    #[test]
    fn test_synthetic_respects_prerequisites() {
        let graph = graph();
        let mut pool = SyntheticStudentPool::new(&graph, 42).unwrap();

        for _ in 0..50 {
            let student = pool.next_student().unwrap();
            let mut seen: BTreeSet<CourseId> = BTreeSet::new();
            for course in &student.completed_courses {
                assert!(
                    graph.is_available(course, &seen),
                    "course {course} completed before its prerequisites"
                );
                seen.insert(course.clone());
            }
        }
    }

    #[test]
    fn test_synthetic_profiles_validate() {
        let graph = graph();
        let mut pool = SyntheticStudentPool::new(&graph, 42).unwrap();

        for _ in 0..50 {
            let student = pool.next_student().unwrap();
            assert!(!student.grades.is_empty());
            assert!((1..=8).contains(&student.term));
            assert!((1..=2).contains(&student.interests.len()));

            let gpa = student.gpa;
            let state = StudentState::from_profile(student).unwrap();
            assert_eq!(state.gpa, gpa);
        }
    }

    #[test]
    fn test_synthetic_is_deterministic_per_seed() {
        let graph = graph();
        let mut first = SyntheticStudentPool::new(&graph, 7).unwrap();
        let mut second = SyntheticStudentPool::new(&graph, 7).unwrap();

        for _ in 0..10 {
            let a = first.next_student().unwrap();
            let b = second.next_student().unwrap();
            assert_eq!(a.completed_courses, b.completed_courses);
            assert_eq!(a.gpa, b.gpa);
            assert_eq!(a.interests, b.interests);
        }
    }

    #[test]
    fn test_synthetic_rejects_empty_catalog() {
        let graph = CurriculumGraph::new();
        assert!(SyntheticStudentPool::new(&graph, 1).is_err());
    }
}
