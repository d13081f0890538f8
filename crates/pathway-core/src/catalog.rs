//! Curriculum graph - courses and prerequisite edges
//!
//! The graph is built once at startup from a [`CatalogSpec`] and is immutable
//! afterwards. Edges point from prerequisite to dependent; the full edge set
//! must stay acyclic, which is enforced at insertion time.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PathwayError, Result};

/// Course identifier, unique within a catalog
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourseId(pub String);

impl CourseId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CourseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Declarative catalog input: course list plus prerequisite map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSpec {
    pub courses: Vec<String>,

    /// Course -> list of prerequisite course identifiers
    #[serde(default)]
    pub prerequisites: HashMap<String, Vec<String>>,
}

impl CatalogSpec {
    /// Load a catalog spec from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let spec: CatalogSpec = serde_json::from_str(&contents)?;
        Ok(spec)
    }

    /// The built-in IT curriculum used when no catalog file is supplied
    pub fn default_catalog() -> Self {
        let courses = [
            "IntroProgramming",
            "MathBasics",
            "WebDevelopment",
            "OOP",
            "DatabaseSystems",
            "Networks",
            "CloudComputing",
            "CyberSecurity",
            "AI_Fundamentals",
            "DeepLearning",
            "DataVisualization",
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        let prerequisites = [
            ("OOP", vec!["IntroProgramming"]),
            ("WebDevelopment", vec!["IntroProgramming"]),
            ("DatabaseSystems", vec!["MathBasics"]),
            ("Networks", vec!["DatabaseSystems"]),
            ("CloudComputing", vec!["Networks"]),
            ("CyberSecurity", vec!["Networks"]),
            ("AI_Fundamentals", vec!["OOP", "MathBasics"]),
            ("DeepLearning", vec!["AI_Fundamentals"]),
            ("DataVisualization", vec!["DatabaseSystems"]),
        ]
        .into_iter()
        .map(|(c, ps)| {
            (
                c.to_string(),
                ps.into_iter().map(ToString::to_string).collect(),
            )
        })
        .collect();

        Self {
            courses,
            prerequisites,
        }
    }
}

/// Prerequisite graph over a fixed course catalog
///
/// Invariant: the edge set is a DAG. No course is its own prerequisite,
/// directly or transitively.
#[derive(Debug, Clone, Default)]
pub struct CurriculumGraph {
    /// Catalog insertion order, used for deterministic iteration
    order: Vec<CourseId>,

    /// Course -> its direct prerequisites
    prereqs: HashMap<CourseId, Vec<CourseId>>,

    /// Course -> courses that list it as a prerequisite
    dependents: HashMap<CourseId, Vec<CourseId>>,
}

impl CurriculumGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a catalog spec, validating every reference and
    /// rejecting any edge that would create a cycle
    pub fn from_spec(spec: &CatalogSpec) -> Result<Self> {
        let mut graph = Self::new();

        for course in &spec.courses {
            graph.add_course(CourseId::from(course.as_str()))?;
        }

        for (course, prereq_list) in &spec.prerequisites {
            for prereq in prereq_list {
                graph.add_prerequisite(
                    &CourseId::from(course.as_str()),
                    &CourseId::from(prereq.as_str()),
                )?;
            }
        }

        info!(
            courses = graph.len(),
            edges = graph.edge_count(),
            "curriculum graph built"
        );

        Ok(graph)
    }

    /// Register a course. Fails on duplicate identifiers.
    pub fn add_course(&mut self, id: CourseId) -> Result<()> {
        if self.prereqs.contains_key(&id) {
            return Err(PathwayError::Config(format!("duplicate course: {id}")));
        }
        self.order.push(id.clone());
        self.prereqs.insert(id.clone(), Vec::new());
        self.dependents.insert(id, Vec::new());
        Ok(())
    }

    /// Insert a prerequisite edge: `prereq` must be completed before `course`.
    ///
    /// Both endpoints must already be registered. The edge is rejected if it
    /// would make the graph cyclic, including the trivial self-edge.
    pub fn add_prerequisite(&mut self, course: &CourseId, prereq: &CourseId) -> Result<()> {
        if !self.prereqs.contains_key(course) {
            return Err(PathwayError::Config(format!("unknown course: {course}")));
        }
        if !self.prereqs.contains_key(prereq) {
            return Err(PathwayError::Config(format!(
                "unknown prerequisite: {prereq}"
            )));
        }
        if course == prereq {
            return Err(PathwayError::Config(format!(
                "course {course} cannot be its own prerequisite"
            )));
        }
        if self.is_transitive_prereq(prereq, course) {
            return Err(PathwayError::Config(format!(
                "prerequisite edge {prereq} -> {course} would create a cycle"
            )));
        }
        let existing = self
            .prereqs
            .get_mut(course)
            .ok_or_else(|| PathwayError::Config(format!("unknown course: {course}")))?;
        if existing.contains(prereq) {
            return Err(PathwayError::Config(format!(
                "duplicate prerequisite edge {prereq} -> {course}"
            )));
        }
        existing.push(prereq.clone());
        self.dependents
            .entry(prereq.clone())
            .or_default()
            .push(course.clone());
        debug!(%course, %prereq, "prerequisite edge added");
        Ok(())
    }

    /// True iff `target` is a direct or transitive prerequisite of `course`
    fn is_transitive_prereq(&self, course: &CourseId, target: &CourseId) -> bool {
        let mut stack: Vec<&CourseId> = match self.prereqs.get(course) {
            Some(direct) => direct.iter().collect(),
            None => return false,
        };
        let mut visited: HashSet<&CourseId> = HashSet::new();

        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            if visited.insert(current) {
                if let Some(direct) = self.prereqs.get(current) {
                    stack.extend(direct.iter());
                }
            }
        }
        false
    }

    /// True iff every prerequisite of `course` is in `completed`.
    ///
    /// A course with no prerequisites is always available. A course outside
    /// the catalog has no registered prerequisites and is treated the same
    /// way; callers that care validate catalog membership separately.
    pub fn is_available(&self, course: &CourseId, completed: &BTreeSet<CourseId>) -> bool {
        self.prereqs
            .get(course)
            .map_or(true, |ps| ps.iter().all(|p| completed.contains(p)))
    }

    /// True iff `course` is a prerequisite of at least one catalog course
    pub fn has_dependents(&self, course: &CourseId) -> bool {
        self.dependents.get(course).is_some_and(|d| !d.is_empty())
    }

    /// Catalog courses available to a student and not yet completed, in
    /// catalog order
    pub fn available_courses(&self, completed: &BTreeSet<CourseId>) -> Vec<CourseId> {
        self.order
            .iter()
            .filter(|c| !completed.contains(c) && self.is_available(c, completed))
            .cloned()
            .collect()
    }

    pub fn contains(&self, course: &CourseId) -> bool {
        self.prereqs.contains_key(course)
    }

    /// Direct prerequisites of a course, empty for unknown courses
    pub fn prerequisites(&self, course: &CourseId) -> &[CourseId] {
        self.prereqs.get(course).map_or(&[], Vec::as_slice)
    }

    /// Courses in catalog order
    pub fn courses(&self) -> impl Iterator<Item = &CourseId> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.prereqs.values().map(Vec::len).sum()
    }
}
