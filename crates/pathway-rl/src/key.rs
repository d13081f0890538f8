//! Canonical state keys for table indexing

use pathway_core::{CourseId, StudentState};

/// Canonical snapshot of a student's progress used to index the table.
///
/// Completed courses and interests are sorted, and the GPA is bucketed to
/// one decimal (stored as integer tenths so the key stays `Eq + Hash`).
/// Two states that differ only in input ordering produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    completed: Vec<CourseId>,
    gpa_tenths: i64,
    term: u32,
    interests: Vec<String>,
}

impl StateKey {
    pub fn from_state(state: &StudentState) -> Self {
        let mut interests: Vec<String> = state.interests.iter().cloned().collect();
        interests.sort();

        Self {
            completed: state.completed.iter().cloned().collect(),
            gpa_tenths: (state.gpa * 10.0).round() as i64,
            term: state.term,
            interests,
        }
    }

    /// GPA bucket as a float, one decimal of precision
    pub fn gpa(&self) -> f64 {
        self.gpa_tenths as f64 / 10.0
    }

    /// Delimiter-escaped string form for the persisted table.
    ///
    /// Segments are joined with `|` and list elements with `,`; both
    /// characters (and the composite separator `#`) are escaped inside
    /// course names and interests, so names containing separators cannot
    /// collide.
    pub fn encode(&self) -> String {
        let completed: Vec<String> = self.completed.iter().map(|c| escape(c.as_str())).collect();
        let interests: Vec<String> = self.interests.iter().map(|i| escape(i)).collect();
        format!(
            "{}|{:.1}|{}|{}",
            completed.join(","),
            self.gpa(),
            self.term,
            interests.join(",")
        )
    }
}

/// Escape the key delimiters with a backslash
pub(crate) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '|' | ',' | '#') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
