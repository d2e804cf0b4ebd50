//! Student record entity
//!
//! A record owns its grades and nothing else. The identifier is fixed at
//! construction; every other field is freely mutable by the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single student with per-course grades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    student_id: String,

    /// Display name
    pub name: String,

    /// Categorical attribute (free text, e.g. "Male", "Female", "Other")
    pub gender: String,

    /// Age in years
    pub age: u32,

    /// Course name -> grade. Range is not enforced here.
    #[serde(default)]
    grades: BTreeMap<String, f64>,
}

impl Record {
    /// Create a record with no grades
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        gender: impl Into<String>,
        age: u32,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            gender: gender.into(),
            age,
            grades: BTreeMap::new(),
        }
    }

    /// Replace the whole grade mapping
    pub fn with_grades(mut self, grades: BTreeMap<String, f64>) -> Self {
        self.grades = grades;
        self
    }

    pub fn id(&self) -> &str {
        &self.student_id
    }

    /// Add or overwrite the grade for one course
    pub fn add_grade(&mut self, course: impl Into<String>, grade: f64) {
        self.grades.insert(course.into(), grade);
    }

    /// Grade for `course`, if one was recorded
    pub fn grade(&self, course: &str) -> Option<f64> {
        self.grades.get(course).copied()
    }

    pub fn has_grade(&self, course: &str) -> bool {
        self.grades.contains_key(course)
    }

    pub fn grades(&self) -> &BTreeMap<String, f64> {
        &self.grades
    }

    /// Sum of every recorded grade
    pub fn total_grade(&self) -> f64 {
        self.grades.values().sum()
    }
}
