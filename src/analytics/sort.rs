//! Ranking records by course grade

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Order of a ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction '{}'", other)),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "Ascending"),
            SortDirection::Descending => write!(f, "Descending"),
        }
    }
}

/// Sort records by their grade in `course`
///
/// A record without a grade for `course` sorts as `0.0`. The sort is stable
/// in both directions: records with equal grades keep their input order,
/// including under `Descending`.
pub fn sort_by_field<'a, I>(records: I, course: &str, direction: SortDirection) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut sorted: Vec<&Record> = records.into_iter().collect();
    let key = |record: &Record| record.grade(course).unwrap_or(0.0);

    match direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| key(*a).total_cmp(&key(*b))),
        SortDirection::Descending => sorted.sort_by(|a, b| key(*b).total_cmp(&key(*a))),
    }

    sorted
}

/// Every course name that appears in any record, sorted and de-duplicated
pub fn all_courses<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .flat_map(|record| record.grades().keys())
        .cloned()
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
