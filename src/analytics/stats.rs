//! Descriptive statistics for one course
//!
//! Only records that actually carry a grade for the course are counted.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::record::Record;

/// One of the five fixed grade ranges, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GradeBand {
    /// [90, 100]
    NinetyToHundred,
    /// [80, 90)
    Eighties,
    /// [70, 80)
    Seventies,
    /// [60, 70)
    Sixties,
    /// Everything not matched above
    BelowSixty,
}

impl GradeBand {
    /// All bands in evaluation (and display) order
    pub const ALL: [GradeBand; 5] = [
        GradeBand::NinetyToHundred,
        GradeBand::Eighties,
        GradeBand::Seventies,
        GradeBand::Sixties,
        GradeBand::BelowSixty,
    ];

    /// Pick the band for a grade, checking ranges top-down
    ///
    /// `BelowSixty` is the fall-through: grades above 100 and NaN land there
    /// too, since they match none of the closed ranges.
    pub fn classify(grade: f64) -> Self {
        if (90.0..=100.0).contains(&grade) {
            GradeBand::NinetyToHundred
        } else if (80.0..90.0).contains(&grade) {
            GradeBand::Eighties
        } else if (70.0..80.0).contains(&grade) {
            GradeBand::Seventies
        } else if (60.0..70.0).contains(&grade) {
            GradeBand::Sixties
        } else {
            GradeBand::BelowSixty
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GradeBand::NinetyToHundred => "90-100",
            GradeBand::Eighties => "80-89",
            GradeBand::Seventies => "70-79",
            GradeBand::Sixties => "60-69",
            GradeBand::BelowSixty => "Below 60",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Count of grades per band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Histogram {
    counts: [usize; 5],
}

impl Histogram {
    fn record(&mut self, grade: f64) {
        self.counts[GradeBand::classify(grade).index()] += 1;
    }

    pub fn count(&self, band: GradeBand) -> usize {
        self.counts[band.index()]
    }

    /// `(band, count)` pairs from highest band to lowest
    pub fn iter(&self) -> impl Iterator<Item = (GradeBand, usize)> + '_ {
        GradeBand::ALL.into_iter().map(move |band| (band, self.count(band)))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Summary of one course's grades
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of records that had a grade for the course
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Most frequent grade. Ties go to the grade seen first in input order.
    pub mode: f64,
    pub histogram: Histogram,
}

/// Compute mean, median, mode and band histogram for `course`
///
/// Returns `None` when no record has a grade for `course`.
pub fn compute_statistics<'a, I>(records: I, course: &str) -> Option<Statistics>
where
    I: IntoIterator<Item = &'a Record>,
{
    let grades: Vec<f64> = records
        .into_iter()
        .filter_map(|record| record.grade(course))
        .collect();

    if grades.is_empty() {
        return None;
    }

    let count = grades.len();
    let mean = grades.iter().sum::<f64>() / count as f64;

    let mut sorted = grades.clone();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let median = if count % 2 == 1 {
        sorted[count / 2]
    } else {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    };

    let mut histogram = Histogram::default();
    for grade in &grades {
        histogram.record(*grade);
    }

    Some(Statistics {
        count,
        mean,
        median,
        mode: mode(&grades),
        histogram,
    })
}

/// Most frequent value; first-seen wins a tie. `grades` must be non-empty.
fn mode(grades: &[f64]) -> f64 {
    // (grade, occurrences) in first-seen order
    let mut tallies: Vec<(f64, usize)> = Vec::new();
    let mut slots: HashMap<u64, usize> = HashMap::new();

    for &grade in grades {
        // -0.0 and 0.0 are the same grade
        let key = if grade == 0.0 { 0.0f64 } else { grade }.to_bits();
        match slots.get(&key) {
            Some(&slot) => tallies[slot].1 += 1,
            None => {
                slots.insert(key, tallies.len());
                tallies.push((grade, 1));
            }
        }
    }

    let mut best = tallies[0];
    for &(grade, occurrences) in &tallies[1..] {
        if occurrences > best.1 {
            best = (grade, occurrences);
        }
    }
    best.0
}
