//! Ranking Tests
//!
//! Tests verify:
//! - Ascending / descending order by course grade
//! - Missing grade ranks as zero (not excluded)
//! - Stability of ties in both directions
//! - Course listing

use roster::analytics::all_courses;
use roster::{sort_by_field, Record, SortDirection};

// =============================================================================
// Helper Functions
// =============================================================================

fn graded(id: &str, course: &str, grade: f64) -> Record {
    let mut record = Record::new(id, id, "Other", 20);
    record.add_grade(course, grade);
    record
}

fn ungraded(id: &str) -> Record {
    Record::new(id, id, "Other", 20)
}

fn ids<'a>(records: &[&'a Record]) -> Vec<&'a str> {
    records.iter().map(|r| r.id()).collect()
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_sort_ascending() {
    let records = vec![
        graded("a", "Math", 70.0),
        graded("b", "Math", 95.0),
        graded("c", "Math", 40.0),
    ];

    let sorted = sort_by_field(&records, "Math", SortDirection::Ascending);

    assert_eq!(ids(&sorted), vec!["c", "a", "b"]);
}

#[test]
fn test_sort_descending() {
    let records = vec![
        graded("a", "Math", 70.0),
        graded("b", "Math", 95.0),
        graded("c", "Math", 40.0),
    ];

    let sorted = sort_by_field(&records, "Math", SortDirection::Descending);

    assert_eq!(ids(&sorted), vec!["b", "a", "c"]);
}

#[test]
fn test_default_direction_is_ascending() {
    assert_eq!(SortDirection::default(), SortDirection::Ascending);
}

#[test]
fn test_sort_empty_input() {
    let records: Vec<Record> = Vec::new();

    assert!(sort_by_field(&records, "Math", SortDirection::Ascending).is_empty());
}

// =============================================================================
// Missing Grade Tests
// =============================================================================

#[test]
fn test_missing_grade_ranks_as_zero_ascending() {
    let records = vec![graded("A", "course", 90.0), ungraded("B")];

    let sorted = sort_by_field(&records, "course", SortDirection::Ascending);

    assert_eq!(ids(&sorted), vec!["B", "A"]);
}

#[test]
fn test_missing_grade_ranks_as_zero_descending() {
    let records = vec![ungraded("B"), graded("A", "course", 90.0)];

    let sorted = sort_by_field(&records, "course", SortDirection::Descending);

    assert_eq!(ids(&sorted), vec!["A", "B"]);
}

#[test]
fn test_missing_grade_is_not_dropped() {
    let records = vec![ungraded("x"), ungraded("y"), graded("z", "Art", 5.0)];

    let sorted = sort_by_field(&records, "Art", SortDirection::Ascending);

    assert_eq!(sorted.len(), 3);
}

#[test]
fn test_missing_grade_ties_with_real_zero() {
    let records = vec![graded("zero", "Art", 0.0), ungraded("none")];

    let sorted = sort_by_field(&records, "Art", SortDirection::Ascending);

    assert_eq!(ids(&sorted), vec!["zero", "none"]);
}

// =============================================================================
// Stability Tests
// =============================================================================

#[test]
fn test_ties_keep_input_order_ascending() {
    let records = vec![
        graded("first", "Math", 80.0),
        graded("low", "Math", 10.0),
        graded("second", "Math", 80.0),
        graded("third", "Math", 80.0),
    ];

    let sorted = sort_by_field(&records, "Math", SortDirection::Ascending);

    assert_eq!(ids(&sorted), vec!["low", "first", "second", "third"]);
}

#[test]
fn test_ties_keep_input_order_descending() {
    let records = vec![
        graded("first", "Math", 80.0),
        graded("high", "Math", 99.0),
        graded("second", "Math", 80.0),
        ungraded("u1"),
        ungraded("u2"),
    ];

    let sorted = sort_by_field(&records, "Math", SortDirection::Descending);

    assert_eq!(ids(&sorted), vec!["high", "first", "second", "u1", "u2"]);
}

// =============================================================================
// Direction Parsing Tests
// =============================================================================

#[test]
fn test_direction_from_str() {
    assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Ascending));
    assert_eq!("Descending".parse::<SortDirection>(), Ok(SortDirection::Descending));
    assert!("sideways".parse::<SortDirection>().is_err());
}

// =============================================================================
// Course Listing Tests
// =============================================================================

#[test]
fn test_all_courses_sorted_unique() {
    let mut a = graded("a", "Physics", 70.0);
    a.add_grade("Math", 60.0);
    let b = graded("b", "Math", 90.0);
    let c = ungraded("c");
    let records = vec![a, b, c];

    assert_eq!(all_courses(&records), vec!["Math".to_string(), "Physics".to_string()]);
}
