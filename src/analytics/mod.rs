//! Analytics Module
//!
//! Free functions over a collection of records, for one course at a time.
//!
//! ## Missing grades
//! The two operations treat a record without the course differently, on
//! purpose:
//! - `sort_by_field` ranks it as a grade of `0.0`, so unscored students sink
//!   to the bottom (ascending: top) of the ranking instead of vanishing.
//! - `compute_statistics` leaves it out entirely; it never counts as a zero.
//!
//! Callers usually pass `RecordStore::get_all()`; any iterator of `&Record`
//! works.

mod sort;
mod stats;

pub use sort::{all_courses, sort_by_field, SortDirection};
pub use stats::{compute_statistics, GradeBand, Histogram, Statistics};
