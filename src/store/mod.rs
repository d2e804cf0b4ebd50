//! Record Store Module
//!
//! In-memory associative container of student records keyed by ID.
//!
//! ## Responsibilities
//! - Insert-or-replace, point lookup and deletion by ID
//! - Full enumeration (as a list or as an ID -> record map)
//! - Bulk clear before a reload from disk
//!
//! ## Data Structure Choice
//! A fixed number of buckets, each a `Vec` scanned linearly:
//! - Bucket index = CRC32(id) % bucket_count
//! - At most one pair per ID across the whole table
//! - No resizing; long buckets only cost scan time
//!
//! Enumeration order follows bucket order, then insertion order within a
//! bucket. It is stable for a given history but unrelated to ID order.

mod table;

pub use table::{RecordStore, DEFAULT_BUCKET_COUNT};
