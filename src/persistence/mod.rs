//! Persistence Module
//!
//! Flat delimited-text import/export of a `RecordStore`.
//!
//! ## File Format
//! ```text
//! Student ID,Name,Gender,Age,Grades                     <- header, fixed order
//! S001,Ada,Female,20,"{""Math"":95.0,""Physics"":88.5}"  <- one row per record
//! ```
//!
//! - `.csv` files use `,` and `.txt` files use `|` (extension is
//!   case-insensitive). Anything else is rejected before the file is touched.
//! - The grades column holds a JSON object, quoted by the usual minimal
//!   quoting rules (doubled quotes inside a quoted field).
//! - Rows end in CRLF.
//!
//! ## Load Rules
//! - Missing file: store is cleared, nothing else happens.
//! - Columns are located by header name.
//! - Blank age reads as 0, blank grades as an empty map.
//! - Any unparseable age or grades value fails the whole load and leaves the
//!   store as it was.

mod format;
mod reader;
mod writer;

pub use format::FileFormat;
pub use reader::load_from_file;
pub use writer::save_to_file;

/// Column names, in file order
pub const HEADER: [&str; 5] = [COL_ID, COL_NAME, COL_GENDER, COL_AGE, COL_GRADES];

pub(crate) const COL_ID: &str = "Student ID";
pub(crate) const COL_NAME: &str = "Name";
pub(crate) const COL_GENDER: &str = "Gender";
pub(crate) const COL_AGE: &str = "Age";
pub(crate) const COL_GRADES: &str = "Grades";
