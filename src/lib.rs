//! # Roster
//!
//! An in-memory student record store with:
//! - A fixed-bucket hash table keyed by student ID
//! - Grade ranking and descriptive statistics per course
//! - Flat-file persistence (`.csv` comma-delimited, `.txt` pipe-delimited)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Caller (CLI / GUI / scripts)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                         Roster                              │
//! │          (input validation, default data file)              │
//! └──────────┬──────────────────┬──────────────────┬────────────┘
//!            │                  │                  │
//!            ▼                  ▼                  ▼
//!   ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//!   │ RecordStore │     │  Analytics  │     │ Persistence │
//!   │  (buckets)  │     │ (sort/stats)│     │  (CSV/TXT)  │
//!   └─────────────┘     └─────────────┘     └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod analytics;
pub mod persistence;
pub mod roster;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosterError};
pub use config::Config;
pub use record::Record;
pub use store::RecordStore;
pub use analytics::{compute_statistics, sort_by_field, SortDirection, Statistics};
pub use persistence::{load_from_file, save_to_file, FileFormat};
pub use roster::Roster;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Roster
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
