//! Roster Module
//!
//! The facade callers use: a `RecordStore` plus the rules a front end
//! applies before touching it.
//!
//! ## Responsibilities
//! - Validate new records (required fields, positive age, unique ID)
//! - Validate grades (0..=100) before recording them
//! - Load from / save to the configured data file
//! - Hand out snapshots for ranking and statistics

use std::path::Path;

use tracing::{debug, info};

use crate::analytics::{self, SortDirection, Statistics};
use crate::config::Config;
use crate::error::{Result, RosterError};
use crate::persistence;
use crate::record::Record;
use crate::store::RecordStore;

/// Student records plus their persistence settings
pub struct Roster {
    /// Roster configuration
    config: Config,

    /// The records themselves
    store: RecordStore,
}

impl Roster {
    /// Lowest accepted grade
    pub const MIN_GRADE: f64 = 0.0;
    /// Highest accepted grade
    pub const MAX_GRADE: f64 = 100.0;

    /// Create an empty roster; nothing is read from disk
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let store = RecordStore::with_buckets(config.bucket_count);
        Ok(Self { config, store })
    }

    /// Create a roster and load `config.data_file` into it
    ///
    /// A missing data file yields an empty roster.
    pub fn open(config: Config) -> Result<Self> {
        let mut roster = Self::new(config)?;
        roster.reload()?;
        Ok(roster)
    }

    // =========================================================================
    // Records
    // =========================================================================

    /// Add a new student
    ///
    /// ID, name and gender are stored trimmed and must be non-blank; age must
    /// be positive. An ID that is already present is rejected rather than
    /// overwritten; use `store_mut().insert` to replace a record deliberately.
    pub fn add_record(&mut self, record: Record) -> Result<()> {
        let record = Record::new(
            record.id().trim(),
            record.name.trim(),
            record.gender.trim(),
            record.age,
        )
        .with_grades(record.grades().clone());

        if record.id().is_empty() || record.name.is_empty() || record.gender.is_empty() {
            return Err(RosterError::InvalidRecord(
                "student ID, name and gender are required".to_string(),
            ));
        }

        if record.age == 0 {
            return Err(RosterError::InvalidRecord(
                "age must be a positive integer".to_string(),
            ));
        }

        if self.store.contains(record.id()) {
            return Err(RosterError::DuplicateId(record.id().to_string()));
        }

        info!(id = %record.id(), name = %record.name, "adding student");
        self.store.insert(record.id().to_string(), record);
        Ok(())
    }

    /// Remove a student; `false` if the ID was not present
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.store.delete(id);
        if removed {
            info!(id = %id, "removed student");
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.store.retrieve(id)
    }

    /// Record (or overwrite) a grade for an existing student
    pub fn add_grade(&mut self, id: &str, course: &str, grade: f64) -> Result<()> {
        let course = course.trim();
        if course.is_empty() {
            return Err(RosterError::InvalidRecord("course name is required".to_string()));
        }

        if !(Self::MIN_GRADE..=Self::MAX_GRADE).contains(&grade) {
            return Err(RosterError::InvalidGrade(grade));
        }

        let record = self
            .store
            .retrieve_mut(id)
            .ok_or_else(|| RosterError::RecordNotFound(id.to_string()))?;

        debug!(id = %id, course = %course, grade, "recording grade");
        record.add_grade(course, grade);
        Ok(())
    }

    /// Snapshot of every record, in store enumeration order
    pub fn records(&self) -> Vec<&Record> {
        self.store.get_all()
    }

    /// Every course that has at least one grade
    pub fn courses(&self) -> Vec<String> {
        analytics::all_courses(self.store.get_all())
    }

    // =========================================================================
    // Analytics
    // =========================================================================

    /// Students ranked by their grade in `course` (missing grade ranks as 0)
    pub fn ranking(&self, course: &str, direction: SortDirection) -> Vec<&Record> {
        analytics::sort_by_field(self.store.get_all(), course, direction)
    }

    /// Statistics for `course`, or `None` if nobody has a grade for it
    pub fn statistics(&self, course: &str) -> Option<Statistics> {
        analytics::compute_statistics(self.store.get_all(), course)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Save to the configured data file
    pub fn save(&self) -> Result<usize> {
        persistence::save_to_file(&self.store, &self.config.data_file)
    }

    /// Save to an explicit path (the configured data file is unchanged)
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<usize> {
        persistence::save_to_file(&self.store, path)
    }

    /// Replace the contents with the configured data file
    pub fn reload(&mut self) -> Result<usize> {
        persistence::load_from_file(&mut self.store, &self.config.data_file)
    }

    /// Replace the contents with an explicit file
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        persistence::load_from_file(&mut self.store, path)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
