//! RecordStore implementation
//!
//! Vec-of-buckets hash table with linear scan inside each bucket.

use std::collections::HashMap;

use tracing::debug;

use crate::record::Record;

/// Bucket count used by `RecordStore::new`
pub const DEFAULT_BUCKET_COUNT: usize = 100;

type Bucket = Vec<(String, Record)>;

/// Fixed-bucket table mapping student ID -> record
#[derive(Debug, Clone)]
pub struct RecordStore {
    buckets: Vec<Bucket>,
    len: usize,
}

impl RecordStore {
    /// Create an empty store with the default bucket count
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Create an empty store with `bucket_count` buckets (clamped to at least 1)
    pub fn with_buckets(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        Self {
            buckets: vec![Vec::new(); bucket_count],
            len: 0,
        }
    }

    fn bucket_index(&self, id: &str) -> usize {
        crc32fast::hash(id.as_bytes()) as usize % self.buckets.len()
    }

    /// Insert a record, replacing any record already stored under `id`
    ///
    /// A replaced record keeps its position in the bucket. Always returns
    /// `true`; the table has no capacity limit.
    pub fn insert(&mut self, id: impl Into<String>, record: Record) -> bool {
        let id = id.into();
        let index = self.bucket_index(&id);
        let bucket = &mut self.buckets[index];

        if let Some(slot) = bucket.iter_mut().find(|(key, _)| *key == id) {
            debug!(id = %id, bucket = index, "replacing record");
            slot.1 = record;
            return true;
        }

        debug!(id = %id, bucket = index, "inserting record");
        bucket.push((id, record));
        self.len += 1;
        true
    }

    /// Look up a record by ID
    pub fn retrieve(&self, id: &str) -> Option<&Record> {
        self.buckets[self.bucket_index(id)]
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, record)| record)
    }

    /// Look up a record by ID for in-place mutation (e.g. adding grades)
    pub fn retrieve_mut(&mut self, id: &str) -> Option<&mut Record> {
        let index = self.bucket_index(id);
        self.buckets[index]
            .iter_mut()
            .find(|(key, _)| key == id)
            .map(|(_, record)| record)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.retrieve(id).is_some()
    }

    /// Remove the record stored under `id`
    ///
    /// Returns `false` (and changes nothing) if the ID is absent.
    pub fn delete(&mut self, id: &str) -> bool {
        let index = self.bucket_index(id);
        let bucket = &mut self.buckets[index];

        match bucket.iter().position(|(key, _)| key == id) {
            Some(pos) => {
                // `remove`, not `swap_remove`: the rest of the bucket keeps its order
                bucket.remove(pos);
                self.len -= 1;
                debug!(id = %id, bucket = index, "deleted record");
                true
            }
            None => false,
        }
    }

    /// All records, bucket by bucket, in insertion order within each bucket
    pub fn get_all(&self) -> Vec<&Record> {
        self.iter().map(|(_, record)| record).collect()
    }

    /// All records keyed by ID
    pub fn get_all_as_mapping(&self) -> HashMap<&str, &Record> {
        self.iter().collect()
    }

    /// Iterate `(id, record)` pairs in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.buckets
            .iter()
            .flatten()
            .map(|(key, record)| (key.as_str(), record))
    }

    /// Empty every bucket; the bucket count is kept
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
        debug!("store cleared");
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
