//! Import a store from a delimited file

use std::collections::BTreeMap;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};

use crate::error::{Result, RosterError};
use crate::record::Record;
use crate::store::RecordStore;

use super::{FileFormat, COL_AGE, COL_GENDER, COL_GRADES, COL_ID, COL_NAME};

/// Positions of the required columns in the header row
struct Columns {
    id: usize,
    name: usize,
    gender: usize,
    age: usize,
    grades: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| RosterError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            id: find(COL_ID)?,
            name: find(COL_NAME)?,
            gender: find(COL_GENDER)?,
            age: find(COL_AGE)?,
            grades: find(COL_GRADES)?,
        })
    }
}

/// Replace the contents of `store` with the records in `path`
///
/// Returns the number of records now in the store. A missing file is not an error: the
/// store is cleared and `Ok(0)` returned. Every row is parsed before the
/// store is touched, so a malformed file leaves it unchanged.
pub fn load_from_file(store: &mut RecordStore, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let format = FileFormat::from_path(path)?;

    if !path.exists() {
        warn!(path = %path.display(), "data file not found, starting empty");
        store.clear();
        return Ok(0);
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(format.delimiter())
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?;
    if headers.is_empty() {
        warn!(path = %path.display(), "data file is empty, starting empty");
        store.clear();
        return Ok(0);
    }
    let columns = Columns::locate(headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(parse_row(&row, &columns)?);
    }

    store.clear();
    for record in records {
        store.insert(record.id().to_string(), record);
    }
    // A repeated ID replaces the earlier row, so count what was kept
    let loaded = store.len();

    info!(path = %path.display(), records = loaded, "loaded records");
    Ok(loaded)
}

fn parse_row(row: &StringRecord, columns: &Columns) -> Result<Record> {
    let line = row.position().map(|pos| pos.line()).unwrap_or(0);
    // Short rows are allowed; absent trailing cells read as blank
    let cell = |index: usize| row.get(index).unwrap_or("");

    let age_text = cell(columns.age).trim();
    let age = if age_text.is_empty() {
        0
    } else {
        age_text.parse::<u32>().map_err(|e| RosterError::MalformedRecord {
            line,
            reason: format!("age '{}' is not a non-negative integer: {}", age_text, e),
        })?
    };

    let grades_text = cell(columns.grades).trim();
    let grades = if grades_text.is_empty() {
        BTreeMap::new()
    } else {
        serde_json::from_str::<BTreeMap<String, f64>>(grades_text).map_err(|e| {
            RosterError::MalformedRecord {
                line,
                reason: format!("grades '{}' are not a JSON object of numbers: {}", grades_text, e),
            }
        })?
    };

    Ok(Record::new(cell(columns.id), cell(columns.name), cell(columns.gender), age)
        .with_grades(grades))
}
