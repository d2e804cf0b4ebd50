//! Export a store to a delimited file

use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use crate::error::{Result, RosterError};
use crate::record::Record;
use crate::store::RecordStore;

use super::{FileFormat, HEADER};

/// Write every record in `store` to `path`, replacing the file
///
/// Returns the number of records written. The extension is checked and
/// every row encoded before the file is opened, so an unsupported extension
/// or an unencodable record fails without creating or truncating anything.
pub fn save_to_file(store: &RecordStore, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let format = FileFormat::from_path(path)?;

    let rows = store
        .get_all()
        .into_iter()
        .map(encode_row)
        .collect::<Result<Vec<_>>>()?;

    let mut writer = WriterBuilder::new()
        .delimiter(format.delimiter())
        .from_path(path)?;

    writer.write_record(HEADER)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    info!(path = %path.display(), records = rows.len(), "saved records");
    Ok(rows.len())
}

/// Cells for one data row, in `HEADER` order
///
/// JSON has no encoding for infinite or NaN grades (they would come out as
/// `null` and fail to load), so such a record is rejected.
fn encode_row(record: &Record) -> Result<[String; 5]> {
    if let Some((course, grade)) = record.grades().iter().find(|(_, g)| !g.is_finite()) {
        return Err(RosterError::Serialization(format!(
            "grade {} for course '{}' of '{}' is not a finite number",
            grade,
            course,
            record.id()
        )));
    }

    let grades = serde_json::to_string(record.grades()).map_err(|e| {
        RosterError::Serialization(format!(
            "grades for '{}' could not be encoded: {}",
            record.id(),
            e
        ))
    })?;

    Ok([
        record.id().to_string(),
        record.name.clone(),
        record.gender.clone(),
        record.age.to_string(),
        grades,
    ])
}
