//! Generic CSV read/write helpers shared by every flat-file collection.
//!
//! All collections share the same shape: a header row followed by one
//! record per row, comma-delimited, with quoting for fields that contain
//! the delimiter. Reads deserialize the whole file; writes re-serialize
//! every row (the full-file rewrite is the contract, not an optimization
//! target); appends add single rows for the append-only review log.

use std::fs::{self, OpenOptions};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreResult;

/// Read and deserialize every row of a CSV file.
///
/// Header names are matched against the row type's serde renames. Field
/// whitespace is trimmed during parsing.
pub fn read_rows<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Serialize every row back to the file, header first, replacing the
/// previous contents entirely.
pub fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Append a single row, writing the header first if the file is new or
/// empty.
pub fn append_row<T: Serialize>(path: &Path, row: &T) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);
    writer.serialize(row)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        #[serde(rename = "ID")]
        id: String,
        #[serde(rename = "Name")]
        name: String,
    }

    #[test]
    fn write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");

        let rows = vec![
            Row { id: "1".into(), name: "a".into() },
            Row { id: "2".into(), name: "with, comma".into() },
        ];
        write_rows(&path, &rows).unwrap();

        let read: Vec<Row> = read_rows(&path).unwrap();
        assert_eq!(read, rows);
    }

    #[test]
    fn quoted_fields_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("q.csv");
        std::fs::write(&path, "ID,Name\n1,\"comma, inside\"\n").unwrap();

        let read: Vec<Row> = read_rows(&path).unwrap();
        assert_eq!(read[0].name, "comma, inside");
    }

    #[test]
    fn append_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");

        append_row(&path, &Row { id: "1".into(), name: "a".into() }).unwrap();
        append_row(&path, &Row { id: "2".into(), name: "b".into() }).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("ID,Name").count(), 1);

        let read: Vec<Row> = read_rows(&path).unwrap();
        assert_eq!(read.len(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        assert!(read_rows::<Row>(&path).is_err());
    }
}
