//! I/O operations for chart tables
//!
//! This crate reads and writes the delimited text tables the chart ingests
//! its x/y/z (and optional color) columns from.

pub mod table_csv;
pub mod error;

pub use error::*;
pub use table_csv::{Delimiter, TableCsvReader, TableCsvWriter, TableSchema};

use chartxyz_core::Table;
use std::path::Path;

/// Trait for reading tables from files
pub trait TableReader {
    fn read_table<P: AsRef<Path>>(path: P) -> Result<Table>;
}

/// Trait for writing tables to files
pub trait TableWriter {
    fn write_table<P: AsRef<Path>>(table: &Table, path: P) -> Result<()>;
}

impl TableReader for TableCsvReader {
    fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
        TableCsvReader::read_table(path)
    }
}

impl TableWriter for TableCsvWriter {
    fn write_table<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
        let delimiter = match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some("tsv") => Delimiter::Tab,
            Some("xyz") | Some("txt") => Delimiter::Space,
            _ => Delimiter::Comma,
        };
        TableCsvWriter::write_table(table, path, delimiter)
    }
}

/// Auto-detect format and read a table
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("csv") | Some("tsv") | Some("xyz") | Some("txt") | None => {
            <TableCsvReader as TableReader>::read_table(path)
        }
        Some(other) => Err(IoError::Parse {
            line: 0,
            message: format!("unsupported table format: .{other}"),
        }),
    }
}

/// Write a table, picking the delimiter from the extension
pub fn write_table<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    <TableCsvWriter as TableWriter>::write_table(table, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_xyz_roundtrip_uses_spaces() {
        let temp_file = "test_lib_roundtrip.xyz";
        let table = Table::new()
            .with_column("x", vec![1.0, 4.0])
            .unwrap()
            .with_column("y", vec![2.0, 5.0])
            .unwrap()
            .with_column("z", vec![3.0, 6.0])
            .unwrap();
        write_table(&table, temp_file).unwrap();
        let content = fs::read_to_string(temp_file).unwrap();
        assert!(content.contains("1 2 3"));

        let back = read_table(temp_file).unwrap();
        assert_eq!(back, table);
        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_unknown_extension_rejected() {
        assert!(read_table("cloud.ply").is_err());
    }
}
