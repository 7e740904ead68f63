//! Delimited text tables (CSV/XYZ)
//!
//! Reads whitespace, comma, tab or semicolon separated numeric files into a
//! [`Table`]:
//! - Auto-detection of the delimiter from the first line
//! - Header detection (a first line with any non-numeric field is a header)
//! - Headerless files get columns `x`, `y`, `z`, then `c3`, `c4`, ...
//! - Blank lines are skipped; short rows and non-numeric fields are errors

use crate::error::{IoError, Result};
use chartxyz_core::{Column, Table};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Supported delimiters for CSV/XYZ files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Space,
    Tab,
    Semicolon,
}

impl Delimiter {
    /// Get the character representation of the delimiter
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Space => ' ',
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
        }
    }

    /// Detect delimiter from a line of text. Comma, tab and semicolon win
    /// over spaces, so `1, 2, 3` is comma separated; spaces are the
    /// delimiter only when none of the others appear.
    pub fn detect_from_line(line: &str) -> Option<Self> {
        let explicit = [
            (line.matches(',').count(), Delimiter::Comma),
            (line.matches('\t').count(), Delimiter::Tab),
            (line.matches(';').count(), Delimiter::Semicolon),
        ];

        // `max_by_key` keeps the last of equal maxima; reverse so ties go to
        // the earlier entry
        let best = explicit
            .iter()
            .rev()
            .max_by_key(|(count, _)| *count)
            .filter(|(count, _)| *count > 0)
            .map(|(_, delimiter)| *delimiter);

        best.or_else(|| line.trim().contains(' ').then_some(Delimiter::Space))
    }

    /// Split a line into trimmed fields. Runs of spaces count as one separator.
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Delimiter::Space => line.split_whitespace().collect(),
            other => line.split(other.as_char()).map(str::trim).collect(),
        }
    }
}

/// Layout of a delimited table file
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    pub column_names: Vec<String>,
    pub has_header: bool,
    pub delimiter: Delimiter,
}

impl TableSchema {
    /// Infer the schema from the first non-blank line
    pub fn detect_from_line(first_line: &str) -> Result<Self> {
        let delimiter = Delimiter::detect_from_line(first_line).ok_or_else(|| IoError::Parse {
            line: 1,
            message: "could not detect a delimiter".to_string(),
        })?;
        let fields = delimiter.split(first_line);
        let has_header = fields.iter().any(|f| f.parse::<f64>().is_err());

        let column_names = if has_header {
            fields.iter().map(|f| f.to_string()).collect()
        } else {
            default_column_names(fields.len())
        };

        Ok(Self {
            column_names,
            has_header,
            delimiter,
        })
    }

    /// Auto-detect schema from file content
    pub fn detect_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = open(path.as_ref())?;
        let reader = BufReader::new(file);
        for line in reader.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                return Self::detect_from_line(&line);
            }
        }
        Err(IoError::Empty(path.as_ref().display().to_string()))
    }
}

/// `x`, `y`, `z`, `c3`, `c4`, ...
fn default_column_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i {
            0 => "x".to_string(),
            1 => "y".to_string(),
            2 => "z".to_string(),
            n => format!("c{n}"),
        })
        .collect()
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => IoError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => IoError::Io(e),
    })
}

/// CSV/XYZ table reader
pub struct TableCsvReader;

impl TableCsvReader {
    /// Read a table from a file with auto-detection
    pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
        let file = open(path.as_ref())?;
        let table = Self::read_from(BufReader::new(file))?;
        log::debug!(
            target: "chartxyz",
            "read {} rows x {} columns from {}",
            table.number_of_rows(),
            table.number_of_columns(),
            path.as_ref().display()
        );
        Ok(table)
    }

    /// Read a table from any buffered source with auto-detection
    pub fn read_from<R: BufRead>(reader: R) -> Result<Table> {
        let mut schema: Option<TableSchema> = None;
        let mut values: Vec<Vec<f64>> = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            if schema.is_none() {
                let detected = TableSchema::detect_from_line(&line)?;
                values = vec![Vec::new(); detected.column_names.len()];
                let is_header = detected.has_header;
                schema = Some(detected);
                if is_header {
                    continue;
                }
            }

            if let Some(schema) = &schema {
                Self::parse_row(&line, line_number, schema, &mut values)?;
            }
        }

        let schema = schema.ok_or_else(|| IoError::Empty("no data lines".to_string()))?;
        let mut table = Table::new();
        for (name, column) in schema.column_names.into_iter().zip(values) {
            table.add_column(Column::new(name, column))?;
        }
        Ok(table)
    }

    /// Read a table from an in-memory string
    pub fn read_from_str(content: &str) -> Result<Table> {
        Self::read_from(content.as_bytes())
    }

    fn parse_row(
        line: &str,
        line_number: usize,
        schema: &TableSchema,
        values: &mut [Vec<f64>],
    ) -> Result<()> {
        let fields = schema.delimiter.split(line);
        if fields.len() < schema.column_names.len() {
            return Err(IoError::Parse {
                line: line_number,
                message: format!(
                    "expected {} fields, found {}",
                    schema.column_names.len(),
                    fields.len()
                ),
            });
        }

        for ((field, name), column) in fields.iter().zip(&schema.column_names).zip(values.iter_mut()) {
            let value = field.parse::<f64>().map_err(|_| IoError::Parse {
                line: line_number,
                message: format!("invalid value '{field}' in column '{name}'"),
            })?;
            column.push(value);
        }
        Ok(())
    }
}

/// CSV/XYZ table writer
pub struct TableCsvWriter;

impl TableCsvWriter {
    /// Write a table with a header line
    pub fn write_table<P: AsRef<Path>>(table: &Table, path: P, delimiter: Delimiter) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(table, &mut writer, delimiter)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_to<W: Write>(table: &Table, writer: &mut W, delimiter: Delimiter) -> Result<()> {
        let sep = delimiter.as_char().to_string();
        let header: Vec<&str> = table.column_names().collect();
        writeln!(writer, "{}", header.join(&sep))?;

        for row in 0..table.number_of_rows() {
            let line: Vec<String> = table
                .columns()
                .iter()
                .map(|c| c.values[row].to_string())
                .collect();
            writeln!(writer, "{}", line.join(&sep))?;
        }
        Ok(())
    }
}
