//! CSV dataset loading with full input validation.
//!
//! The dashboard scores whatever tabular file the user supplies, so the
//! loader checks everything up front: every row must match the header
//! width and every cell must be a finite number. Row order in the file
//! is the row order everywhere downstream, including the report
//! selector.

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, instrument};

/// Errors from reading or validating a dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file does not exist or is unreadable.
    #[error("failed to open dataset {path}: {source}")]
    Open {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The CSV parser encountered a malformed record.
    #[error("CSV parse error at byte offset {offset}")]
    Csv {
        /// Byte offset where the error occurred.
        offset: u64,
        /// Underlying CSV error.
        source: csv::Error,
    },
    /// The file has a header but zero data rows.
    #[error("dataset has a header but no data rows")]
    Empty,
    /// A data row has a different number of columns than the header.
    #[error("row {row_index} has {got} columns, expected {expected}")]
    RaggedRow {
        /// Zero-based row index, excluding the header.
        row_index: usize,
        /// Column count from the header.
        expected: usize,
        /// Column count of the offending row.
        got: usize,
    },
    /// A cell is NaN, infinite, or not a number at all.
    #[error("row {row_index}, column \"{column}\": value \"{raw}\" is not a finite number")]
    BadValue {
        /// Zero-based row index, excluding the header.
        row_index: usize,
        /// Header name of the offending column.
        column: String,
        /// The raw cell text that failed to parse.
        raw: String,
    },
}

/// In-memory tabular dataset: header-defined columns, row-major cells.
///
/// Immutable once loaded; the scorer and summarizer only borrow it.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    cells: Vec<f32>,
}

impl Dataset {
    /// Read and validate a CSV file.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn from_csv_path(path: &Path) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path).map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;
        info!(
            rows = dataset.row_count(),
            columns = dataset.columns.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Parse and validate an in-memory CSV document.
    pub fn from_csv_str(body: &str) -> Result<Self, DatasetError> {
        Self::from_reader(body.as_bytes())
    }

    fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        // flexible(true) lets rows with the wrong width reach our own
        // RaggedRow check instead of dying as a low-level CSV error.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let header = rdr.headers().map_err(|e| DatasetError::Csv {
            offset: e.position().map_or(0, |p| p.byte()),
            source: e,
        })?;
        let columns: Vec<String> = header.iter().map(|name| name.trim().to_string()).collect();
        let expected = columns.len();
        debug!(expected, "read CSV header");

        let mut cells = Vec::new();
        let mut row_index = 0usize;
        for result in rdr.records() {
            let record = result.map_err(|e| DatasetError::Csv {
                offset: e.position().map_or(0, |p| p.byte()),
                source: e,
            })?;
            if record.len() != expected {
                return Err(DatasetError::RaggedRow {
                    row_index,
                    expected,
                    got: record.len(),
                });
            }
            for (col_index, raw) in record.iter().enumerate() {
                let value: f32 = raw.trim().parse().map_err(|_| DatasetError::BadValue {
                    row_index,
                    column: columns[col_index].clone(),
                    raw: raw.to_string(),
                })?;
                if !value.is_finite() {
                    return Err(DatasetError::BadValue {
                        row_index,
                        column: columns[col_index].clone(),
                        raw: raw.to_string(),
                    });
                }
                cells.push(value);
            }
            row_index += 1;
        }

        if row_index == 0 {
            return Err(DatasetError::Empty);
        }
        Ok(Self { columns, cells })
    }

    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Index of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        if self.columns.is_empty() {
            0
        } else {
            self.cells.len() / self.columns.len()
        }
    }

    /// Borrow one row of cells, in header column order.
    pub fn row(&self, index: usize) -> &[f32] {
        let width = self.columns.len();
        &self.cells[index * width..(index + 1) * width]
    }

    /// Single cell value by row and column index.
    pub fn value(&self, row: usize, column: usize) -> f32 {
        self.cells[row * self.columns.len() + column]
    }
}
