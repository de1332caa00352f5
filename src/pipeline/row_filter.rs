// file: src/pipeline/row_filter.rs
// description: reads the input csv, validates the header and drops blank rows
// reference: https://docs.rs/csv

use crate::config::ColumnConfig;
use crate::error::{PipelineError, Result};
use crate::models::{MalformedRow, Record};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub name_index: usize,
    pub blank_check_width: usize,
    pub output_column: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            name_index: 5,
            blank_check_width: 7,
            output_column: "e-mail".to_string(),
        }
    }
}

impl From<&ColumnConfig> for ColumnMapping {
    fn from(config: &ColumnConfig) -> Self {
        Self {
            name_index: config.name_index,
            blank_check_width: config.blank_check_width,
            output_column: config.output_column.clone(),
        }
    }
}

impl ColumnMapping {
    pub fn required_columns(&self) -> usize {
        self.name_index + 1
    }

    pub fn validate_header(&self, header: &Record) -> Result<()> {
        if header.len() < self.required_columns() {
            return Err(PipelineError::MissingColumn {
                required: self.required_columns(),
                found: header.len(),
            });
        }
        Ok(())
    }
}

/// Header plus the rows that will be sent to the directory.
#[derive(Debug, Clone)]
pub struct FilteredInput {
    pub header: Record,
    pub rows: Vec<Record>,
    pub malformed: Vec<MalformedRow>,
    pub blank: usize,
}

#[derive(Debug, Clone, Default)]
pub struct RowFilter {
    mapping: ColumnMapping,
}

impl RowFilter {
    pub fn new(mapping: ColumnMapping) -> Self {
        Self { mapping }
    }

    pub fn read_path(&self, path: &Path) -> Result<FilteredInput> {
        let file = File::open(path).map_err(|e| PipelineError::file_operation(path, e))?;
        self.read_from(file, path)
    }

    pub fn read_from<R: Read>(&self, reader: R, source: &Path) -> Result<FilteredInput> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut records = reader.records();

        let mut header = match records.next() {
            Some(record) => Record::from_csv(&record?),
            None => {
                return Err(PipelineError::EmptyInput {
                    path: PathBuf::from(source),
                });
            }
        };
        self.mapping.validate_header(&header)?;
        header.push(self.mapping.output_column.as_str());

        let mut rows = Vec::new();
        let mut malformed = Vec::new();
        let mut blank = 0;

        for record in records {
            let row = Record::from_csv(&record?);

            if row.is_blank_prefix(self.mapping.blank_check_width) {
                debug!("Dropping blank row at line {}", row.line());
                blank += 1;
                continue;
            }

            if row.get(self.mapping.name_index).is_none() {
                let skipped = MalformedRow {
                    line: row.line(),
                    fields: row.len(),
                    required: self.mapping.required_columns(),
                };
                warn!("Skipping malformed row: {}", skipped);
                malformed.push(skipped);
                continue;
            }

            rows.push(row);
        }

        info!(
            "Read {} rows from {} ({} blank, {} malformed)",
            rows.len(),
            source.display(),
            blank,
            malformed.len()
        );

        Ok(FilteredInput {
            header,
            rows,
            malformed,
            blank,
        })
    }
}
