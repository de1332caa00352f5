// file: src/models/record.rs
// description: one csv row as an ordered list of string fields
// reference: internal data structures

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    line: u64,
    fields: Vec<String>,
}

impl Record {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    pub fn from_csv(record: &csv::StringRecord) -> Self {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        Self {
            line,
            fields: record.iter().map(str::to_string).collect(),
        }
    }

    /// 1-based line number in the input file, 0 when unknown.
    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// True when every one of the first `width` fields is empty or whitespace.
    pub fn is_blank_prefix(&self, width: usize) -> bool {
        self.fields
            .iter()
            .take(width)
            .all(|field| field.trim().is_empty())
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.fields.push(value.into());
    }
}

/// A data row that was skipped because it has no name field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedRow {
    pub line: u64,
    pub fields: usize,
    pub required: usize,
}

impl std::fmt::Display for MalformedRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {} has {} fields, expected at least {}",
            self.line, self.fields, self.required
        )
    }
}
