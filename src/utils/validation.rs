// file: src/utils/validation.rs
// description: path and url validation helpers
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            PipelineError::Validation(format!(
                "Input file {} does not exist: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(PipelineError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    /// Rejects an output path that would overwrite the input.
    pub fn validate_distinct_paths(input: &Path, output: &Path) -> Result<()> {
        let same = input == output
            || match (fs::canonicalize(input), fs::canonicalize(output)) {
                (Ok(a), Ok(b)) => a == b,
                _ => false,
            };

        if same {
            return Err(PipelineError::Validation(format!(
                "Output path must differ from input: {}",
                output.display()
            )));
        }

        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(PipelineError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_file_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("people.csv");
        fs::write(&file_path, "Name\n").unwrap();

        assert!(Validator::validate_file_path(&file_path).is_ok());
        assert!(Validator::validate_file_path(temp.path()).is_err());
        assert!(Validator::validate_file_path(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("people.csv");
        fs::write(&input, "Name\n").unwrap();
        let dotted = temp.path().join(".").join("people.csv");

        assert!(Validator::validate_distinct_paths(&input, &input).is_err());
        assert!(Validator::validate_distinct_paths(&input, &dotted).is_err());
        assert!(
            Validator::validate_distinct_paths(&input, &temp.path().join("out.csv")).is_ok()
        );
    }

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://example.com").is_ok());
        assert!(Validator::validate_url("http://example.com").is_ok());
        assert!(Validator::validate_url("example.com").is_err());
        assert!(Validator::validate_url("ftp://example.com").is_err());
    }
}
