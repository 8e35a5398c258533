use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::InputError;

/// Column positions, labels and exclusion lists used by the extractor.
///
/// The defaults describe the requirement-list template the tool was written
/// for. Any field left out of a config file keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Exact (trimmed, case-sensitive) labels that mark a section header.
    pub header_labels: Vec<String>,
    pub header_label_column: usize,
    /// A labelled row with more populated text cells than this is data, not a header.
    pub header_max_non_empty: usize,

    /// First column scanned for the Welcome Letter label.
    pub classifier_first_column: usize,
    /// Exclusive upper bound of the label scan.
    pub classifier_end_column: usize,
    /// Every keyword must be contained in the label cell.
    pub classifier_keywords: Vec<String>,

    /// Columns tried in order before falling back to a scan of the whole row.
    pub preferred_name_columns: Vec<usize>,
    /// Scan candidates at or beyond this column may win on "has a space" alone.
    pub late_column_threshold: usize,

    pub excluded_literals: Vec<String>,
    pub excluded_substrings: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            header_labels: strings(&["WELCOME BACK LETTER", "WELCOME LETTER"]),
            header_label_column: 1,
            header_max_non_empty: 3,
            classifier_first_column: 1,
            classifier_end_column: 5,
            classifier_keywords: strings(&["WELCOME", "LETTER"]),
            preferred_name_columns: vec![7, 8, 9],
            late_column_threshold: 7,
            excluded_literals: strings(&[
                "Outstanding",
                "Completed",
                "0",
                "0.00",
                // Staff usernames that show up in the assignee columns
                "ghuang",
                "irasanen",
                "kdaengrungrot",
                "sjbailey",
            ]),
            excluded_substrings: strings(&["WELCOME", "LETTER", "REQUIREMENT"]),
        }
    }
}

impl ExtractorConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.classifier_keywords.iter().all(|k| k.is_empty()) {
            return Err(InputError::InvalidConfig(
                "classifier_keywords must contain at least one non-empty keyword".to_string(),
            ));
        }

        if self.classifier_first_column >= self.classifier_end_column {
            return Err(InputError::InvalidConfig(format!(
                "classifier column range {}..{} is empty",
                self.classifier_first_column, self.classifier_end_column
            )));
        }

        Ok(())
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_matches_template() {
        let config = ExtractorConfig::default();
        assert_eq!(config.preferred_name_columns, vec![7, 8, 9]);
        assert_eq!(config.header_label_column, 1);
        assert!(config.excluded_literals.contains(&"0.00".to_string()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "preferred_name_columns": [3, 4] }}"#).unwrap();

        let config = ExtractorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.preferred_name_columns, vec![3, 4]);
        assert_eq!(config.classifier_end_column, 5);
        assert_eq!(config.header_labels.len(), 2);
    }

    #[test]
    fn rejects_empty_scan_range() {
        let config = ExtractorConfig {
            classifier_first_column: 4,
            classifier_end_column: 4,
            ..ExtractorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(InputError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_missing_keywords() {
        let config = ExtractorConfig {
            classifier_keywords: Vec::new(),
            ..ExtractorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(ExtractorConfig::from_file(file.path()).is_err());
    }
}
