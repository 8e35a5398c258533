use serde::{Deserialize, Serialize};

/// One extracted Welcome Letter row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WelcomeLetterRecord {
    pub full_name: String,
    pub first_name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    pub records: Vec<WelcomeLetterRecord>,
    /// Every row of the input grid, headers and non-matching rows included.
    pub total_rows: usize,
    /// Always equal to `records.len()`.
    pub processed_rows: usize,
}

impl ProcessResult {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Where the label scan found a Welcome Letter cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMatch {
    /// Trimmed text of the label cell.
    pub description: String,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// One of the configured name columns.
    PreferredColumn,
    /// Whole-row scan matched a name-like shape.
    NameShape,
    /// Whole-row scan fell back to the first surviving candidate.
    FirstCandidate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    pub value: String,
    pub column: usize,
    pub source: NameSource,
}
