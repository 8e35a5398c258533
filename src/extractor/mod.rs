mod classifier;
mod header;
mod name;
mod patterns;
mod types;

pub use classifier::classify;
pub use header::is_header_row;
pub use name::{NameResolver, NameStrategy, extract_first_name};
pub use patterns::{Exclusion, NameRules, is_valid_person_name};
pub use types::{NameMatch, NameSource, ProcessResult, RecordMatch, WelcomeLetterRecord};

use log::debug;

use crate::config::ExtractorConfig;
use crate::excel::Cell;
use crate::utils::index_to_col_name;

/// Runs header detection, classification and name resolution over a grid.
///
/// Holds no per-run state; one extractor can process any number of grids.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
    resolver: NameResolver,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        let resolver = NameResolver::new(&config);
        Self { config, resolver }
    }

    pub fn is_header_row(&self, row: &[Cell]) -> bool {
        is_header_row(row, &self.config)
    }

    pub fn classify(&self, row: &[Cell]) -> Option<RecordMatch> {
        classify(row, &self.config)
    }

    pub fn resolve_name(&self, row: &[Cell]) -> String {
        self.resolver.resolve_name(row)
    }

    /// The record for a single row, if it is a Welcome Letter row with a name.
    pub fn extract_row(&self, row_idx: usize, row: &[Cell]) -> Option<WelcomeLetterRecord> {
        if self.is_header_row(row) {
            debug!("Skipping header row {}: {:?}", row_idx + 1, preview(row, 5));
            return None;
        }

        let found = self.classify(row)?;
        debug!(
            "Found WELCOME LETTER row {} in column {}: {}",
            row_idx + 1,
            index_to_col_name(found.column),
            found.description
        );

        let Some(name) = self.resolver.find_name(row) else {
            debug!(
                "Row {} has WELCOME LETTER but no name: {:?}",
                row_idx + 1,
                preview(row, 10)
            );
            return None;
        };

        debug!(
            "Selected name from column {} ({:?}): {:?}",
            index_to_col_name(name.column),
            name.source,
            name.value
        );

        Some(WelcomeLetterRecord {
            first_name: extract_first_name(&name.value),
            full_name: name.value,
            description: found.description,
        })
    }

    pub fn process<R: AsRef<[Cell]>>(&self, grid: &[R]) -> ProcessResult {
        let total_rows = grid.len();
        debug!(
            "Starting processing: {} rows, first row width {}",
            total_rows,
            grid.first().map_or(0, |r| r.as_ref().len())
        );

        let records: Vec<WelcomeLetterRecord> = grid
            .iter()
            .enumerate()
            .filter_map(|(row_idx, row)| self.extract_row(row_idx, row.as_ref()))
            .collect();

        debug!(
            "Processing completed: {} rows, {} records",
            total_rows,
            records.len()
        );

        ProcessResult {
            processed_rows: records.len(),
            records,
            total_rows,
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

/// Extract Welcome Letter records using the default template.
pub fn process_welcome_letters<R: AsRef<[Cell]>>(grid: &[R]) -> ProcessResult {
    Extractor::default().process(grid)
}

fn preview(row: &[Cell], width: usize) -> Vec<String> {
    row.iter()
        .take(width)
        .map(|cell| match cell {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Empty => String::new(),
        })
        .collect()
}
