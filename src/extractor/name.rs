use crate::config::ExtractorConfig;
use crate::excel::Cell;
use crate::extractor::patterns::{
    ALL_DIGITS, DAY_MONTH_YEAR, FIRST_LAST, ISO_DATE, LAST_COMMA_FIRST, NameRules, UPPER_PAIR,
};
use crate::extractor::{NameMatch, NameSource};

/// How a name is looked for. Strategies are tried in order and the first hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStrategy {
    Column(usize),
    Scan,
}

#[derive(Debug, Clone)]
pub struct NameResolver {
    rules: NameRules,
    strategies: Vec<NameStrategy>,
    late_column_threshold: usize,
}

impl NameResolver {
    pub fn new(config: &ExtractorConfig) -> Self {
        let rules = NameRules::new(config);
        let strategies = config
            .preferred_name_columns
            .iter()
            .copied()
            .map(NameStrategy::Column)
            .chain(std::iter::once(NameStrategy::Scan))
            .collect();

        Self {
            rules,
            strategies,
            late_column_threshold: config.late_column_threshold,
        }
    }

    pub fn strategies(&self) -> &[NameStrategy] {
        &self.strategies
    }

    /// The full name for a qualifying row, or an empty string.
    pub fn resolve_name(&self, row: &[Cell]) -> String {
        self.find_name(row).map(|m| m.value).unwrap_or_default()
    }

    pub fn find_name(&self, row: &[Cell]) -> Option<NameMatch> {
        self.strategies
            .iter()
            .find_map(|strategy| self.apply(*strategy, row))
    }

    pub fn apply(&self, strategy: NameStrategy, row: &[Cell]) -> Option<NameMatch> {
        match strategy {
            NameStrategy::Column(column) => self.from_column(row, column),
            NameStrategy::Scan => self.from_scan(row),
        }
    }

    fn from_column(&self, row: &[Cell], column: usize) -> Option<NameMatch> {
        let value = row.get(column)?.trimmed_text()?;

        if self.rules.is_valid_name(value) && !DAY_MONTH_YEAR.is_match(value) {
            Some(NameMatch {
                value: value.to_string(),
                column,
                source: NameSource::PreferredColumn,
            })
        } else {
            None
        }
    }

    fn from_scan(&self, row: &[Cell]) -> Option<NameMatch> {
        let candidates: Vec<(usize, &str)> = self
            .candidates(row)
            .into_iter()
            .filter(|(_, value)| {
                !DAY_MONTH_YEAR.is_match(value)
                    && !ISO_DATE.is_match(value)
                    && value.chars().count() > 3
                    && !ALL_DIGITS.is_match(value)
            })
            .collect();

        let shaped = candidates
            .iter()
            .find(|(column, value)| self.looks_like_name(*column, value));

        match shaped {
            Some((column, value)) => Some(NameMatch {
                value: value.to_string(),
                column: *column,
                source: NameSource::NameShape,
            }),
            None => candidates.first().map(|(column, value)| NameMatch {
                value: value.to_string(),
                column: *column,
                source: NameSource::FirstCandidate,
            }),
        }
    }

    /// Every text cell in the row that passes the name rules, in column order.
    pub fn candidates<'r>(&self, row: &'r [Cell]) -> Vec<(usize, &'r str)> {
        row.iter()
            .enumerate()
            .filter_map(|(column, cell)| Some((column, cell.trimmed_text()?)))
            .filter(|(_, value)| self.rules.is_valid_name(value))
            .collect()
    }

    fn looks_like_name(&self, column: usize, value: &str) -> bool {
        FIRST_LAST.is_match(value)
            || LAST_COMMA_FIRST.is_match(value)
            || UPPER_PAIR.is_match(value)
            || (value.contains(' ')
                && value.chars().count() > 5
                && column >= self.late_column_threshold)
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new(&ExtractorConfig::default())
    }
}

/// First name from "Last, First", "First Last" or "First Middle Last".
///
/// With a comma, the text between the first and second comma is returned,
/// even when that is empty ("Smith," has no first name).
#[must_use]
pub fn extract_first_name(full_name: &str) -> String {
    let trimmed = full_name.trim();

    if let Some((_, after)) = trimmed.split_once(',') {
        after.split(',').next().unwrap_or_default().trim().to_string()
    } else {
        trimmed
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string()
    }
}
