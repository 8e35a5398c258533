use crate::config::ExtractorConfig;
use crate::excel::Cell;
use crate::extractor::RecordMatch;

/// Find the first early column whose text carries every classifier keyword,
/// provided something is filled in to its right.
pub fn classify(row: &[Cell], config: &ExtractorConfig) -> Option<RecordMatch> {
    let end = row.len().min(config.classifier_end_column);

    (config.classifier_first_column..end).find_map(|column| {
        let text = row[column].as_text()?;

        let labelled = config
            .classifier_keywords
            .iter()
            .all(|keyword| text.contains(keyword.as_str()));

        // A label with nothing after it is a stray header fragment
        if labelled && has_data_after(row, column) {
            Some(RecordMatch {
                description: text.trim().to_string(),
                column,
            })
        } else {
            None
        }
    })
}

fn has_data_after(row: &[Cell], column: usize) -> bool {
    row.iter().skip(column + 1).any(Cell::is_present)
}
