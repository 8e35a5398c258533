use crate::config::ExtractorConfig;
use crate::excel::Cell;

/// A section header: the label column holds exactly one of the header labels
/// and the row is otherwise sparse.
pub fn is_header_row(row: &[Cell], config: &ExtractorConfig) -> bool {
    let Some(label) = row
        .get(config.header_label_column)
        .and_then(Cell::as_text)
        .map(str::trim)
    else {
        return false;
    };

    if !config.header_labels.iter().any(|h| h == label) {
        return false;
    }

    let non_empty = row.iter().filter(|c| c.trimmed_text().is_some()).count();
    non_empty <= config.header_max_non_empty
}
