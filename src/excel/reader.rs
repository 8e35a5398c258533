use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;

use crate::error::InputError;
use crate::excel::{Cell, Grid, Row};

/// Read the first worksheet of a spreadsheet into a grid anchored at A1.
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    read_grid_with_sheet(path).map(|(_, grid)| grid)
}

/// Like [`read_grid`], also returning the name of the worksheet that was read.
pub fn read_grid_with_sheet<P: AsRef<Path>>(path: P) -> Result<(String, Grid)> {
    let path = path.as_ref();

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    if extension.as_deref() == Some("csv") {
        let grid = read_csv_grid(path)?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Sheet1")
            .to_string();
        return Ok((name, grid));
    }

    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Unable to parse Excel file: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| InputError::NoWorksheet(path.to_path_buf()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Unable to read worksheet: {}", sheet_name))?;

    Ok((sheet_name, grid_from_range(&range)))
}

// Calamine trims the range to the used area; pad it back out so column
// indices line up with the sheet's own lettering.
fn grid_from_range(range: &Range<Data>) -> Grid {
    let Some((start_row, start_col)) = range.start() else {
        return Grid::new();
    };

    let mut grid: Grid = Vec::with_capacity(start_row as usize + range.height());
    grid.resize_with(start_row as usize, Row::new);

    for row in range.rows() {
        let mut cells: Row = Vec::with_capacity(start_col as usize + row.len());
        cells.resize(start_col as usize, Cell::Empty);
        cells.extend(row.iter().map(Cell::from));
        grid.push(cells);
    }

    grid
}

fn read_csv_grid(path: &Path) -> Result<Grid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Unable to open CSV file: {}", path.display()))?;

    let mut grid = Grid::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("Malformed CSV record at line {}", row_idx + 1))?;
        grid.push(record.iter().map(parse_csv_field).collect());
    }

    Ok(grid)
}

fn parse_csv_field(field: &str) -> Cell {
    if field.is_empty() {
        return Cell::Empty;
    }

    let trimmed = field.trim();

    // Keep identifiers such as "007" as text
    if trimmed.starts_with('0')
        && trimmed.len() > 1
        && trimmed.chars().nth(1).is_some_and(|c| c.is_ascii_digit())
    {
        return Cell::text(field);
    }

    match trimmed.parse::<f64>() {
        Ok(n) if !trimmed.is_empty() && n.is_finite() => Cell::Number(n),
        _ => Cell::text(field),
    }
}
