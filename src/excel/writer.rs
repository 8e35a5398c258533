use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook};
use std::path::Path;

use crate::extractor::WelcomeLetterRecord;

pub const OUTPUT_SHEET_NAME: &str = "Welcome Letters";
pub const OUTPUT_HEADERS: [&str; 3] = ["Full Name", "First Name", "Description"];

const COLUMN_WIDTHS: [f64; 3] = [28.0, 16.0, 48.0];

/// Write records to a single-sheet workbook with a header row.
pub fn write_records<P: AsRef<Path>>(records: &[WelcomeLetterRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = XlsxWorkbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet().set_name(OUTPUT_SHEET_NAME)?;

    for (col, (header, width)) in OUTPUT_HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, width)?;
        worksheet.write_string_with_format(0, col, *header, &header_format)?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = (idx + 1) as u32;
        worksheet.write_string(row, 0, &record.full_name)?;
        worksheet.write_string(row, 1, &record.first_name)?;
        worksheet.write_string(row, 2, &record.description)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to write workbook: {}", path.display()))?;

    Ok(())
}

/// `filtered_welcome_letters_<YYYYMMDDTHHMMSS>.xlsx`
#[must_use]
pub fn default_output_name(now: DateTime<Utc>) -> String {
    format!(
        "filtered_welcome_letters_{}.xlsx",
        now.format("%Y%m%dT%H%M%S")
    )
}
