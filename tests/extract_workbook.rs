//! End-to-end tests: build a workbook on disk, read it back, extract, export.

use calamine::{Data, Reader, open_workbook_auto};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

use welcome_letters::excel::{self, Cell, OUTPUT_HEADERS, OUTPUT_SHEET_NAME};
use welcome_letters::extractor::{Extractor, process_welcome_letters};

enum Value<'a> {
    Text(&'a str),
    Number(f64),
}

fn write_sheet(path: &Path, rows: &[(u32, Vec<(u16, Value)>)]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet().set_name("Requirements").unwrap();
    for (row, cells) in rows {
        for (col, value) in cells {
            match value {
                Value::Text(s) => worksheet.write_string(*row, *col, *s).unwrap(),
                Value::Number(n) => worksheet.write_number(*row, *col, *n).unwrap(),
            };
        }
    }
    workbook.save(path).unwrap();
}

fn requirement_list(dir: &Path) -> PathBuf {
    use Value::{Number, Text};

    let path = dir.join("Requirement List.xlsx");
    write_sheet(
        &path,
        &[
            (0, vec![(1, Text("WELCOME LETTER"))]),
            (
                1,
                vec![
                    (0, Number(1.0)),
                    (1, Text("Outstanding WELCOME LETTER req")),
                    (2, Text("12A-34")),
                    (7, Text("Jane Doe")),
                    (9, Text("15 Jun 2025")),
                ],
            ),
            (
                2,
                vec![
                    (0, Number(2.0)),
                    (1, Text("Outstanding WELCOME BACK LETTER req")),
                    (7, Text("Outstanding")),
                    (9, Text("Lee, Amy")),
                ],
            ),
            (
                3,
                vec![
                    (0, Number(3.0)),
                    (1, Text("Fire safety induction")),
                    (7, Text("Sam Smith")),
                ],
            ),
            (
                4,
                vec![
                    (0, Number(4.0)),
                    (2, Text("WELCOME LETTER")),
                    (5, Number(250.0)),
                    (7, Text("Completed")),
                    (8, Text("sjbailey")),
                ],
            ),
            (5, vec![(1, Text("WELCOME BACK LETTER"))]),
        ],
    );
    path
}

#[test]
fn extracts_records_from_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let path = requirement_list(dir.path());

    let (sheet, grid) = excel::read_grid_with_sheet(&path).unwrap();
    assert_eq!(sheet, "Requirements");
    assert_eq!(grid.len(), 6);
    assert_eq!(grid[1][0], Cell::Number(1.0));

    let result = process_welcome_letters(&grid);
    assert_eq!(result.total_rows, 6);
    assert_eq!(result.processed_rows, 2);
    assert_eq!(result.records.len(), result.processed_rows);

    assert_eq!(result.records[0].full_name, "Jane Doe");
    assert_eq!(result.records[0].first_name, "Jane");
    assert_eq!(
        result.records[0].description,
        "Outstanding WELCOME LETTER req"
    );

    assert_eq!(result.records[1].full_name, "Lee, Amy");
    assert_eq!(result.records[1].first_name, "Amy");
}

#[test]
fn leading_empty_columns_keep_their_positions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("offset.xlsx");
    // Nothing in column A or row 1, so the used range starts at B2
    write_sheet(
        &path,
        &[(
            1,
            vec![
                (1, Value::Text("WELCOME LETTER outstanding")),
                (7, Value::Text("Amy Lee")),
            ],
        )],
    );

    let grid = excel::read_grid(&path).unwrap();
    assert_eq!(grid.len(), 2);
    assert!(grid[0].iter().all(|c| *c == Cell::Empty));
    assert_eq!(grid[1][0], Cell::Empty);
    assert_eq!(grid[1][7], Cell::text("Amy Lee"));

    let result = Extractor::default().process(&grid);
    assert_eq!(result.records[0].full_name, "Amy Lee");
}

#[test]
fn exported_workbook_round_trips_through_calamine() {
    let dir = tempfile::tempdir().unwrap();
    let grid = excel::read_grid(requirement_list(dir.path())).unwrap();
    let result = process_welcome_letters(&grid);

    let out = dir.path().join("filtered.xlsx");
    excel::write_records(&result.records, &out).unwrap();

    let mut workbook = open_workbook_auto(&out).unwrap();
    assert_eq!(workbook.sheet_names(), vec![OUTPUT_SHEET_NAME.to_string()]);

    let range = workbook.worksheet_range(OUTPUT_SHEET_NAME).unwrap();
    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Data::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .collect();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], OUTPUT_HEADERS.map(String::from).to_vec());
    assert_eq!(rows[1], vec!["Jane Doe", "Jane", "Outstanding WELCOME LETTER req"]);
    assert_eq!(rows[2][0], "Lee, Amy");
    assert_eq!(rows[2][1], "Amy");
}

#[test]
fn csv_input_matches_workbook_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("requirements.csv");
    std::fs::write(
        &path,
        concat!(
            ",WELCOME LETTER,,,,,,,\n",
            "1,Outstanding WELCOME LETTER req,,,,,,Jane Doe,,15 Jun 2025\n",
            "2,Outstanding WELCOME BACK LETTER req,,,,,,Outstanding,,\"Lee, Amy\"\n",
        ),
    )
    .unwrap();

    let grid = excel::read_grid(&path).unwrap();
    let result = process_welcome_letters(&grid);
    assert_eq!(result.total_rows, 3);
    let names: Vec<&str> = result.records.iter().map(|r| r.first_name.as_str()).collect();
    assert_eq!(names, vec!["Jane", "Amy"]);
}
