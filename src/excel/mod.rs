mod cell;
mod reader;
mod writer;

pub use cell::{Cell, Grid, Row};
pub use reader::{read_grid, read_grid_with_sheet};
pub use writer::{OUTPUT_HEADERS, OUTPUT_SHEET_NAME, default_output_name, write_records};
