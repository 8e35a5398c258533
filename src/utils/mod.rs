mod files;
mod helpers;

pub use files::{
    ACCEPTED_EXTENSIONS, DEFAULT_MAX_FILE_SIZE, check_file_size, validate_spreadsheet_path,
};
pub use helpers::{format_file_size, index_to_col_name};
