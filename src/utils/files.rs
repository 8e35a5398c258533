use std::path::Path;

use crate::error::InputError;
use crate::utils::format_file_size;

pub const ACCEPTED_EXTENSIONS: [&str; 5] = ["xlsx", "xls", "xlsm", "ods", "csv"];

/// Uploads above 10 MiB are refused.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

pub fn validate_spreadsheet_path(path: &Path) -> Result<(), InputError> {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()));

    if accepted {
        Ok(())
    } else {
        Err(InputError::UnsupportedFormat(path.to_path_buf()))
    }
}

pub fn check_file_size(size: u64, limit: u64) -> Result<(), InputError> {
    if size > limit {
        return Err(InputError::FileTooLarge {
            size: format_file_size(size),
            limit: format_file_size(limit),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_spreadsheet_extensions() {
        for name in ["a.xlsx", "b.XLS", "c.csv", "d.Xlsm", "e.ods"] {
            assert!(validate_spreadsheet_path(Path::new(name)).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_other_files() {
        for name in ["notes.txt", "archive.xlsx.zip", "no_extension"] {
            assert!(matches!(
                validate_spreadsheet_path(Path::new(name)),
                Err(InputError::UnsupportedFormat(_))
            ));
        }
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert!(check_file_size(DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_FILE_SIZE).is_ok());

        let err = check_file_size(DEFAULT_MAX_FILE_SIZE + 1, DEFAULT_MAX_FILE_SIZE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "File size 10 MB exceeds the limit of 10 MB"
        );
    }
}
