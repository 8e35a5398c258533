pub mod config;
pub mod error;
pub mod excel;
pub mod extractor;
pub mod json_export;
pub mod utils;
