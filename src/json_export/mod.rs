mod exporters;

pub use exporters::{export_json, serialize_to_json};
