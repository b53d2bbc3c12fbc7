//! YAML dump of parsed activity files.

mod writer;

pub use writer::generate_yaml;
