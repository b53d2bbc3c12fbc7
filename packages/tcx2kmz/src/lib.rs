//! tcx2kmz - Convert Training Center (TCX) activity files to KML tracks.
//!
//! Parsing is declarative: a tree of dispatch tables describes which
//! elements become objects, which become scalar fields, and which are
//! skipped. A streaming driver walks the document's events once and keeps a
//! handler stack and a construction stack in step.
//!
//! # Example
//!
//! ```
//! use tcx2kmz::parse_tcx;
//!
//! let xml = r#"<TrainingCenterDatabase><Activities>
//!     <Activity Sport="Running"><Lap StartTime="2009-09-13T10:00:00Z">
//!         <Calories>120</Calories>
//!     </Lap></Activity>
//! </Activities></TrainingCenterDatabase>"#;
//!
//! let database = parse_tcx(xml).unwrap();
//! assert_eq!(database.activities[0].laps[0].calories, Some(120));
//! ```
//!
//! # Architecture
//!
//! - [`builder`]: Driver, handler trait, dispatch tables and stacks
//! - [`convert`]: Text-to-value conversion functions
//! - [`xml`]: Event source over parsed XML documents
//! - [`tcx`]: TCX domain types and schema
//! - [`kml`]: KML element tree and track rendering
//! - [`yaml`]: YAML dump of parsed documents
//! - [`output`]: Atomic file output
//! - [`config`]: Configuration constants and validation
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod builder;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod kml;
pub mod output;
pub mod tcx;
pub mod xml;
pub mod yaml;

// Re-export commonly used items
pub use error::{BuildError, Result};
pub use tcx::{parse_tcx, parse_tcx_file, TrainingCenterDatabase};
