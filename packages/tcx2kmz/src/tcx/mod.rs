//! Training Center (TCX) activity files.
//!
//! [`parse_tcx`] runs the shared [`schema`] over a document's events and
//! returns the typed [`TrainingCenterDatabase`].

mod schema;
mod types;

use std::fs;
use std::path::Path;

use roxmltree::Document;

use crate::builder::{extract, run};
use crate::config::TCX_ROOT_ELEMENT;
use crate::error::Result;
use crate::xml::DocumentEvents;

pub use schema::{build_schema, schema};
pub use types::{Activity, Creator, Lap, TcxNode, Track, Trackpoint, TrainingCenterDatabase};

/// Parse TCX text into a [`TrainingCenterDatabase`].
///
/// # Errors
/// `XmlParse` for malformed XML, `Conversion` for a field whose text does not
/// fit its type, `MissingResult` if the root element is not
/// `TrainingCenterDatabase`.
pub fn parse_tcx(text: &str) -> Result<TrainingCenterDatabase> {
    let doc = Document::parse(text)?;
    let node = run(schema(), DocumentEvents::new(&doc))?;
    let database: TrainingCenterDatabase = extract(node, TCX_ROOT_ELEMENT)?;

    tracing::debug!(
        activities = database.activities.len(),
        laps = database.lap_count(),
        trackpoints = database.trackpoint_count(),
        "Parsed TCX document"
    );
    Ok(database)
}

/// Read and parse a TCX file.
pub fn parse_tcx_file(path: &Path) -> Result<TrainingCenterDatabase> {
    let text = fs::read_to_string(path)?;
    parse_tcx(&text)
}
