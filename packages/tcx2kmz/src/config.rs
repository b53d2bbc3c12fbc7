//! Configuration constants and validation functions.

use std::io;
use std::path::Path;

use clap::ValueEnum;

use crate::error::{BuildError, Result};

/// Top-level element of a TCX document.
pub const TCX_ROOT_ELEMENT: &str = "TrainingCenterDatabase";

/// Namespace of the core KML elements.
pub const KML_NAMESPACE: &str = "http://earth.google.com/kml/2.2";

/// Namespace of Google's `gx:` extension elements.
pub const GX_NAMESPACE: &str = "http://www.google.com/kml/ext/2.2";

/// Timestamp format used in KML `<when>`, `<begin>` and `<end>`.
pub const KML_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Default indentation for pretty-printed KML.
pub const DEFAULT_INDENT: &str = "\t";

/// Path argument that means standard input or output.
pub const STDIO_PATH: &str = "-";

/// Output formats supported by the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Keyhole Markup Language track.
    #[default]
    Kml,
    /// YAML dump of the parsed activity tree.
    Yaml,
}

impl OutputFormat {
    /// Conventional file extension for the format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Kml => "kml",
            Self::Yaml => "yaml",
        }
    }
}

/// Check whether a path argument refers to standard input/output.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use tcx2kmz::config::is_stdio;
///
/// assert!(is_stdio(Path::new("-")));
/// assert!(!is_stdio(Path::new("run.tcx")));
/// ```
#[must_use]
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Validate that an input path exists and is a file.
///
/// `-` (standard input) is always accepted.
///
/// # Errors
/// `Io` with `NotFound` or `InvalidInput`.
pub fn validate_input_path(path: &Path) -> Result<()> {
    if is_stdio(path) {
        return Ok(());
    }
    if !path.exists() {
        return Err(BuildError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Input file does not exist: {}", path.display()),
        )));
    }
    if !path.is_file() {
        return Err(BuildError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Input path is not a file: {}", path.display()),
        )));
    }
    Ok(())
}
