//! Writing converted documents to files or standard output.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use crate::config::is_stdio;
use crate::error::Result;

/// Write `content` to `path` atomically.
///
/// Writes to a hidden temp file next to the target, syncs it to disk, then
/// renames it over the target so a crash never leaves a partial file.
pub fn save_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Output path has no file name: {}", path.display()),
        )
    })?;
    let temp_file = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    if let Err(e) = fs::rename(&temp_file, path) {
        let _ = fs::remove_file(&temp_file);
        return Err(e.into());
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote output file");
    Ok(())
}

/// Write `content` to `path`, or to standard output for `None` and `-`.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) if !is_stdio(path) => save_atomic(path, content),
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
