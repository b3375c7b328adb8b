//! Report file output

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::TreeError;

/// Write `contents` to `path` as UTF-8, replacing any existing file.
/// Missing parent directories are created.
pub fn write_report(path: &Path, contents: &str) -> Result<(), TreeError> {
    let write_err = |source: std::io::Error| TreeError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)?;

    info!(path = %path.display(), bytes = contents.len(), "wrote report");
    Ok(())
}
