//! Local file loading.

use std::fs;
use std::path::Path;

use plainview_types::error::{PlainviewError, Result};

/// Read a whole file as UTF-8 text.
///
/// Fails with [`PlainviewError::NotFound`] unless `path` is an existing
/// regular file. There is no size limit.
pub fn read_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(PlainviewError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
