//! Dataset directory preparation.

use std::io;
use std::path::{Path, PathBuf};

/// Ensure the category directory exists under the dataset root and return
/// its path. Idempotent; an existing directory and its contents are left
/// untouched.
pub fn prepare_category_dir(dataset_dir: &Path, category: &str) -> io::Result<PathBuf> {
    let dir = dataset_dir.join(category);
    if !dir.is_dir() {
        log::debug!("Creating category directory {}", dir.display());
    }
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
