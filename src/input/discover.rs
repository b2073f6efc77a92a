use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::{LoadError, SubtitleFormat};

/// Collect subtitle files under `root`.
///
/// A root that is itself a file is returned on its own (if it looks like a
/// subtitle). With `recurse` off only the direct children of `root` are
/// visited. Entries are visited in file-name order; unreadable entries are
/// logged and skipped.
pub fn discover(root: &Path, recurse: bool) -> Result<Vec<PathBuf>, LoadError> {
    if !root.exists() {
        return Err(LoadError::FileNotFound(root.to_path_buf()));
    }

    let max_depth = if recurse { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if SubtitleFormat::from_path(entry.path()).is_some() {
            files.push(entry.into_path());
        } else {
            debug!("Not a subtitle file: {}", entry.path().display());
        }
    }

    Ok(files)
}
