use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::error::SubfreqError;

/// Resolve the report file path.
///
/// `base` must exist. A regular file stands for its parent directory; anything
/// else is used as the directory the report goes into.
pub fn resolve_destination(base: &Path, file_name: &str) -> Result<PathBuf, SubfreqError> {
    let absolute = std::path::absolute(base).map_err(|source| SubfreqError::OutputPath {
        path: base.to_path_buf(),
        source,
    })?;

    let metadata = fs::symlink_metadata(&absolute).map_err(|source| SubfreqError::OutputPath {
        path: absolute.clone(),
        source,
    })?;

    let dir = if metadata.is_file() {
        absolute
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| absolute.clone())
    } else {
        absolute
    };

    Ok(dir.join(file_name))
}

/// Write `content` to `path` without ever leaving a half-written report.
///
/// The text goes to a sibling temporary file that is synced and then renamed
/// over `path`. On failure the temporary file is removed and any previous
/// report is left untouched.
pub fn write_report(path: &Path, content: &str) -> Result<(), SubfreqError> {
    let tmp = temp_path(path);
    let write_error = |source| SubfreqError::Write {
        path: path.to_path_buf(),
        source,
    };

    let result = (|| -> std::io::Result<()> {
        let mut file = File::create(&tmp)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, path)
    })();

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(write_error(e));
    }

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_directory() {
        let dir = tempfile::tempdir().unwrap();
        let dest = resolve_destination(dir.path(), "freq.txt").unwrap();
        assert_eq!(dest.file_name().unwrap(), "freq.txt");
        assert_eq!(dest.parent().unwrap(), std::path::absolute(dir.path()).unwrap());
    }

    #[test]
    fn test_resolve_file_uses_parent() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("episode.srt");
        fs::write(&file, "").unwrap();

        let dest = resolve_destination(&file, "words.txt").unwrap();
        assert_eq!(dest, std::path::absolute(dir.path()).unwrap().join("words.txt"));
    }

    #[test]
    fn test_resolve_missing_path_fails() {
        let result = resolve_destination(Path::new("/nonexistent/out"), "freq.txt");
        assert!(matches!(result, Err(SubfreqError::OutputPath { .. })));
    }

    #[test]
    fn test_write_report_replaces_previous() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freq.txt");
        fs::write(&path, "old").unwrap();

        write_report(&path, "|猫|1|\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "|猫|1|\n");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_write_report_failure_keeps_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("freq.txt");

        let result = write_report(&path, "data");
        assert!(matches!(result, Err(SubfreqError::Write { .. })));
        assert!(!path.exists());
    }
}
