//! Recursive, top-down directory walk.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::ScanError;

/// Every non-directory entry under `root`.
///
/// Within a directory, files come first (sorted by name), then each
/// subdirectory is walked in name order. Symlinks to directories are listed
/// neither as files nor walked; dangling symlinks count as files.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut out = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .min_depth(1)
        .sort_by(files_then_dirs);

    for entry in walker {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: source.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.into_path();
        if path.is_symlink() && path.is_dir() {
            log::debug!("not following directory symlink {}", path.display());
            continue;
        }
        out.push(path);
    }
    Ok(out)
}

fn files_then_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
