use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::constants::{IGNORED_DIR, SCAN_EXTENSIONS};

/// Enumerates candidate source files under `root` in discovery order.
///
/// The walk is a plain recursive traversal: hidden files are visited and
/// gitignore rules are not consulted. A subtree is pruned as soon as the
/// traversed path contains [`IGNORED_DIR`] anywhere in it (substring match,
/// not exact-segment match).
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    debug!("Walking directory tree from root: {}", root.display());
    let mut files: Vec<PathBuf> = Vec::new();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .filter_entry(|entry| !entry.path().to_string_lossy().contains(IGNORED_DIR))
        .build();

    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        if let Some(ext) = p.extension().and_then(|e| e.to_str())
            && SCAN_EXTENSIONS.contains(&ext)
        {
            trace!("Found candidate file: {}", p.display());
            files.push(p.to_path_buf());
        }
    }

    debug!("Collected {} candidate files", files.len());
    Ok(files)
}
