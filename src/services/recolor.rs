//! Recoloring engine: applies a [`ColorReplacementMap`] to every text file of
//! the generated tree.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, ColorReplacementMap, is_excluded, is_recolorable};

/// Walk the destination tree and retint every recolorable file.
///
/// Uses the same exclusion set as materialization, visits only files with a
/// known text extension, and writes a file back only when its content
/// actually changed. Returns the number of rewritten files; an identity map
/// touches zero files without walking.
pub fn recolor_tree(root: &Path, map: &ColorReplacementMap) -> Result<usize, AppError> {
    if map.is_identity() {
        return Ok(0);
    }
    walk(root, map)
}

fn walk(dir: &Path, map: &ColorReplacementMap) -> Result<usize, AppError> {
    let mut rewritten = 0;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if is_excluded(&entry.file_name()) {
            continue;
        }

        let path = entry.path();
        if entry.file_type()?.is_dir() {
            rewritten += walk(&path, map)?;
        } else if is_recolorable(&path) {
            let content = fs::read_to_string(&path)?;
            let replaced = map.apply(&content);
            if replaced != content {
                fs::write(&path, replaced)?;
                rewritten += 1;
            }
        }
    }

    Ok(rewritten)
}
