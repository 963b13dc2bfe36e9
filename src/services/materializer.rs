//! Template tree materialization: the depth-first copy that instantiates a
//! fresh site directory from the shared template.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, is_excluded};

/// Copy the template tree into a destination that must not exist yet.
///
/// The existence check is the precondition that keeps a run from silently
/// merging into or overwriting a previous generation. Entries named in the
/// fixed exclusion set are skipped with their whole subtree.
pub fn materialize(template: &Path, dest: &Path) -> Result<(), AppError> {
    if dest.exists() {
        return Err(AppError::DestinationExists(dest.display().to_string()));
    }
    copy_tree(template, dest)
}

fn copy_tree(src: &Path, dest: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dest)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        if is_excluded(&entry.file_name()) {
            continue;
        }

        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_tree(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path)?;
        }
    }

    Ok(())
}
