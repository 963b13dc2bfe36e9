//! Constant tables governing which parts of a template tree are carried into
//! a generated site and which files the recoloring pass may rewrite.

use std::ffi::OsStr;
use std::path::Path;

/// Entry names skipped entirely (subtree included) when copying or walking.
///
/// Encodes: dependency cache, build output, local secrets, the lock file,
/// version-control metadata, and a prior run's provenance snapshot.
pub const EXCLUDED_ENTRIES: [&str; 7] = [
    "node_modules",
    ".astro",
    "dist",
    ".env",
    "package-lock.json",
    ".git",
    "site.config.json",
];

/// File extensions the recoloring engine treats as text.
pub const RECOLOR_EXTENSIONS: [&str; 7] = ["astro", "tsx", "ts", "jsx", "js", "css", "html"];

/// Whether a directory entry name is in the fixed exclusion set.
pub fn is_excluded(name: &OsStr) -> bool {
    EXCLUDED_ENTRIES.iter().any(|entry| name == OsStr::new(entry))
}

/// Whether a file may be visited by the recoloring engine.
pub fn is_recolorable(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            RECOLOR_EXTENSIONS.iter().any(|known| *known == ext)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusion_set_matches_exact_names_only() {
        assert!(is_excluded(OsStr::new("node_modules")));
        assert!(is_excluded(OsStr::new(".env")));
        assert!(!is_excluded(OsStr::new(".env.example")));
        assert!(!is_excluded(OsStr::new("src")));
    }

    #[test]
    fn recolorable_is_extension_based_and_case_insensitive() {
        assert!(is_recolorable(Path::new("src/styles/global.css")));
        assert!(is_recolorable(Path::new("src/components/Hero.TSX")));
        assert!(!is_recolorable(Path::new("public/logo.webp")));
        assert!(!is_recolorable(Path::new("README")));
    }
}
