//! On-disk layout of the case store.
//!
//! Pure path functions; the storage crate owns the I/O. These define the
//! canonical file layout under the app's data directory.

use std::path::{Path, PathBuf};

/// Directory name under the platform data dir.
pub const APP_DIR: &str = "com.agada.sanjeevini";

pub const CASES_FILE: &str = "cases.json";

pub const DRAFT_FILE: &str = "draft.json";

pub fn cases_file(root: &Path) -> PathBuf {
    root.join(CASES_FILE)
}

pub fn draft_file(root: &Path) -> PathBuf {
    root.join(DRAFT_FILE)
}
