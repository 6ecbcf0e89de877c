//! Options for converting a documentation tree

use serde::{Deserialize, Serialize};

/// Directory converted when no root is given
pub const DEFAULT_ROOT: &str = "docs";
/// Suffix appended to the original path to form the backup path
pub const DEFAULT_BACKUP_SUFFIX: &str = ".bak";
/// Only files whose name ends with this are visited
pub const DEFAULT_EXTENSION: &str = ".md";

/// Options for the file converter and tree walker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Appended to the original path to name the backup copy
    pub backup_suffix: String,
    /// File name suffix selecting files to convert
    pub extension: String,
    /// Transform and report, but write neither backup nor output
    pub dry_run: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            dry_run: false,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backup suffix
    pub fn with_backup_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.backup_suffix = suffix.into();
        self
    }

    /// Set the file name suffix to select
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
