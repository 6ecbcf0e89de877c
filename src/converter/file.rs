//! Converts a single Markdown file in place, keeping a backup of the original.

use super::error::ConvertError;
use super::options::ConvertOptions;
use super::patterns;
use super::report::ConversionReport;
use super::transformer;
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to one file
#[derive(Debug)]
pub enum FileOutcome {
    /// No trigger substring; the file was not touched
    Skipped,
    /// Converted (or would have been, in a dry run)
    Converted(ConversionReport),
}

/// Whether `content` holds any directive family worth converting.
pub fn needs_conversion(content: &str) -> bool {
    patterns::contains_trigger(content)
}

/// Original path with `suffix` appended, e.g. `intro.md` -> `intro.md.bak`
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

pub struct FileConverter {
    options: ConvertOptions,
}

impl FileConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert `path` in place.
    ///
    /// The backup is written before the original is overwritten, and an
    /// existing backup is replaced without warning.
    pub fn convert_file(&self, path: &Path) -> Result<FileOutcome, ConvertError> {
        let content = fs::read_to_string(path).map_err(|source| ConvertError::Read {
            source,
            path: path.to_path_buf(),
        })?;

        if !needs_conversion(&content) {
            log::debug!("Skipping {}: no GitBook directives", path.display());
            return Ok(FileOutcome::Skipped);
        }

        log::info!("🔧 Converting: {}", path.display());
        let mut result = transformer::transform(&content, &path.display().to_string());

        if self.options.dry_run {
            return Ok(FileOutcome::Converted(result.report));
        }

        let backup = backup_path(path, &self.options.backup_suffix);
        fs::write(&backup, &content).map_err(|source| ConvertError::Backup {
            source,
            path: backup.clone(),
        })?;
        result.report.backup_file = Some(backup.display().to_string());

        fs::write(path, &result.content).map_err(|source| ConvertError::Write {
            source,
            path: path.to_path_buf(),
        })?;

        Ok(FileOutcome::Converted(result.report))
    }
}
