//! Recursive walk over a documentation tree

use super::error::ConvertError;
use super::file::{FileConverter, FileOutcome};
use super::report::BatchReport;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub struct TreeWalker {
    converter: FileConverter,
}

impl TreeWalker {
    pub fn new(converter: FileConverter) -> Self {
        Self { converter }
    }

    /// Every file under `root`, at any depth, whose name ends with the
    /// configured extension, in sorted order with each directory's files
    /// before its subdirectories.
    ///
    /// Symlinked directories are not descended into, so every file is
    /// listed once. Symlinks to files are kept. Directories that cannot be
    /// listed are skipped with a warning.
    pub fn collect_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        self.collect_files_recursive(root, &mut files);
        files
    }

    fn collect_files_recursive(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Skipping {}: {}", dir.display(), e);
                return;
            }
        };

        let mut entries: Vec<_> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping entry in {}: {}", dir.display(), e);
                    None
                }
            })
            .collect();
        entries.sort_by_key(|entry| entry.file_name());

        let extension = &self.converter.options().extension;
        let mut subdirs = Vec::new();
        for entry in entries {
            let path = entry.path();
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_dir() {
                subdirs.push(path);
                continue;
            }
            // file_type() does not follow links; resolve them to tell files from directories
            let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
            if is_file && entry.file_name().to_string_lossy().ends_with(extension.as_str()) {
                files.push(path);
            }
        }

        for subdir in subdirs {
            self.collect_files_recursive(&subdir, files);
        }
    }

    /// Convert every selected file under `root`, one at a time.
    ///
    /// Stops at the first failure; files already converted stay converted.
    pub fn walk(&self, root: &Path) -> Result<BatchReport, ConvertError> {
        let start_time = Instant::now();
        let mut batch = BatchReport::new(
            &root.display().to_string(),
            self.converter.options().dry_run,
        );

        if !root.is_dir() {
            log::warn!("{} is not a directory; nothing to convert", root.display());
            return Ok(batch);
        }

        for path in self.collect_files(root) {
            batch.files_scanned += 1;
            match self.converter.convert_file(&path)? {
                FileOutcome::Skipped => batch.files_skipped += 1,
                FileOutcome::Converted(report) => batch.push(report),
            }
        }

        batch.duration_ms = start_time.elapsed().as_millis() as u64;
        log::debug!(
            "Scanned {} files, converted {} in {}ms",
            batch.files_scanned,
            batch.files_converted,
            batch.duration_ms
        );
        Ok(batch)
    }
}
