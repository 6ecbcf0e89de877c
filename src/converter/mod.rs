//! GitBook to Docusaurus converter
//!
//! Rewrites GitBook directives (`{% hint %}`, `{% tabs %}`, `{% tab %}` and
//! `{{< youtube >}}` embeds) in Markdown files into Docusaurus syntax:
//! - [`patterns`]: single-line recognizers for each directive
//! - [`transformer`]: the stateful line-by-line rewrite
//! - [`FileConverter`]: trigger check, backup and in-place write for one file
//! - [`TreeWalker`]: recursive walk over a documentation tree

mod error;
mod file;
mod options;
pub mod patterns;
mod report;
pub mod transformer;
mod walker;

pub use error::ConvertError;
pub use file::{backup_path, needs_conversion, FileConverter, FileOutcome};
pub use options::{ConvertOptions, DEFAULT_BACKUP_SUFFIX, DEFAULT_EXTENSION, DEFAULT_ROOT};
pub use patterns::MarkerKind;
pub use report::{
    BatchReport, ConversionReport, ConversionStatistics, ConversionWarning, WarningKind,
};
pub use transformer::{convert_gitbook_to_docusaurus, transform, ConversionResult};
pub use walker::TreeWalker;
