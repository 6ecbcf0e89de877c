//! gitbook2docusaurus - Rewrite GitBook directives in a docs tree to Docusaurus syntax
//!
//! Usage:
//!   gitbook2docusaurus                 # converts ./docs in place
//!   gitbook2docusaurus site/docs --dry-run --report report.json

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser as ClapParser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};

use gitbook2docusaurus::converter::{
    BatchReport, ConvertOptions, FileConverter, TreeWalker, DEFAULT_BACKUP_SUFFIX, DEFAULT_ROOT,
};

#[derive(ValueEnum, Clone, Debug)]
enum ReportFormat {
    /// JSON format
    Json,
    /// Human-readable text
    Text,
}

#[derive(ClapParser)]
#[command(
    version,
    about = "Convert GitBook directives in Markdown files to Docusaurus syntax",
    long_about = "Walks ROOT recursively and rewrites hints, tabs and YouTube embeds\n\
                  in every .md file in place. The original content of each converted\n\
                  file is kept next to it with the backup suffix appended."
)]
struct Cli {
    /// Documentation root to convert
    #[arg(value_name = "ROOT", default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Suffix appended to the original path for backups
    #[arg(long, value_name = "SUFFIX", default_value = DEFAULT_BACKUP_SUFFIX)]
    backup_suffix: String,

    /// Show what would be converted without writing
    #[arg(long)]
    dry_run: bool,

    /// Write a conversion report
    #[arg(long, value_name = "REPORT_FILE")]
    report: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "json")]
    report_format: ReportFormat,

    /// debug log file
    #[arg(short, long, value_name = "FILE")]
    debuglogfile: Option<PathBuf>,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn init_logger(filter_level: log::LevelFilter, logfile: Option<&Path>) -> anyhow::Result<()> {
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        filter_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) as Box<dyn simplelog::SharedLogger>];
    if let Some(filename) = logfile {
        let file = File::create(filename)
            .with_context(|| format!("failed to create log file {}", filename.display()))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            simplelog::Config::default(),
            file,
        ) as Box<dyn simplelog::SharedLogger>);
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}

fn write_report(report: &BatchReport, path: &Path, format: &ReportFormat) -> anyhow::Result<()> {
    let content = match format {
        ReportFormat::Json => report.to_json()?,
        ReportFormat::Text => report.to_text(),
    };
    fs::write(path, content)
        .with_context(|| format!("failed to write report {}", path.display()))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logger(args.verbose.log_level_filter(), args.debuglogfile.as_deref())?;

    let options = ConvertOptions::new()
        .with_backup_suffix(args.backup_suffix.clone())
        .with_dry_run(args.dry_run);
    let walker = TreeWalker::new(FileConverter::new(options));

    let batch = walker
        .walk(&args.root)
        .with_context(|| format!("conversion of {} aborted", args.root.display()))?;

    if args.dry_run {
        eprintln!("\n{}", batch.to_text());
    }

    if let Some(report_path) = &args.report {
        write_report(&batch, report_path, &args.report_format)?;
        log::info!("✓ Report written to {}", report_path.display());
    }

    println!("✅ All Markdown files processed and GitBook syntax converted.");
    Ok(())
}
