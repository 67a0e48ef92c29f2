//! CLI command for exporting an expense view

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::paths::SpendviewPaths;
use crate::config::settings::Settings;
use crate::error::{SpendviewError, SpendviewResult};
use crate::export::{export_view_csv, export_view_json, export_view_yaml};

use super::expense::ViewArgs;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One row per expense with its month and week
    Csv,
    /// Grouped view and statistics
    Json,
    /// Grouped view and statistics, human-readable
    Yaml,
}

/// Arguments of the `export` command
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Export format
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the `export` command
pub fn handle_export_command(
    paths: &SpendviewPaths,
    settings: &Settings,
    args: &ExportArgs,
) -> SpendviewResult<()> {
    let view = args.view.build_view(paths, settings)?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SpendviewError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        ExportFormat::Csv => export_view_csv(&view, &mut writer)?,
        ExportFormat::Json => export_view_json(&view, &mut writer, args.pretty)?,
        ExportFormat::Yaml => export_view_yaml(&view, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| SpendviewError::Export(e.to_string()))?;

    tracing::info!(
        format = ?args.format,
        expenses = view.matched_count(),
        "Exported expense view"
    );

    if let Some(path) = &args.output {
        println!(
            "Exported {} expenses to: {}",
            view.matched_count(),
            path.display()
        );
    }

    Ok(())
}
