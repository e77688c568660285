//! Command-line front-end: argument parsing and the plan-and-export run.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use shelfkit_camtools::{plan_shelves, stack_depth, write_plan, ExportFormat};
use shelfkit_settings::Config;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq, Default)]
#[command(name = "shelfkit")]
#[command(about = "Plan nested box-jointed shelves and write their cut files")]
#[command(version)]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
pub struct CliArgs {
    /// Configuration file (.toml or .json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory for cut files
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Formats to write
    #[arg(long, value_enum, value_delimiter = ',')]
    pub format: Option<Vec<FormatArg>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Svg,
    Gcode,
    Json,
    /// svg, gcode and json
    All,
}

impl FormatArg {
    fn formats(self) -> Vec<ExportFormat> {
        match self {
            FormatArg::Svg => vec![ExportFormat::Svg],
            FormatArg::Gcode => vec![ExportFormat::Gcode],
            FormatArg::Json => vec![ExportFormat::Json],
            FormatArg::All => ExportFormat::ALL.to_vec(),
        }
    }
}

impl CliArgs {
    /// Requested formats in first-mention order, `None` when `--format` was
    /// not given.
    pub fn formats(&self) -> Option<Vec<ExportFormat>> {
        let requested = self.format.as_ref()?;
        let mut formats: Vec<ExportFormat> = Vec::new();
        for format in requested.iter().flat_map(|arg| arg.formats()) {
            if !formats.contains(&format) {
                formats.push(format);
            }
        }
        Some(formats)
    }
}

/// Totals reported at the end of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub parts: usize,
    pub sheets: usize,
    pub stack_depth: f64,
    pub files: Vec<PathBuf>,
}

fn load_config(args: &CliArgs) -> anyhow::Result<Config> {
    if let Some(path) = &args.config {
        return Config::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    match Config::default_path() {
        Ok(path) => Config::load_or_default(&path)
            .with_context(|| format!("failed to load config {}", path.display())),
        Err(e) => {
            tracing::warn!(error = %e, "no default config location, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load settings, plan the shelf set and write the cut files.
pub fn run(args: &CliArgs) -> anyhow::Result<RunSummary> {
    let config = load_config(args)?;

    let params = config.shelf.to_parameters();
    let plan = plan_shelves(&params, config.sheet_spec());

    let out_dir = args
        .out
        .clone()
        .unwrap_or_else(|| config.export.output_directory.clone());
    let formats = args
        .formats()
        .unwrap_or_else(|| config.export.formats.clone());

    let files = write_plan(
        &plan,
        &out_dir,
        &formats,
        &config.export.to_program_settings(),
    )
    .with_context(|| format!("failed to write cut files to {}", out_dir.display()))?;

    let summary = RunSummary {
        parts: plan.parts.len(),
        sheets: plan.sheets.len(),
        stack_depth: stack_depth(config.plywood.thickness, params.middle_count),
        files,
    };

    tracing::info!(
        parts = summary.parts,
        sheets = summary.sheets,
        stack_depth_mm = summary.stack_depth,
        files = summary.files.len(),
        "shelf plan complete"
    );

    Ok(summary)
}
