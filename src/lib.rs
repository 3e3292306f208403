//! # FCMKit
//!
//! Converts SVG cut paths into structured cut files for computer-controlled
//! cutting machines.
//!
//! ## Architecture
//!
//! FCMKit is organized as a workspace with multiple crates:
//!
//! 1. **fcmkit-core** - Geometry, fixed-point units, error types
//! 2. **fcmkit-designer** - Path-data parsing, curve encoding, piece and file assembly
//! 3. **fcmkit-settings** - File metadata, cut data and encoder configuration
//! 4. **fcmkit** - Command-line binary that integrates all crates

use anyhow::Context;
use std::path::{Path, PathBuf};

pub use fcmkit_core::{EncodingError, Error, InputError, ParseError, Point, Result};
pub use fcmkit_designer::{Converter, CutFile, CutFileFormat, FileSummary, PieceLayout};
pub use fcmkit_settings::{ArcPolicy, Config};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, so converted JSON can go to stdout
/// - RUST_LOG environment variable support
/// - `info` level by default, `debug` when `verbose` is set
pub fn init_logging(verbose: bool, format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_line_number(verbose)
                .pretty();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .json();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}

/// Where and how to convert one document
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertRequest {
    pub input: PathBuf,
    /// Defaults to the input path with the format's extension
    pub output: Option<PathBuf>,
    /// Defaults to the input file stem
    pub label: Option<String>,
    pub layout: PieceLayout,
    /// Defaults to the output extension, then JSON
    pub format: Option<CutFileFormat>,
}

impl ConvertRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            label: None,
            layout: PieceLayout::Single,
            format: None,
        }
    }

    pub fn format(&self) -> CutFileFormat {
        match (self.format, &self.output) {
            (Some(format), _) => format,
            (None, Some(output)) => CutFileFormat::from_path(output),
            (None, None) => CutFileFormat::Json,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension(self.format().extension()))
    }

    pub fn label(&self) -> String {
        self.label.clone().unwrap_or_else(|| {
            self.input
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }
}

/// Convert an SVG file and write the cut file next to it (or to `output`).
///
/// Returns the written file and its path.
pub fn convert_file(config: &Config, request: &ConvertRequest) -> anyhow::Result<(CutFile, PathBuf)> {
    let text = std::fs::read_to_string(&request.input)
        .with_context(|| format!("Failed to read {}", request.input.display()))?;

    let file = Converter::new(config)
        .convert_svg(&text, &request.label(), request.layout)
        .with_context(|| format!("Failed to convert {}", request.input.display()))?;

    let output = request.output_path();
    file.save(&output, request.format())?;
    tracing::info!(output = %output.display(), pieces = file.pieces.len(), "Wrote cut file");

    Ok((file, output))
}

/// Write the default configuration, refusing to overwrite unless `force` is set
pub fn write_default_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default()
        .save_to_file(path)
        .with_context(|| format!("Failed to write config {}", path.display()))
}
