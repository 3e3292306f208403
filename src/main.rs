//! FCMKit command-line interface

use clap::{Parser, Subcommand, ValueEnum};
use fcmkit::{
    convert_file, init_logging, write_default_config, ArcPolicy, Config, ConvertRequest, CutFile,
    CutFileFormat, LogFormat, PieceLayout,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fcmkit")]
#[command(about = "Convert SVG cut paths into cut files")]
#[command(version)]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    log_format: LogFormatArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an SVG document into a cut file (JSON or binary FCM)
    Convert {
        /// SVG document to convert
        input: PathBuf,

        /// Output file (defaults to the input with the format's extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (defaults to the output extension, then JSON)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Config file (JSON or TOML); defaults to the platform config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Piece label (defaults to the input file name)
        #[arg(short, long)]
        label: Option<String>,

        /// How elliptical arcs are handled
        #[arg(long, value_enum)]
        arc_policy: Option<ArcPolicyArg>,

        /// Emit one piece per top-level <g> element
        #[arg(long)]
        split_groups: bool,
    },

    /// Print piece, path and outline counts of a cut file
    Inspect {
        /// Cut file (.json or .fcm)
        file: PathBuf,
    },

    /// Write the default configuration
    Config {
        /// Destination (defaults to the platform config file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Fcm,
}

impl From<FormatArg> for CutFileFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => CutFileFormat::Json,
            FormatArg::Fcm => CutFileFormat::Fcm,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ArcPolicyArg {
    /// Leave arcs out of the cut file
    Drop,
    /// Fail the conversion
    Reject,
}

impl From<ArcPolicyArg> for ArcPolicy {
    fn from(arg: ArcPolicyArg) -> Self {
        match arg {
            ArcPolicyArg::Drop => ArcPolicy::Drop,
            ArcPolicyArg::Reject => ArcPolicy::Reject,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_format.into())?;

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
            config,
            label,
            arc_policy,
            split_groups,
        } => {
            let mut config = Config::resolve(config.as_deref())?;
            if let Some(policy) = arc_policy {
                config.encoder.arc_policy = policy.into();
            }

            let request = ConvertRequest {
                input,
                output,
                label,
                layout: if split_groups {
                    PieceLayout::SplitGroups
                } else {
                    PieceLayout::Single
                },
                format: format.map(Into::into),
            };

            let (file, path) = convert_file(&config, &request)?;
            println!("Wrote {}", path.display());
            print!("{}", file.summary());
        }
        Commands::Inspect { file } => {
            let cut_file = CutFile::load(&file)?;
            print!("{}", cut_file.summary());
        }
        Commands::Config { output, force } => {
            let path = match output {
                Some(path) => path,
                None => Config::default_path()?,
            };
            write_default_config(&path, force)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
