//! csvmd CLI
//!
//! Renders a CSV file as a Markdown table and/or a collapsible block
//! carrying the raw payload.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use tracing::error;
use tracing_subscriber::EnvFilter;

use csvmd_core::{Converter, OutputMode, RenderConfig};

/// csvmd - render CSV as Markdown
#[derive(Parser)]
#[command(name = "csvmd")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input CSV file
    path: PathBuf,

    /// Maximum number of data rows in the table (default: all rows)
    #[arg(long)]
    head: Option<usize>,

    /// Fragments to emit
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Text encoding of the input file
    #[arg(long)]
    encoding: Option<String>,

    /// Field delimiter
    #[arg(long)]
    delimiter: Option<char>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// CLI spelling of the output mode.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Markdown table only
    #[value(name = "table")]
    Table,
    /// Table followed by the collapsible raw block
    #[value(name = "table+details_csv")]
    TableDetailsCsv,
    /// Collapsible raw block only
    #[value(name = "details_csv")]
    DetailsCsv,
}

impl From<ModeArg> for OutputMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Table => OutputMode::Table,
            ModeArg::TableDetailsCsv => OutputMode::TableWithDetails,
            ModeArg::DetailsCsv => OutputMode::DetailsOnly,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;

    // CLI flags override config file values
    if let Some(head) = cli.head {
        config.head = Some(head);
    }
    if let Some(mode) = cli.mode {
        config.mode = mode.into();
    }
    if let Some(encoding) = cli.encoding {
        config.encoding = encoding;
    }
    if let Some(delimiter) = cli.delimiter {
        config.delimiter = delimiter;
    }

    let result = Converter::new(config)
        .convert_file(&cli.path)
        .into_diagnostic()?;

    println!("{}", result.markdown);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    match path {
        Some(path) => RenderConfig::from_file(path).into_diagnostic(),
        None => Ok(RenderConfig::discover(Path::new("."))
            .into_diagnostic()?
            .unwrap_or_default()),
    }
}
