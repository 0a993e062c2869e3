use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use versync::{Error, FailureMode, OutputFormat, Registry, VersionChecker, VersyncConfig};

#[derive(Parser)]
#[command(name = "versync")]
#[command(
    version,
    about = "check that the release version number is in sync across project files",
    long_about = None
)]
struct Cli {
    /// version number every tracked file must carry
    #[arg(value_name = "VERSION")]
    expected_version: Option<String>,

    /// directory the tracked locations are relative to (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// output format (json or human)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// check every location and report all failures instead of stopping at the first
    #[arg(long)]
    keep_going: bool,

    /// enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<bool> {
    // nothing is read before the version argument is known
    let Some(expected) = cli.expected_version else {
        return Err(Error::MissingArgument.into());
    };

    let config = VersyncConfig::load_or_default(&cli.root).context("failed to load configuration")?;
    let format = cli.format.unwrap_or(config.format);
    let mode = if cli.keep_going {
        FailureMode::KeepGoing
    } else {
        config.failure_mode()
    };

    let registry = Registry::builtin().context("failed to build version registry")?;
    let checker = VersionChecker::new(&registry, &cli.root).mode(mode);

    tracing::debug!(
        root = %checker.root().display(),
        version = %expected,
        entries = registry.len(),
        ?mode,
        "starting version check"
    );

    let report = checker.check(&expected, |diagnostic| eprintln!("{}", diagnostic));

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(report.passed())
}
