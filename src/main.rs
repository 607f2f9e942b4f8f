use std::{
    io::{Write, stdout},
    path::PathBuf,
};

use clap::Parser;
use drive_game_finder::{
    classifier::Classifier, config::ScanConfig, error::ScanError, get_scanner,
    report::write_report, run_scan, sources::ProgramScanner,
};
use is_terminal::IsTerminal;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Find installed games on a drive using the Windows registry.
///
/// Logs are written to stderr, use e.g. `RUST_LOG=debug` to see them.
#[derive(Parser, Debug)]
#[command(name = "drive_game_finder", version, about, long_about = None)]
struct Cli {
    /// Only list games whose install path starts with this, e.g. `E:` or `D:\Games`.
    /// Overrides the value from `--config`
    #[arg(short, long)]
    drive: Option<String>,

    /// JSON file with classification rules and search limits
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// List every installed program with its classification, then exit
    #[arg(long)]
    list_programs: bool,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .without_time()
                .with_line_number(true)
                .with_writer(std::io::stderr)
                // Don't output colours for logs not being printed to a terminal
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(EnvFilter::from_default_env())
        .init();
}

fn list_programs(scanner: &ProgramScanner, config: &ScanConfig) -> Result<(), ScanError> {
    let classifier = Classifier::new(config.rules.clone());
    let mut stdout = stdout().lock();

    for program in scanner.get_all_programs() {
        writeln!(
            &mut stdout,
            "{:?}\t{}\t{}\t{}",
            classifier.classify(&program),
            program.name,
            program.publisher.as_deref().unwrap_or("-"),
            program.install_location.as_deref().unwrap_or("-"),
        )?;
    }

    Ok(())
}

fn main() -> Result<(), ScanError> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ScanConfig::from_json_file(path)?,
        None => ScanConfig::default(),
    };
    if let Some(drive) = cli.drive {
        config.drive_prefix = drive;
    }
    debug!("Using configuration: {config:?}");

    let scanner = get_scanner();

    if cli.list_programs {
        return list_programs(&scanner, &config);
    }

    let report = run_scan(&scanner, &config);

    let mut stdout = stdout().lock();
    if cli.json {
        let serialized = serde_json::to_string_pretty(&report)?;
        writeln!(&mut stdout, "{serialized}")?;
    } else {
        write_report(&mut stdout, &report)?;
    }

    Ok(())
}
