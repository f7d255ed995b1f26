//! Command implementations for normals processor CLI
//!
//! Contains the command execution logic: logging setup, the parse pipeline
//! with JSON export, and the flag reference tables.

use std::time::Instant;
use tracing::{debug, info};

use crate::app::models::{MissingCode, QualityFlag};
use crate::app::services::normals_parser::{LineFilter, NormalsParser, RecordFactory};
use crate::cli::args::{Args, Commands, ParseArgs};
use crate::config::ParserConfig;
use crate::{Error, Result};

/// Main command runner for normals processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Parse(parse_args)) => run_parse(parse_args),
        Some(Commands::Flags) => run_flags(),
        None => {
            // Handled by main before dispatch; nothing to do here
            Ok(())
        }
    }
}

/// Parse a normals file and export the matching records as JSON
pub fn run_parse(args: ParseArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(&args);

    info!("Starting normals file parse");
    debug!("Parse arguments: {:?}", args);

    let config = ParserConfig::new(&args.name, &args.unit, &args.source, args.scaling_factor)?;

    let parser = NormalsParser::new(
        LineFilter::new(args.stations.identifiers().iter().cloned()),
        RecordFactory::new(config),
    );

    let result = parser.parse_file(&args.input_path)?;
    info!(
        "Matched {} of {} lines ({:.1}%)",
        result.stats.lines_matched,
        result.stats.total_lines,
        result.stats.match_rate()
    );

    let schemas = result
        .records
        .iter()
        .map(|record| record.export())
        .collect::<Result<Vec<_>>>()?;

    let json = serde_json::to_string_pretty(&schemas)?;
    match &args.output_path {
        Some(path) => {
            std::fs::write(path, json)
                .map_err(|e| Error::io(format!("Failed to write output {}", path.display()), e))?;
            info!("Wrote {} records to {}", schemas.len(), path.display());
        }
        None => println!("{}", json),
    }

    info!(
        "Parse complete in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Print the quality flag and sentinel code reference tables
pub fn run_flags() -> Result<()> {
    println!("Quality flags:");
    for flag in QualityFlag::all_values() {
        println!("  {}  {}", flag.as_char(), flag.description());
    }

    println!();
    println!("Sentinel codes:");
    for code in [
        MissingCode::Missing,
        MissingCode::RoundsToZero,
        MissingCode::Undefined,
        MissingCode::Inconsistent,
    ] {
        println!("  {}  {}", code.as_str(), code.description());
    }

    Ok(())
}

/// Set up structured logging for the parse command
fn setup_logging(args: &ParseArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("normals_processor={}", args.get_log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", args.get_log_level());
}
