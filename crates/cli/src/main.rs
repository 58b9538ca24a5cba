//! parahash CLI
//!
//! Main entry point for the parahash command-line tool.
//! Reads a document, titles every paragraph with its hash, and titles the
//! document with the hash of those hashes.

use clap::{builder::FalseyValueParser, Parser};
use parahash_core::{config::Overrides, logging, AppConfig, AppError, AppResult};
use parahash_outline::OutlineOptions;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Exit status for command-line usage errors.
const USAGE_EXIT: u8 = 1;

/// Write a document out with crypto hash titles on every paragraph
#[derive(Parser, Debug)]
#[command(name = "parahash")]
#[command(about = "Write a document out with crypto hash titles on every paragraph", long_about = None)]
#[command(version)]
struct Cli {
    /// Input file (default: standard input)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// The representation for hashes: hex, base58 or bip39 (default: hex)
    #[arg(long, env = "PARAHASH_REP")]
    rep: Option<String>,

    /// The length of a paragraph title in characters or words; 0 keeps it whole (default: 4)
    #[arg(long, env = "PARAHASH_PTLEN", allow_negative_numbers = true)]
    ptlen: Option<i64>,

    /// The length of the document title in characters or words; 0 keeps it whole (default: 8)
    #[arg(long, env = "PARAHASH_DTLEN", allow_negative_numbers = true)]
    dtlen: Option<i64>,

    /// The file to write to; must not exist yet (default: stdout)
    #[arg(long, env = "PARAHASH_OUTFILE")]
    outfile: Option<String>,

    /// Path to a YAML config file
    #[arg(short, long, env = "PARAHASH_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too, on stdout
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(USAGE_EXIT)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("parahash: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    // Load base configuration, then apply CLI and environment overrides
    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(Overrides {
        input: cli.file,
        outfile: cli.outfile,
        rep: cli.rep,
        ptlen: cli.ptlen,
        dtlen: cli.dtlen,
        log_level: cli.log_level,
        verbose: cli.verbose,
        no_color: cli.no_color,
    })?;

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    config.validate()?;

    tracing::debug!("Input: {:?}", config.input);
    tracing::debug!("Outfile: {:?}", config.outfile);

    let _span = tracing::info_span!("outline", rep = %config.rep).entered();

    let options = OutlineOptions::from(&config);
    let mut reader = open_input(config.input.as_deref())?;
    let mut writer = open_output(config.outfile.as_deref())?;

    let result = parahash_outline::run(&mut reader, &mut writer, &options);

    match &result {
        Ok(outline) => tracing::info!(
            "Outline written: {} paragraphs, document digest {}",
            outline.paragraph_count(),
            outline.document_digest()
        ),
        Err(e) => tracing::debug!("Outline failed: {}", e),
    }

    result.map(|_| ())
}

/// Open the input file, or standard input when no path is given.
fn open_input(path: Option<&Path>) -> AppResult<Box<dyn Read>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| with_path(e, path))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Create the output file exclusively, or use standard output.
fn open_output(path: Option<&Path>) -> AppResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            // Fail if it exists
            let file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
                .map_err(|e| with_path(e, path))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

fn with_path(err: io::Error, path: &Path) -> AppError {
    AppError::Io(io::Error::new(
        err.kind(),
        format!("{}: {}", path.display(), err),
    ))
}
