//! CLI argument definitions for tickerdash.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lookup` | Current price, summary metrics and raw history |
//! | `price` | Current price only |
//! | `series` | Historical OHLCV series and summary only |
//! | `prompt` | Read one symbol per line from stdin and look each up |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json, ndjson) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as failures |
//! | `--timeout-ms` | `10000` | Per-request timeout |
//! | `--verbose` | `false` | Log progress to stderr |
//!
//! # Examples
//!
//! ```bash
//! tickerdash lookup AAPL
//! tickerdash series BRK.B --interval 1week --outputsize 12 --format json --pretty
//! TWELVE_DATA_API_KEY=... tickerdash prompt
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use tickerdash_core::config::DEFAULT_TIMEOUT_MS;
use tickerdash_core::{Interval, DEFAULT_OUTPUT_SIZE};

/// Stock price tracker: current price, 7-day history and key metrics.
///
/// Reads the Twelve Data API key from TWELVE_DATA_API_KEY. Without it the
/// public demo key is used.
#[derive(Debug, Parser)]
#[command(name = "tickerdash", author, version, about = "Stock price tracker for the terminal")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings (including the demo-key notice) as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Per-request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Log request progress to stderr (overridden by RUST_LOG).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable metrics and data table.
    Table,
    /// Single JSON envelope.
    Json,
    /// One JSON envelope per line.
    Ndjson,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the current price and recent history for one symbol.
    Lookup(LookupArgs),
    /// Fetch the current price for one symbol.
    Price(PriceArgs),
    /// Fetch the recent history for one symbol.
    Series(LookupArgs),
    /// Interactive mode: one symbol per line on stdin.
    Prompt(SeriesShapeArgs),
}

#[derive(Debug, Args)]
pub struct PriceArgs {
    /// Ticker symbol, e.g. AAPL or BRK.B.
    pub symbol: String,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Ticker symbol, e.g. AAPL or BRK.B.
    pub symbol: String,

    #[command(flatten)]
    pub shape: SeriesShapeArgs,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct SeriesShapeArgs {
    /// Sampling interval (1day, 1week, 1month).
    #[arg(long, default_value_t = Interval::OneDay)]
    pub interval: Interval,

    /// Number of data points to request.
    #[arg(long, default_value_t = DEFAULT_OUTPUT_SIZE)]
    pub outputsize: usize,
}

impl Default for SeriesShapeArgs {
    fn default() -> Self {
        Self {
            interval: Interval::default(),
            outputsize: DEFAULT_OUTPUT_SIZE,
        }
    }
}
