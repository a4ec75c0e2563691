//! CLI argument definitions for tokenswap.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `catalog` | List the deduplicated token catalog |
//! | `quote` | Convert an amount between two tokens |
//! | `wallet` | Show wallet balances valued against the catalog |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--feed` | `$TOKENSWAP_FEED` or `-` | Price feed snapshot, `-` for stdin |
//! | `--icon-base-url` | `$TOKENSWAP_ICON_BASE_URL` or the public icon repo | Base for icon references |
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings and errors as failures |
//!
//! # Examples
//!
//! ```bash
//! tokenswap --feed prices.json catalog --search atom
//! tokenswap --feed prices.json quote --from ETH --to USDC --amount 2 --pretty
//! curl -s https://example.test/prices.json | tokenswap wallet --balances wallet.json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Token price catalog and swap-rate calculator.
///
/// Reads a price feed snapshot (a JSON array of currency/date/price records),
/// keeps the latest price per token and answers catalog, conversion and
/// wallet valuation queries.
#[derive(Debug, Parser)]
#[command(name = "tokenswap", author, version, about = "Token price catalog and swap-rate calculator")]
pub struct Cli {
    /// Price feed snapshot path, or `-` for stdin.
    #[arg(long, global = true)]
    pub feed: Option<PathBuf>,

    /// Base URL that icon references are built from.
    #[arg(long, global = true)]
    pub icon_base_url: Option<String>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary for terminals.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List tokens with their latest price and icon reference.
    ///
    /// # Examples
    ///
    ///   tokenswap --feed prices.json catalog
    ///   tokenswap --feed prices.json catalog --search eth
    Catalog(CatalogArgs),

    /// Convert an amount from one token to another.
    ///
    /// # Examples
    ///
    ///   tokenswap --feed prices.json quote --from ETH --to USD --amount 2
    Quote(QuoteArgs),

    /// Show wallet balances ordered by chain priority with USD values.
    ///
    /// # Examples
    ///
    ///   tokenswap --feed prices.json wallet --balances wallet.json
    Wallet(WalletArgs),
}

/// Arguments for the `catalog` command.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Case-insensitive symbol filter.
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for the `quote` command.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Symbol to convert from (case-sensitive, as listed by `catalog`).
    #[arg(long)]
    pub from: String,

    /// Symbol to convert to.
    #[arg(long)]
    pub to: String,

    /// Amount of the source token, as typed.
    #[arg(long)]
    pub amount: String,
}

/// Arguments for the `wallet` command.
#[derive(Debug, Args)]
pub struct WalletArgs {
    /// JSON array of `{currency, amount, blockchain}` balances.
    #[arg(long)]
    pub balances: PathBuf,
}
