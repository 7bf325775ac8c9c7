/// BTHome command-line tool: decode BLE service data and vendor
/// manufacturer data captured by a scanner.
///
/// # Command overview
///
/// ```text
/// bthome <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Decode one BTHome v2 service data payload
///   vendor     Decode one vendor manufacturer data payload
///   fields     List the object id table
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Log decoder diagnostics to stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// Payloads are given as hex (`40 02 ce ff`, `0x4002ceff`), or `-` to
/// read the hex from stdin. Logs go to stderr so stdout can be piped.
use std::io;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cmd_decode;
mod cmd_fields;
mod cmd_vendor;
mod input;
mod render;

// ── CLI root ──────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "bthome", version, about = "BTHome v2 payload decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decoder diagnostics (unknown ids, truncated fields) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode one BTHome v2 service data payload (header byte included).
    Decode(DecodeArgs),
    /// Decode one vendor manufacturer data payload (company id included).
    Vendor(VendorArgs),
    /// List the object id table.
    Fields(FieldsArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `bthome decode`.
///
/// ```text
/// ┌──────────┬──────────────────────────────────────────┐
/// │ Flag     │ Values / default                         │
/// ├──────────┼──────────────────────────────────────────┤
/// │ --format │ json (default) | pretty | text           │
/// └──────────┴──────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Payload as hex, or `-` to read it from stdin.
    pub payload: String,

    /// Output format: `json`, `pretty`, or `text`.
    #[arg(long, default_value = "json")]
    pub format: String,
}

/// Arguments for `bthome vendor`.
#[derive(clap::Args)]
pub struct VendorArgs {
    /// Manufacturer data as hex, or `-` to read it from stdin.
    pub payload: String,

    /// Output format: `json`, `pretty`, or `text`.
    #[arg(long, default_value = "json")]
    pub format: String,
}

/// Arguments for `bthome fields`.
#[derive(clap::Args)]
pub struct FieldsArgs {
    /// Only show rows whose reading name contains this text.
    #[arg(long)]
    pub name: Option<String>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Vendor(args) => cmd_vendor::run(&args),
        Commands::Fields(args) => cmd_fields::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
