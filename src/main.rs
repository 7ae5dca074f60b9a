//! Bitsquat - list every valid domain one bit flip away from a URL
//!
//! Bit flips caused by faulty memory can turn a lookup for one domain into a
//! lookup for its neighbour. This tool prints those neighbours so they can be
//! checked for registration.

use bitsquat::{BitSquatter, OutputFormat, SquatConfig, SquatReport, FlipMode, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process;
use tracing_subscriber::EnvFilter;

/// CLI arguments for bitsquat
#[derive(Parser, Debug)]
#[command(name = "bitsquat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Outputs all valid domains different by 1 bit from the input URL")]
#[command(after_help = "Example: bitsquat --verbose https://foobar.com")]
struct Args {
    /// Target URL (a leading scheme such as https:// is ignored)
    #[arg(value_name = "URL")]
    url: String,

    /// Display domain name and extension bitstrings
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Generate URL permutations for the extension too
    #[arg(short = 'e', long = "extension-too")]
    extension_too: bool,

    /// Flip every bit position once instead of reproducing the reference output
    #[arg(long = "strict")]
    strict: bool,

    /// Only emit candidates with these TLDs (comma-separated)
    #[arg(short = 't', long = "tld", value_name = "TLD", value_delimiter = ',')]
    tlds: Option<Vec<String>>,

    /// Print the full report as JSON
    #[arg(short = 'j', long = "json")]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize the library
    if let Err(e) = bitsquat::init() {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    init_logging(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

/// Install the stderr tracing subscriber, honouring RUST_LOG when set
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Merge environment configuration with command line flags
fn build_config(args: &Args) -> Result<SquatConfig> {
    let mut config = SquatConfig::from_env()?;

    if args.extension_too {
        config.permutate_extension = true;
    }
    if args.strict {
        config.flip_mode = FlipMode::Strict;
    }
    if args.json {
        config.output = OutputFormat::Json;
    }
    if let Some(tlds) = &args.tlds {
        config.tlds = Some(
            tlds.iter()
                .map(|t| t.trim().trim_start_matches('.').to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        );
    }

    Ok(config)
}

fn run(args: &Args) -> Result<()> {
    let config = build_config(args)?;
    let output = config.output;
    let squatter = BitSquatter::with_config(config)?;

    let report = squatter.generate(&args.url)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match output {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Lines => {
            if args.verbose {
                write_verbose_header(&mut out, &args.url, &report)?;
            }
            for candidate in &report.candidates {
                writeln!(out, "{}", candidate)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Print the target and the bitstrings of both labels
fn write_verbose_header<W: Write>(out: &mut W, url: &str, report: &SquatReport) -> Result<()> {
    writeln!(out, "Target Domain: {}", url)?;
    writeln!(
        out,
        "Domain Name: {}\tDomain extension: {}",
        report.domain, report.extension
    )?;
    writeln!(out, "{}:\t{}", report.domain, report.domain_bits)?;
    writeln!(out, "{}:\t{}", report.extension, report.extension_bits)?;
    Ok(())
}
