//! isam-decode: decode ISAM SNMP indices from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use isam_resolver::config::DEFAULT_CONFIG_PATH;
use isam_resolver::{DecoderKind, Resolver, ResolverConfig};

#[derive(Debug, Parser)]
#[command(name = "isam-decode", version, about = "Decode ISAM SNMP table indices into topology tags")]
struct Args {
    /// Decoder to apply (e.g. isam-nfxsa, nfxsb-card, isam56-nfxsb-octets)
    decoder: String,

    /// Table index, as it appears in the OID suffix
    index: String,

    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

/// `--verbose` wins over `RUST_LOG`, which wins over the `info` default.
fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    match (verbose, env) {
        (true, _) => EnvFilter::new("debug"),
        (false, Some(directives)) => {
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
        }
        (false, None) => EnvFilter::new("info"),
    }
}

fn init_logging(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(verbose, env.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = ResolverConfig::load_or_default(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    let kind: DecoderKind = args.decoder.parse()?;
    if kind.is_stateful() {
        bail!("decoder '{}' needs a live SNMP session and cannot run offline", kind);
    }

    let resolver = kind.build(&config, None)?;
    debug!(decoder = resolver.name(), index = %args.index, "Decoding");

    match resolver.resolve(&args.index, None)? {
        Some(tags) => println!("{}", serde_json::to_string(&tags)?),
        None => println!("null"),
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
