//! Load a catalog configuration tree and dump the resulting registry.
//!
//! Prints the registry as pretty JSON on stdout so operators can diff what
//! a configuration change actually does to the lookup tables before rolling
//! it out. Trace output goes to stderr and is controlled by RUST_LOG.

use anyhow::{Context, Result, anyhow, bail};
use catwalk::load_registry;
use std::env;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = "csw-config.xml";

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    init_tracing();
    let args = CliArgs::parse()?;
    let registry = load_registry(&args.base, &args.file).with_context(|| {
        format!(
            "loading catalog configuration '{}' under {}",
            args.file,
            args.base.display()
        )
    })?;
    println!("{}", serde_json::to_string_pretty(&registry)?);
    Ok(())
}

struct CliArgs {
    base: PathBuf,
    file: String,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut base: Option<PathBuf> = None;
        let mut file = DEFAULT_CONFIG_FILE.to_string();

        let mut args = env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--base" => {
                    let value = args.next().ok_or_else(|| anyhow!("--base requires a value"))?;
                    base = Some(PathBuf::from(value));
                }
                "--file" => {
                    file = args.next().ok_or_else(|| anyhow!("--file requires a value"))?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => bail!("unknown argument '{other}' (see --help)"),
            }
        }

        let base = base.ok_or_else(|| anyhow!("--base <dir> is required"))?;
        Ok(Self { base, file })
    }
}

fn print_usage() {
    println!("usage: catalog-dump --base <dir> [--file <name>]");
    println!();
    println!("  --base <dir>   service base directory; configuration lives under <dir>/config");
    println!("  --file <name>  root configuration file name (default {DEFAULT_CONFIG_FILE})");
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
