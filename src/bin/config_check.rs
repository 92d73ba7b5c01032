//! Validate a catalog configuration tree without starting the service.
//!
//! Loads the full include chain and exits nonzero on the first fatal
//! problem, so deploy gates can reject a broken configuration before it
//! takes the service down at startup.

use anyhow::{Context, Result, anyhow, bail};
use catwalk::{QueryableClass, load_registry};
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

    if !args.quiet {
        let iso = registry.queryables(QueryableClass::Iso).len();
        let additional = registry.queryables(QueryableClass::Additional).len();
        println!(
            "ok: {} queryables ({} iso, {} additional), {} search typenames, {} describe typenames, {} constraint languages, keywords={}",
            iso + additional,
            iso,
            additional,
            registry.records_typenames().len(),
            registry.describe_typenames().len(),
            registry.records_constraint_languages().len(),
            registry.number_of_keywords(),
        );
    }
    Ok(())
}

struct CliArgs {
    base: PathBuf,
    file: String,
    quiet: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut base: Option<PathBuf> = None;
        let mut file = DEFAULT_CONFIG_FILE.to_string();
        let mut quiet = false;

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
                "--quiet" => quiet = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => bail!("unknown argument '{other}' (see --help)"),
            }
        }

        let base = base.ok_or_else(|| anyhow!("--base <dir> is required"))?;
        Ok(Self { base, file, quiet })
    }
}

fn print_usage() {
    println!("usage: config-check --base <dir> [--file <name>] [--quiet]");
    println!();
    println!("  --base <dir>   service base directory; configuration lives under <dir>/config");
    println!("  --file <name>  root configuration file name (default {DEFAULT_CONFIG_FILE})");
    println!("  --quiet        suppress the summary line; exit status only");
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
