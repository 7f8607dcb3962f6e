//! Resolve command - map an address to a region code.

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::debug;

use regfind_core::{FinderConfig, InMemoryResolver, RegionFinder, Resolution};

use super::config::load_config;
use super::OutputFormat;

/// Arguments for the resolve command.
#[derive(Args)]
pub struct ResolveArgs {
    /// Address to resolve
    #[arg(required = true)]
    address: String,

    /// Reference data file (overrides the configured one)
    #[arg(short, long)]
    reference: Option<PathBuf>,

    /// Consult postcode prefixes before region names
    #[arg(long)]
    prefer_postcode: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub fn run(args: ResolveArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config: FinderConfig = load_config(config_path.map(Path::new))?;

    if let Some(reference) = args.reference {
        config.resolver.reference_data = Some(reference);
    }
    if args.prefer_postcode {
        config.resolver.prefer_postcode = true;
    }

    if config.resolver.reference_data.is_none() {
        anyhow::bail!(
            "No reference data given. Pass --reference or set resolver.reference_data in the config."
        );
    }

    let resolver = InMemoryResolver::from_config(&config.resolver)?;
    debug!("Resolver holds {} entries", resolver.len());

    let finder = RegionFinder::new(&args.address)?;
    let resolution = finder.resolve_with(&resolver)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolution)?),
        OutputFormat::Text => match &resolution {
            Resolution::Resolved {
                code,
                category,
                matched,
            } => println!("{} ({}: {})", style(code).green(), category, matched),
            Resolution::Unresolved => println!("{}", style("unresolved").yellow()),
        },
    }

    Ok(())
}
