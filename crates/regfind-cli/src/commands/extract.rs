//! Extract command - list the components found in one address.

use clap::Args;
use tracing::info;

use regfind_core::{AddressComponents, MatchCategory, RegionFinder};

use super::OutputFormat;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Address to analyze
    #[arg(required = true)]
    address: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Only report one category (e.g. "region", "postcode_prefix3")
    #[arg(long)]
    category: Option<MatchCategory>,
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let finder = RegionFinder::new(&args.address)?;
    info!("Extracting components from: {}", finder.address());

    let output = match args.category {
        Some(category) => format_category(category, &finder.find(category), args.format)?,
        None => format_components(&finder.components(), args.format)?,
    };

    println!("{}", output);

    Ok(())
}

fn format_category(
    category: MatchCategory,
    values: &[String],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut map = serde_json::Map::new();
            map.insert(category.to_string(), serde_json::to_value(values)?);
            Ok(serde_json::to_string_pretty(&map)?)
        }
        OutputFormat::Text => Ok(format!("{}: {}", category, values.join(", "))),
    }
}

fn format_components(
    components: &AddressComponents,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(components)?),
        OutputFormat::Text => {
            let mut lines = vec![format!("address: {}", components.normalized)];
            for category in MatchCategory::ALL {
                let values = components.get(category);
                if !values.is_empty() {
                    lines.push(format!("{}: {}", category, values.join(", ")));
                }
            }
            lines.push(format!("is_address: {}", components.is_address));
            Ok(lines.join("\n"))
        }
    }
}
