//! Check command - address heuristic for one string.

use clap::Args;

use regfind_core::RegionFinder;

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Text to check
    #[arg(required = true)]
    address: String,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let finder = RegionFinder::new(&args.address)?;
    println!("{}", finder.is_address());

    Ok(())
}
