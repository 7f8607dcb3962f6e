//! Subcommand implementations.

pub mod check;
pub mod config;
pub mod extract;
pub mod resolve;

/// Output format shared by the commands.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}
