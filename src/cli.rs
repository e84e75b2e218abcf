//! Command-line interface definitions.
//!
//! Defines all CLI arguments using clap.

use clap::Parser;
use std::path::PathBuf;

/// Crumbtrail breadcrumb generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site snapshot describing the current page view (JSON)
    pub page: PathBuf,

    /// Config file name (default: trail.toml)
    #[arg(short = 'C', long, default_value = "trail.toml")]
    pub config: PathBuf,

    /// Write the markup to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
