use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the icon finder.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Report the represented pathways of every diagram in which an entity has its own icon",
    long_about = None
)]
pub struct Args {
    /// Path to the TOML configuration file
    #[arg(default_value = "config.toml")]
    pub config: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
