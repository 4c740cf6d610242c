//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::export::Target;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio site configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file path. Without it, `./folio.toml` is used when present,
    /// otherwise the built-in configuration
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load and validate the configuration
    Check,

    /// Print the resolved configuration, or a single constant
    Show {
        /// Constant to print: SITE, HOME, BLOG, WORK, PROJECTS, ABOUT or SOCIALS
        name: Option<String>,

        /// Print the whole configuration as JSON instead of TOML
        /// (a single constant is always JSON)
        #[arg(long, conflicts_with = "name")]
        json: bool,
    },

    /// Print the options consumed by the build pipeline as JSON
    Export {
        /// Which options to export
        #[arg(value_enum)]
        target: Target,

        /// Single-line output
        #[arg(long)]
        compact: bool,
    },

    /// Write the built-in configuration to a new file
    Init {
        /// Destination file (default: ./folio.toml)
        path: Option<PathBuf>,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}
