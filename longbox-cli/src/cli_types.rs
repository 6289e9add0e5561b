//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "longbox")]
#[command(about = "Tag, rename and file digital comic archives", long_about = None)]
pub(crate) struct Cli {
    /// Settings file (defaults to ~/.config/longbox/settings.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub(crate) struct ImportArgs {
    /// Folder containing the archives to import
    pub folder: PathBuf,

    /// Pause after lookups so the sidecars can be edited by hand
    #[arg(long)]
    pub manual_edit: bool,

    /// Pick every conflicting field by hand, ignoring the resolution order
    #[arg(long)]
    pub resolve_manually: bool,

    /// Leave the source archives in place
    #[arg(long)]
    pub keep_source: bool,

    /// Collection root to file archives under (overrides the settings)
    #[arg(long)]
    pub collection_root: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Import every archive in a folder into the collection
    Import(ImportArgs),

    /// Show what a sidecar file contains and where it would be filed
    Inspect {
        /// Metadata.json, ComicInfo.xml or ComicData.xml
        file: PathBuf,
    },

    /// Rewrite a sidecar in another format (chosen by the output file name)
    Convert {
        input: PathBuf,

        output: PathBuf,

        /// Overwrite the output file if it exists
        #[arg(short, long)]
        force: bool,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current settings (secrets masked)
    Show,

    /// Print the settings file path
    Path,

    /// Write a settings file with the defaults
    Init,
}
