use crate::config::SETTINGS_ENV;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for copyway
#[derive(Parser, Debug, Clone)]
#[command(name = "copyway")]
#[command(about = "A CLI tool for copying the active document into configured destination folders")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Settings file path
    #[arg(long, value_name = "PATH", env = SETTINGS_ENV, global = true)]
    pub settings: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Copy a file to one of the configured destinations
    Copy(CopyArgs),

    /// Manage configured destinations
    #[command(subcommand)]
    Destinations(DestinationsCommand),
}

/// Arguments for the copy subcommand
#[derive(Parser, Debug, Clone)]
pub struct CopyArgs {
    /// File to copy
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Destination by 1-based index or exact description (skips the selection prompt)
    #[arg(short, long, value_name = "DESTINATION")]
    pub destination: Option<String>,

    /// What to do when the file already exists at a destination that does not allow overwriting
    #[arg(long, value_enum, value_name = "ACTION", default_value_t = OnConflict::Ask)]
    pub on_conflict: OnConflict,
}

/// Collision policy chosen on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnConflict {
    /// Ask on the terminal
    Ask,
    Overwrite,
    Rename,
    Cancel,
}

/// Destination management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum DestinationsCommand {
    /// List configured destinations
    List,

    /// Add a destination
    Add(AddDestinationArgs),

    /// Remove a destination by 1-based index
    Remove {
        #[arg(value_name = "INDEX")]
        index: usize,
    },
}

/// Arguments for adding a destination
#[derive(Parser, Debug, Clone)]
pub struct AddDestinationArgs {
    /// Destination folder; a leading ~ expands to the home directory
    #[arg(long, value_name = "PATH")]
    pub path: String,

    /// Label shown when choosing a destination
    #[arg(long, value_name = "TEXT")]
    pub description: String,

    /// Replace existing files without asking
    #[arg(long)]
    pub overwrite: bool,

    /// Extension for copies, with or without the dot; empty strips it
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,
}
