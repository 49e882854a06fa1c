//! # `Copyway`
//!
//! `Copyway` copies a document into one of several configured destination folders.
//! Each destination can forbid overwriting, in which case a name collision is
//! resolved by asking the user, and can rewrite the file extension of the copy.
//!
//! ## Usage
//!
//! **Configure a destination:**
//! ```sh
//! copyway destinations add --path ~/archive --description "Archive Folder"
//! ```
//!
//! **Copy a note:**
//! ```sh
//! copyway copy notes/today.md
//! copyway copy notes/today.md --destination "Archive Folder" --on-conflict rename
//! ```
//!
//! Settings live in `<config dir>/copyway/settings.json` unless `--settings` or
//! `COPYWAY_SETTINGS` points elsewhere. See `copyway --help` for more options.

use anyhow::Result;
use clap::Parser as _;
use copyway::cli::Args;
use copyway::error::CopywayError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Notices go to stdout; keep routine logs quiet unless asked for
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_target(false).with_env_filter(filter).init();

    match copyway::run(args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<CopywayError>()
                    .map_or(1, CopywayError::exit_code),
            );
        }
    }
}
