//! `Copyway` - A CLI tool for copying the active document into configured destination folders
//!
//! This library resolves where a document lands inside a destination folder,
//! applies the destination's overwrite, rename and extension policies, and
//! reports the outcome as one of a fixed set of notices.

pub mod cli;
pub mod config;
pub mod error;
pub mod operations;
pub mod system;
pub mod utils;

use anyhow::Result;
use cli::{AddDestinationArgs, Args, Command, CopyArgs, DestinationsCommand, TerminalPrompter};
use config::{Destination, Settings, default_settings_path};
use error::CopywayError;
use operations::{ActiveFile, CopyFileCommand, CopyService, Notice, Prompter};
use std::io::Write;
use std::path::Path;
use system::{FileStore, RealFileStore};
use tracing::{debug, warn};

/// Main entry point for the copyway library
pub fn run(args: Args) -> Result<()> {
    let store = RealFileStore::new();
    let settings_path = args.settings.unwrap_or_else(default_settings_path);
    debug!("Using settings file {}", settings_path.display());

    match args.command {
        Command::Copy(copy_args) => {
            let prompter = TerminalPrompter::stdio(copy_args.on_conflict);
            match run_copy(&store, &settings_path, &copy_args, &prompter)? {
                Some(notice) => println!("{notice}"),
                None => debug!("Nothing copied"),
            }
            Ok(())
        }
        Command::Destinations(command) => {
            run_destinations(&store, &settings_path, command, &mut std::io::stdout())
        }
    }
}

/// Run the copy subcommand
///
/// Returns the success notice, `None` when the user cancelled, or a
/// `CopywayError::Copy` carrying the failure notice.
pub fn run_copy(
    store: &dyn FileStore,
    settings_path: &Path,
    args: &CopyArgs,
    prompter: &dyn Prompter,
) -> Result<Option<Notice>> {
    let settings = Settings::load(store, settings_path)?;

    let preselected;
    let destinations: &[Destination] = match args.destination.as_deref() {
        Some(selector) if !settings.destinations.is_empty() => {
            preselected = [select_destination(&settings.destinations, selector)?];
            &preselected
        }
        _ => &settings.destinations,
    };

    let active_file = load_active_file(store, &args.file);
    let command = CopyFileCommand::new(CopyService::new(store), destinations, prompter);

    match command.execute(active_file.as_ref()) {
        Some(notice) if notice.is_error() => Err(CopywayError::copy(notice).into()),
        outcome => Ok(outcome),
    }
}

/// Run a destinations subcommand, writing listings to `out`
pub fn run_destinations(
    store: &dyn FileStore,
    settings_path: &Path,
    command: DestinationsCommand,
    out: &mut dyn Write,
) -> Result<()> {
    let mut settings = Settings::load(store, settings_path)?;

    match command {
        DestinationsCommand::List => {
            if settings.destinations.is_empty() {
                writeln!(out, "No destinations configured")?;
            }
            for (index, destination) in settings.destinations.iter().enumerate() {
                writeln!(out, "{}", describe_destination(index, destination))?;
            }
            Ok(())
        }
        DestinationsCommand::Add(AddDestinationArgs {
            path,
            description,
            overwrite,
            extension,
        }) => {
            settings.add_destination(Destination {
                path,
                description,
                overwrite,
                extension,
            })?;
            settings.save(store, settings_path)?;
            let index = settings.destinations.len() - 1;
            writeln!(
                out,
                "Added {}",
                describe_destination(index, &settings.destinations[index])
            )?;
            Ok(())
        }
        DestinationsCommand::Remove { index } => {
            let removed = match index.checked_sub(1) {
                Some(position) => settings.remove_destination(position)?,
                None => {
                    return Err(CopywayError::configuration(
                        "Destination indexes start at 1",
                    )
                    .into());
                }
            };
            settings.save(store, settings_path)?;
            writeln!(out, "Removed \"{}\"", removed.description)?;
            Ok(())
        }
    }
}

/// Pick a destination by 1-based index or exact description
fn select_destination(destinations: &[Destination], selector: &str) -> Result<Destination> {
    let by_index = selector
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|position| destinations.get(position));

    by_index
        .or_else(|| destinations.iter().find(|d| d.description == selector))
        .cloned()
        .ok_or_else(|| {
            CopywayError::configuration(format!("Unknown destination: '{selector}'")).into()
        })
}

/// Read the file to copy; any failure means there is no active file
fn load_active_file(store: &dyn FileStore, path: &Path) -> Option<ActiveFile> {
    let name = path.file_name()?.to_string_lossy().into_owned();
    match store.read_to_string(path) {
        Ok(content) => Some(ActiveFile { name, content }),
        Err(e) => {
            warn!("Cannot read {}: {e}", path.display());
            None
        }
    }
}

fn describe_destination(index: usize, destination: &Destination) -> String {
    let mut line = format!(
        "{}. {} -> {}",
        index + 1,
        destination.description,
        destination.path
    );
    if destination.overwrite {
        line.push_str(" [overwrite]");
    }
    match destination.extension.as_deref() {
        Some("") => line.push_str(" [strip extension]"),
        Some(extension) => line.push_str(&format!(" [extension {extension}]")),
        None => {}
    }
    line
}
