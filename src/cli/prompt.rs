//! Terminal prompts for choosing a destination and resolving collisions

use crate::cli::OnConflict;
use crate::config::Destination;
use crate::operations::command::{ConflictChoice, Prompter};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// `Prompter` that reads answers line by line
///
/// Questions go to `output`; an empty line or end of input cancels.
pub struct TerminalPrompter<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
    on_conflict: OnConflict,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stdin/stderr, keeping stdout for notices
    #[must_use]
    pub fn stdio(on_conflict: OnConflict) -> Self {
        Self::new(io::stdin().lock(), io::stderr(), on_conflict)
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W, on_conflict: OnConflict) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
            on_conflict,
        }
    }

    /// Ask `question` and return the trimmed answer; `None` on EOF or I/O failure
    fn ask(&self, question: &str) -> Option<String> {
        let mut output = self.output.borrow_mut();
        if let Err(e) = write!(output, "{question}").and_then(|()| output.flush()) {
            warn!("Failed to write prompt: {e}");
            return None;
        }
        drop(output);

        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_owned()),
            Err(e) => {
                warn!("Failed to read answer: {e}");
                None
            }
        }
    }

    fn say(&self, message: &str) {
        if let Err(e) = writeln!(self.output.borrow_mut(), "{message}") {
            warn!("Failed to write prompt: {e}");
        }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn select_destination(&self, destinations: &[Destination]) -> Option<usize> {
        self.say("Select a destination:");
        for (index, destination) in destinations.iter().enumerate() {
            self.say(&format!("  {}. {}", index + 1, destination.description));
        }

        loop {
            let answer = self.ask("> ")?;
            if answer.is_empty() {
                return None;
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=destinations.len()).contains(&n) => return Some(n - 1),
                _ => self.say(&format!(
                    "Enter a number between 1 and {}",
                    destinations.len()
                )),
            }
        }
    }

    fn resolve_conflict(&self, file_name: &str) -> ConflictChoice {
        match self.on_conflict {
            OnConflict::Overwrite => return ConflictChoice::Overwrite,
            OnConflict::Rename => return ConflictChoice::Rename,
            OnConflict::Cancel => return ConflictChoice::Cancel,
            OnConflict::Ask => {}
        }

        let question =
            format!("\"{file_name}\" already exists. [o]verwrite, [r]ename, [c]ancel? ");
        match self.ask(&question).as_deref().map(str::to_lowercase).as_deref() {
            Some("o" | "overwrite") => ConflictChoice::Overwrite,
            Some("r" | "rename") => ConflictChoice::Rename,
            _ => ConflictChoice::Cancel,
        }
    }
}
