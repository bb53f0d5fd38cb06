use crate::fetcher::Report;
use std::io::{self, BufRead, Write};

/// The "ask the operator before downloading" step, abstracted so the prompt
/// can be replaced by a command line flag or a scripted answer in tests.
pub trait Confirmation {
    /// Present the report and return whether the download should proceed.
    fn confirm(&mut self, report: &Report) -> bool;
}

/// Prints the report and blocks on stdin for an answer. Only a plain `y` is
/// affirmative, anything else declines.
pub struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn confirm(&mut self, report: &Report) -> bool {
        println!("{}", report);
        print!("Continue? [y|n] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }

        answer.trim() == "y"
    }
}

/// Non-interactive affirmative, for the `--yes` flag.
pub struct AssumeYes;

impl Confirmation for AssumeYes {
    fn confirm(&mut self, report: &Report) -> bool {
        println!("{}", report);
        true
    }
}
