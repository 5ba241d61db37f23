//! Confirmation strategies used before rules are pushed to ProKnow.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use console::style;
use tracing::info;

use crate::proknow::renaming::error::Result;
use crate::proknow::renaming::reconcile::ChangeSummary;

const QUESTION: &str = "Are you sure you wish to synchronize renaming rules?";

/// Decides whether pending changes may be submitted.
pub trait Confirm {
    fn confirm(&mut self, changes: &ChangeSummary) -> Result<bool>;
}

/// Accepts every change without asking. Used for `--yes`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&mut self, changes: &ChangeSummary) -> Result<bool> {
        info!(
            created = changes.created,
            updated = changes.updated,
            "confirmation skipped"
        );
        Ok(true)
    }
}

/// Asks a yes/no question on a line-based terminal. An empty answer means
/// yes; end of input means no.
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl PromptConfirm<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, _changes: &ChangeSummary) -> Result<bool> {
        loop {
            write!(self.output, "{QUESTION} [Y/n] ")?;
            self.output.flush()?;

            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                writeln!(self.output)?;
                return Ok(false);
            }

            match parse_answer(&answer) {
                Some(accepted) => return Ok(accepted),
                None => writeln!(
                    self.output,
                    "{}",
                    style("Please respond with 'yes' or 'no' (or 'y' or 'n').").red()
                )?,
            }
        }
    }
}

/// Interprets a yes/no answer. Blank answers take the affirmative default.
pub fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "" | "y" | "ye" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
