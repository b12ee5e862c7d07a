//! Interactive confirmation.

use std::io::{self, IsTerminal};

use crate::cli::output;
use crate::core::confirm::{Answer, Confirm};
use crate::error::Result;

/// Asks on the terminal, defaulting to no.
pub struct Interactive;

impl Confirm for Interactive {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        if !io::stdin().is_terminal() {
            output::warn("not a terminal, declining (pass --yes to proceed)");
            return Ok(false);
        }

        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(Into::into)
    }
}

/// The confirmation source for this invocation.
pub fn gate(assume_yes: bool) -> Box<dyn Confirm> {
    if assume_yes {
        Box::new(Answer(true))
    } else {
        Box::new(Interactive)
    }
}
