//! Confirmation gate.
//!
//! Destructive operations ask a [`Confirm`] before touching anything. The
//! orchestrator only sees yes or no; how the question is put to the user
//! is the caller's business.

use crate::error::Result;

/// A yes/no decision source.
pub trait Confirm {
    /// Ask `prompt`. `Ok(true)` means proceed.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// A fixed answer, for `--yes`, non-interactive sessions and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer(pub bool);

impl Confirm for Answer {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(self.0)
    }
}

impl<C: Confirm + ?Sized> Confirm for &C {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        (**self).confirm(prompt)
    }
}
