//! Domain types.

mod secret;
mod sync;

pub use secret::Secret;
pub use sync::{Outcome, RepoResult, Report, StepFailure};
