//! Core library components.
//!
//! Storage, encryption, the repository catalog and the git orchestrator.
//! Nothing in here prints; the CLI layer owns all terminal output.

pub mod catalog;
pub mod cipher;
pub mod config;
pub mod confirm;
pub mod constants;
pub mod domain;
pub mod git;
pub mod identity;
pub mod runner;
pub mod storage;
pub mod sync;
pub mod types;
pub mod vault;
