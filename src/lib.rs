//! Devex - developer workstation assistant.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── vault         # Secret CRUD commands
//! │   ├── repo          # Repository catalog commands
//! │   ├── bookmark      # Bookmark commands
//! │   ├── app           # Application listing
//! │   ├── git           # Multi-repo git workflows
//! │   ├── prompt        # Terminal confirmation
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── storage/      # storage.toml document, atomic saves, migrations
//!     ├── cipher/       # Cipher trait and age implementation
//!     ├── identity      # Machine-local x25519 identity
//!     ├── vault/        # Encrypted secret CRUD
//!     ├── catalog       # Repositories, bookmarks, applications
//!     ├── config        # config.toml settings
//!     ├── runner        # External command execution
//!     ├── git           # Git step vocabulary
//!     └── sync/         # Multi-repository orchestration
//! ```
//!
//! # Features
//!
//! - Age-based encryption of vault values with a machine-local key
//! - Versioned, atomically written local storage
//! - Batch git workflows that report per-repository results

pub mod cli;
pub mod core;
pub mod error;
