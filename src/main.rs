//! Devex - developer workstation assistant.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use devex::cli::output;
use devex::cli::{execute, Cli};
use devex::core::constants;
use devex::error::{CatalogError, CommandError, Error, StorageError, VaultError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("devex=debug")
        } else {
            EnvFilter::new("devex=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.yes) {
        let suggestion = match &e {
            Error::Vault(VaultError::AlreadyExists(_)) => Some("run: devex vault update"),
            Error::Catalog(CatalogError::RepositoryNotFound(_)) => Some("run: devex repo list"),
            Error::Command(CommandError::NotFound { .. }) => {
                Some("install git or set [git] program in config.toml")
            }
            Error::Storage(StorageError::NoHome) => Some("set DEVEX_HOME to a writable folder"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
