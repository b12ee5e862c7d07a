//! Command-line interface.

pub mod app;
pub mod bookmark;
pub mod completions;
pub mod git;
pub mod output;
pub mod prompt;
pub mod repo;
pub mod vault;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Devex - repository catalog, encrypted vault and multi-repo git workflows.
#[derive(Parser)]
#[command(
    name = "devex",
    about = "Developer workstation assistant: repositories, secrets and git workflows",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Manage encrypted secrets
    Vault {
        #[command(subcommand)]
        action: VaultAction,
    },

    /// Manage the repository catalog
    Repo {
        #[command(subcommand)]
        action: RepoAction,
    },

    /// Manage bookmarks
    Bookmark {
        #[command(subcommand)]
        action: BookmarkAction,
    },

    /// Show registered applications
    App {
        #[command(subcommand)]
        action: AppAction,
    },

    /// Run git workflows across repositories
    Git {
        #[command(subcommand)]
        action: GitAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Vault subcommands.
#[derive(Subcommand)]
pub enum VaultAction {
    /// Encrypt and store a new secret
    Create {
        /// Secret key (e.g., api_token)
        #[arg(long)]
        key: String,
        /// Secret value
        #[arg(long)]
        value: String,
    },

    /// Decrypt and print a secret
    Get {
        /// Secret key
        #[arg(long)]
        key: String,
    },

    /// Re-encrypt an existing secret with a new value
    Update {
        /// Secret key
        #[arg(long)]
        key: String,
        /// New secret value
        #[arg(long)]
        value: String,
    },

    /// Delete a secret
    Rm {
        /// Secret key
        #[arg(long)]
        key: String,
    },

    /// List secret keys
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Repository catalog subcommands.
#[derive(Subcommand)]
pub enum RepoAction {
    /// Add a repository to the catalog
    Add {
        /// Unique repository name
        name: String,
        /// Clone URL
        #[arg(long)]
        remote: String,
        /// Default branch
        #[arg(long, default_value = "main")]
        branch: String,
        /// Local working folder
        #[arg(long)]
        folder: PathBuf,
    },

    /// Remove a repository from the catalog
    Rm {
        /// Repository name
        name: String,
    },

    /// List cataloged repositories
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one repository
    Show {
        /// Repository name
        name: String,
    },
}

/// Bookmark subcommands.
#[derive(Subcommand)]
pub enum BookmarkAction {
    /// Bookmark a path or URL
    Add {
        /// Path or URL
        target: String,
    },

    /// Remove a bookmark
    Rm {
        /// Path or URL
        target: String,
    },

    /// List bookmarks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Application subcommands.
#[derive(Subcommand)]
pub enum AppAction {
    /// List registered applications
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Git workflow subcommands.
#[derive(Subcommand)]
pub enum GitAction {
    /// Clone every cataloged repository at its default branch
    CloneAll,

    /// Clone one cataloged repository into a folder
    Clone {
        /// Repository name
        name: String,
        /// Target folder
        folder: PathBuf,
    },

    /// Discard local changes and pull the latest in every repository
    Latest {
        /// Branch to check out instead of each repository's default
        #[arg(short, long)]
        branch: Option<String>,
        /// Remove untracked and ignored files instead of a hard reset
        #[arg(long)]
        clean: bool,
    },

    /// Create and push an issue branch in the primary and shared-service repositories
    Branch {
        /// Issue id used as the branch name
        issue: String,
        /// Primary repository folder
        #[arg(long, default_value = ".")]
        base: PathBuf,
    },

    /// Hard-reset and sync the shared-service repository
    SyncShared {
        /// Primary repository folder containing the shared service
        #[arg(long, default_value = ".")]
        base: PathBuf,
    },

    /// Set git user name and email globally and in every repository
    Profile {
        /// User name (defaults to your account's full name)
        #[arg(long)]
        name: Option<String>,
        /// Email address
        #[arg(long)]
        email: String,
    },
}

/// Execute a command.
pub fn execute(command: Command, assume_yes: bool) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Vault { action } => match action {
            VaultAction::Create { key, value } => vault::create(&key, &value),
            VaultAction::Get { key } => vault::get(&key),
            VaultAction::Update { key, value } => vault::update(&key, &value),
            VaultAction::Rm { key } => vault::rm(&key),
            VaultAction::List { json } => vault::list(json),
        },
        Repo { action } => match action {
            RepoAction::Add {
                name,
                remote,
                branch,
                folder,
            } => repo::add(name, remote, branch, folder),
            RepoAction::Rm { name } => repo::rm(&name),
            RepoAction::List { json } => repo::list(json),
            RepoAction::Show { name } => repo::show(&name),
        },
        Bookmark { action } => match action {
            BookmarkAction::Add { target } => bookmark::add(&target),
            BookmarkAction::Rm { target } => bookmark::rm(&target),
            BookmarkAction::List { json } => bookmark::list(json),
        },
        App { action } => match action {
            AppAction::List { json } => app::list(json),
        },
        Git { action } => {
            let gate = prompt::gate(assume_yes);
            match action {
                GitAction::CloneAll => git::clone_all(),
                GitAction::Clone { name, folder } => git::clone_one(&name, &folder),
                GitAction::Latest { branch, clean } => {
                    git::latest(gate.as_ref(), branch.as_deref(), clean)
                }
                GitAction::Branch { issue, base } => git::branch(&base, &issue),
                GitAction::SyncShared { base } => git::sync_shared(gate.as_ref(), &base),
                GitAction::Profile { name, email } => git::profile(name, &email),
            }
        }
        Completions { shell } => completions::execute(shell),
    }
}
