//! Repository catalog commands.

use std::path::PathBuf;

use crate::cli::output;
use crate::core::catalog;
use crate::core::storage::{Repository, Storage};
use crate::error::Result;

/// Add a repository to the catalog.
pub fn add(name: String, remote: String, branch: String, folder: PathBuf) -> Result<()> {
    let storage = Storage::open_default()?;
    let repo = Repository::new(name, remote, branch, folder);
    let label = output::key(&repo.name);
    catalog::add(&storage, repo)?;
    output::success(&format!("added {}", label));
    Ok(())
}

/// Remove a repository from the catalog.
pub fn rm(name: &str) -> Result<()> {
    let storage = Storage::open_default()?;
    catalog::remove(&storage, name)?;
    output::success(&format!("removed {}", output::key(name)));
    Ok(())
}

/// List cataloged repositories.
pub fn list(json: bool) -> Result<()> {
    let storage = Storage::open_default()?;
    let repos = catalog::repositories(&storage)?;

    if json {
        return output::json(&repos);
    }

    if repos.is_empty() {
        output::dimmed("no repositories cataloged");
        output::hint("devex repo add <NAME> --remote <URL> --folder <PATH>");
        return Ok(());
    }

    output::header(&format!("{} repositories", repos.len()));
    for repo in &repos {
        output::list_item(&format!(
            "{}  {}  {}",
            output::key(&repo.name),
            repo.default_branch,
            output::path(repo.working_folder.display())
        ));
    }
    Ok(())
}

/// Show one repository.
pub fn show(name: &str) -> Result<()> {
    let storage = Storage::open_default()?;
    let repo = catalog::resolve(&storage, name)?;

    output::header(&repo.name);
    output::kv("remote:", &repo.remote_location);
    output::kv("branch:", &repo.default_branch);
    output::kv("folder:", repo.working_folder.display());
    Ok(())
}
