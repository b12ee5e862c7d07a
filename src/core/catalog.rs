//! Repository catalog and bookmark management.
//!
//! Each function is one handler invocation: load the document, change it,
//! save it.

use tracing::info;

use crate::core::git;
use crate::core::storage::{Application, Repository, Storage};
use crate::error::{CatalogError, Result, ValidationError};

/// Resolve a repository by name.
///
/// # Errors
///
/// Returns `CatalogError::RepositoryNotFound` if no repository has that name.
pub fn resolve(storage: &Storage, name: &str) -> Result<Repository> {
    let doc = storage.load()?;
    doc.repository(name)
        .cloned()
        .ok_or_else(|| CatalogError::RepositoryNotFound(name.to_string()).into())
}

/// All cataloged repositories in catalog order.
pub fn repositories(storage: &Storage) -> Result<Vec<Repository>> {
    Ok(storage.load()?.repositories)
}

/// Add a repository to the catalog.
///
/// # Errors
///
/// Returns `ValidationError::EmptyField` for blank fields,
/// `ValidationError::OptionLike` for a branch starting with `-` and
/// `CatalogError::DuplicateRepository` if the name is already taken.
pub fn add(storage: &Storage, repository: Repository) -> Result<()> {
    if repository.name.trim().is_empty() {
        return Err(ValidationError::EmptyField("name").into());
    }
    if repository.remote_location.trim().is_empty() {
        return Err(ValidationError::EmptyField("remote").into());
    }
    if repository.default_branch.trim().is_empty() {
        return Err(ValidationError::EmptyField("branch").into());
    }
    git::ref_name("branch", &repository.default_branch)?;
    if repository.working_folder.as_os_str().is_empty() {
        return Err(ValidationError::EmptyField("folder").into());
    }

    let mut doc = storage.load()?;
    if doc.repository(&repository.name).is_some() {
        return Err(CatalogError::DuplicateRepository(repository.name).into());
    }

    info!(repository = %repository.name, "adding repository");
    doc.repositories.push(repository);
    storage.save(&doc)
}

/// Remove a repository from the catalog.
///
/// Every entry with that name is removed, which also repairs a catalog
/// that was corrupted into duplicates.
///
/// # Errors
///
/// Returns `CatalogError::RepositoryNotFound` if the name is unknown.
pub fn remove(storage: &Storage, name: &str) -> Result<()> {
    let mut doc = storage.load()?;
    let before = doc.repositories.len();
    doc.repositories.retain(|r| r.name != name);
    if doc.repositories.len() == before {
        return Err(CatalogError::RepositoryNotFound(name.to_string()).into());
    }

    info!(repository = name, "removed repository");
    storage.save(&doc)
}

/// All bookmarks in insertion order.
pub fn bookmarks(storage: &Storage) -> Result<Vec<String>> {
    Ok(storage.load()?.bookmarks)
}

/// Add a bookmark. Adding an existing bookmark is a no-op.
///
/// # Returns
///
/// `true` if the bookmark was added.
pub fn add_bookmark(storage: &Storage, bookmark: &str) -> Result<bool> {
    let bookmark = bookmark.trim();
    if bookmark.is_empty() {
        return Err(ValidationError::EmptyField("bookmark").into());
    }

    let mut doc = storage.load()?;
    if doc.bookmarks.iter().any(|b| b == bookmark) {
        return Ok(false);
    }
    doc.bookmarks.push(bookmark.to_string());
    storage.save(&doc)?;
    Ok(true)
}

/// Remove a bookmark.
///
/// # Errors
///
/// Returns `CatalogError::BookmarkNotFound` if it isn't bookmarked.
pub fn remove_bookmark(storage: &Storage, bookmark: &str) -> Result<()> {
    let mut doc = storage.load()?;
    let before = doc.bookmarks.len();
    doc.bookmarks.retain(|b| b != bookmark.trim());
    if doc.bookmarks.len() == before {
        return Err(CatalogError::BookmarkNotFound(bookmark.to_string()).into());
    }
    storage.save(&doc)
}

/// Registered applications.
pub fn applications(storage: &Storage) -> Result<Vec<Application>> {
    Ok(storage.load()?.applications)
}
