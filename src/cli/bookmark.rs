//! Bookmark commands.

use crate::cli::output;
use crate::core::catalog;
use crate::core::storage::Storage;
use crate::error::Result;

/// Bookmark a path or URL.
pub fn add(target: &str) -> Result<()> {
    let storage = Storage::open_default()?;
    if catalog::add_bookmark(&storage, target)? {
        output::success(&format!("bookmarked {}", output::path(target.trim())));
    } else {
        output::dimmed(&format!("already bookmarked: {}", target.trim()));
    }
    Ok(())
}

/// Remove a bookmark.
pub fn rm(target: &str) -> Result<()> {
    let storage = Storage::open_default()?;
    catalog::remove_bookmark(&storage, target)?;
    output::success(&format!("removed {}", output::path(target.trim())));
    Ok(())
}

/// List bookmarks.
pub fn list(json: bool) -> Result<()> {
    let storage = Storage::open_default()?;
    let bookmarks = catalog::bookmarks(&storage)?;

    if json {
        return output::json(&bookmarks);
    }

    if bookmarks.is_empty() {
        output::dimmed("no bookmarks");
        return Ok(());
    }

    for bookmark in &bookmarks {
        output::list_item(bookmark);
    }
    Ok(())
}
