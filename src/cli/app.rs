//! Application listing.

use crate::cli::output;
use crate::core::catalog;
use crate::core::storage::Storage;
use crate::error::Result;

pub fn list(json: bool) -> Result<()> {
    let storage = Storage::open_default()?;
    let apps = catalog::applications(&storage)?;

    if json {
        return output::json(&apps);
    }

    if apps.is_empty() {
        output::dimmed("no applications registered");
        return Ok(());
    }

    for app in &apps {
        let mut line = app.path.display().to_string();
        for arg in &app.arguments {
            line.push(' ');
            line.push_str(arg);
        }
        output::kv(&format!("{}:", app.name), line);
    }
    Ok(())
}
