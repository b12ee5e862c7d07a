//! Forward migration of storage documents.
//!
//! Steps are additive only: they may add defaults but never drop or
//! rewrite existing data. Field defaults are filled in by serde during
//! deserialization; each step here handles what serde cannot.

use tracing::{debug, info};

use super::model::UserStorage;
use crate::core::constants::SCHEMA_VERSION;

/// Bring `doc` up to [`SCHEMA_VERSION`].
///
/// Returns the version the document had before migration, or `None` if it
/// was already current.
pub(super) fn migrate(doc: &mut UserStorage) -> Option<u32> {
    let from = doc.version;
    if from >= SCHEMA_VERSION {
        return None;
    }

    while doc.version < SCHEMA_VERSION {
        match doc.version {
            0 => v0_to_v1(doc),
            1 => v1_to_v2(doc),
            _ => unreachable!("no migration step from version {}", doc.version),
        }
    }

    info!(from, to = SCHEMA_VERSION, "migrated storage document");
    Some(from)
}

/// Unversioned documents gain the version field. Missing containers were
/// already defaulted on load.
fn v0_to_v1(doc: &mut UserStorage) {
    debug!("migrating storage v0 -> v1");
    doc.version = 1;
}

/// Version 2 introduced application launch arguments, which default to empty.
fn v1_to_v2(doc: &mut UserStorage) {
    debug!("migrating storage v1 -> v2");
    doc.version = 2;
}
