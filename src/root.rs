use std::path;

use staticfile_config::SiteConfig;

use crate::error::*;

/// Resolve the application root declared in `config` against `build_dir`.
///
/// Only existence and directory-ness are checked.
pub fn resolve_root(build_dir: &path::Path, config: &SiteConfig) -> Result<path::PathBuf> {
    let root = config.root_dir().unwrap_or(".");
    let joined = build_dir.join(root);

    let metadata = std::fs::metadata(&joined).map_err(|source| Error::RootNotFound {
        root: root.to_owned(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(Error::RootNotDirectory {
            root: root.to_owned(),
        });
    }

    let abs = dunce::canonicalize(&joined).map_err(|source| Error::RootNotFound {
        root: root.to_owned(),
        source,
    })?;
    Ok(abs)
}
