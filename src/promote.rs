use std::path;

use staticfile_core::Source;

use crate::error::*;

/// Serving directory, relative to the build directory.
pub const PUBLIC_DIR: &str = "public";

const STAGING_PREFIX: &str = ".staticfile-buildpack.approot.";

/// Move the served part of `app_root` into `build_dir/public`.
///
/// The new tree is assembled in a staging directory inside `build_dir` and
/// renamed into place, replacing any previous `public`. Between removing the
/// old `public` and the final rename there is no serving directory at all; a
/// crash in that window loses it.
pub fn promote(build_dir: &path::Path, app_root: &path::Path, host_dot_files: bool) -> Result<()> {
    let build_dir = dunce::canonicalize(build_dir).map_err(|e| Error::promotion(build_dir, e))?;
    let public_dir = build_dir.join(PUBLIC_DIR);

    if public_dir == app_root {
        log::debug!("Application root is already {}", public_dir.display());
        return Ok(());
    }

    let source = Source::new(app_root, host_dot_files).map_err(|e| Error::promotion(app_root, e))?;
    let children = source
        .children()
        .map_err(|e| Error::promotion(app_root, e))?;

    // Listed before staging exists so it can't pick itself up when
    // `app_root == build_dir`.
    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(&build_dir)
        .map_err(|e| Error::promotion(&build_dir, e))?;

    for child in &children {
        let Some(name) = child.file_name() else {
            continue;
        };
        staticfile_core::move_path(child, &staging.path().join(name))
            .map_err(|e| Error::promotion(child, e))?;
    }

    staticfile_core::remove_path(&public_dir).map_err(|e| Error::promotion(&public_dir, e))?;
    staticfile_core::move_path(staging.path(), &public_dir)
        .map_err(|e| Error::promotion(&public_dir, e))?;
    // Already renamed away; nothing left for the guard to clean up.
    let _ = staging.keep();

    log::debug!(
        "Promoted {} entries from {} into {}",
        children.len(),
        app_root.display(),
        public_dir.display()
    );
    Ok(())
}
