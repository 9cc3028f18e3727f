use std::fs;
use std::io;
use std::path;

pub fn write_file(content: &[u8], dest_file: &path::Path) -> io::Result<()> {
    // create target directories if any exist
    if let Some(parent) = dest_file.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(dest_file, content)?;
    log::trace!("Wrote {}", dest_file.display());
    Ok(())
}

pub fn copy_file(src_file: &path::Path, dest_file: &path::Path) -> io::Result<()> {
    // create target directories if any exist
    if let Some(parent) = dest_file.parent() {
        fs::create_dir_all(parent)?;
    }

    log::debug!("Copying {src_file:?} to {dest_file:?}");
    fs::copy(src_file, dest_file)?;
    Ok(())
}

/// Rename `src` to `dest`; both must be on the same filesystem.
pub fn move_path(src: &path::Path, dest: &path::Path) -> io::Result<()> {
    log::debug!("Moving {src:?} to {dest:?}");
    fs::rename(src, dest)
}

/// Remove whatever is at `path`, directory or not. Missing paths are fine.
pub fn remove_path(path: &path::Path) -> io::Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    if metadata.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    log::trace!("Removed {}", path.display());
    Ok(())
}
