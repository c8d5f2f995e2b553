use std::fs;
use std::path::Path;
use tracing::debug;

use crate::common::error::WorkspaceError;
use crate::common::result::{ResultExt, WorkspaceResult};

/// Point `link` at `target`, replacing an existing link or file
///
/// A real directory at `link` is never removed. Dangling links are replaced
/// like any other link.
pub fn replace_with_symlink(link: &Path, target: &Path) -> WorkspaceResult<()> {
    match fs::symlink_metadata(link) {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            debug!(link = %link.display(), "removing existing symlink");
            remove_link(link).with_filesystem_error(
                "Failed to remove existing symlink",
                Some(link.to_path_buf()),
            )?;
        }
        Ok(metadata) if metadata.is_dir() => {
            return Err(WorkspaceError::symlink_conflict(link));
        }
        Ok(_) => {
            debug!(link = %link.display(), "removing existing file");
            fs::remove_file(link)
                .with_filesystem_error("Failed to remove existing file", Some(link.to_path_buf()))?;
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_filesystem_error(
                "Failed to inspect symlink path",
                Some(link.to_path_buf()),
            );
        }
    }

    if let Some(parent) = link.parent() {
        fs::create_dir_all(parent).with_filesystem_error(
            "Failed to create symlink directory",
            Some(parent.to_path_buf()),
        )?;
    }

    create_dir_symlink(target, link)
        .with_filesystem_error("Failed to create symlink", Some(link.to_path_buf()))?;
    debug!(link = %link.display(), target = %target.display(), "created symlink");
    Ok(())
}

#[cfg(not(windows))]
fn remove_link(link: &Path) -> std::io::Result<()> {
    fs::remove_file(link)
}

// directory symlinks are directories on Windows
#[cfg(windows)]
fn remove_link(link: &Path) -> std::io::Result<()> {
    fs::remove_dir(link).or_else(|_| fs::remove_file(link))
}

#[cfg(unix)]
fn create_dir_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_dir_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

#[cfg(not(any(unix, windows)))]
fn create_dir_symlink(_target: &Path, _link: &Path) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "Symlinks are not supported on this platform",
    ))
}
