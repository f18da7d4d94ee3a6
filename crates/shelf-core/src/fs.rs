//! Filesystem helpers for replacing the snapshot file in one step.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write `contents` to `destination` through a sibling temp file.
///
/// The temp file is flushed to disk before it is renamed over the
/// destination, so readers see either the old or the new contents.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or the rename fails.
/// The temp file is removed on failure.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let temp_path = temp_sibling(destination);
    let written = fs::File::create(&temp_path).and_then(|mut file| {
        file.write_all(contents)?;
        file.sync_all()
    });
    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    rename_with_fallback(&temp_path, destination)
}

/// Rename `temp_path` over `destination`.
///
/// On Unix the rename replaces the destination in one step, so a failed
/// rename leaves the old file untouched. Windows refuses to rename over an
/// existing file; there the destination is removed and the rename retried.
/// The temp file is removed whenever the rename ultimately fails.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    let result = match fs::rename(temp_path, destination) {
        Ok(()) => Ok(()),
        #[cfg(windows)]
        Err(initial_err)
            if destination.is_file()
                && matches!(
                    initial_err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
        {
            fs::remove_file(destination)
                .and_then(|()| fs::rename(temp_path, destination))
                .map_err(|retry_err| {
                    io::Error::new(
                        retry_err.kind(),
                        format!(
                            "Atomic rename failed (initial: {}, retry: {})",
                            initial_err, retry_err
                        ),
                    )
                })
        }
        Err(err) => Err(err),
    };
    if result.is_err() {
        let _ = fs::remove_file(temp_path);
    }
    result
}

fn temp_sibling(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("snapshot"));
    name.push(format!(".{}.tmp", std::process::id()));
    destination.with_file_name(name)
}
