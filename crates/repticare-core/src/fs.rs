//! Filesystem utilities for atomic collection writes.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// If the rename ultimately fails, the temp file is cleaned up.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        // Some platforms refuse to rename over an existing file.
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

/// Replace `destination` with `contents` so readers see either the old or the new file.
///
/// The bytes go to a sibling temp file first, are synced, then renamed into place.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let file_name = destination
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Destination has no file name"))?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(format!(".tmp-{}", std::process::id()));
    let temp_path = destination.with_file_name(temp_name);

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
