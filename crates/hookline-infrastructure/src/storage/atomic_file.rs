//! Atomic whole-file replacement and exclusive file locking.
//!
//! Shared by every file-backed store:
//! - **Atomicity**: writes go to a sibling tmp file, then an atomic rename
//! - **Isolation**: an `fs2` exclusive lock on a sibling `.lock` file
//! - **Durability**: explicit fsync before rename

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

/// Replaces the contents of `path` with `bytes` atomically.
///
/// The parent directory is created if needed. On failure the tmp file is
/// removed (best effort) and `path` keeps its previous contents.
pub(crate) fn atomic_write(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path)?;
    let result = write_and_rename(&tmp_path, path, bytes);
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_and_rename(tmp_path: &Path, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut tmp_file = File::create(tmp_path)?;
    tmp_file.write_all(bytes)?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    fs::rename(tmp_path, path)
}

/// Returns `.<file_name>.tmp` next to `path`.
pub(crate) fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let parent = path.parent().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory")
    })?;

    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no file name"))?;

    let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
    Ok(parent.join(tmp_name))
}

/// A file lock guard that releases the lock when dropped.
///
/// The `.lock` file stays on disk. Every writer must lock the same inode, so
/// it is never unlinked; closing the handle releases the lock.
pub(crate) struct FileLock {
    #[allow(dead_code)]
    file: File,
}

impl FileLock {
    /// Acquires an exclusive lock guarding `path`.
    pub(crate) fn acquire(path: &Path) -> io::Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()?;
        }

        Ok(FileLock { file })
    }
}
