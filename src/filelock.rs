use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use anyhow::{Context, Result};
use file_lock::FileLock;

/// Reads the whole file under a shared lock. A missing file yields `None`.
pub fn read_file_lock(path: &Path) -> Result<Option<Vec<u8>>> {
    let lock_opts = file_lock::FileOptions::new().read(true);
    let mut file = match FileLock::lock(path, true, lock_opts) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("lock file '{}'", path.display()))
        }
    };

    let mut data = Vec::new();
    file.file
        .read_to_end(&mut data)
        .with_context(|| format!("read file '{}'", path.display()))?;
    Ok(Some(data))
}

/// Replaces the file content under an exclusive lock, creating the file when needed.
pub fn write_file_lock(path: &Path, data: &[u8]) -> Result<()> {
    let lock_opts = file_lock::FileOptions::new().write(true).create(true);
    let mut file = FileLock::lock(path, true, lock_opts)
        .with_context(|| format!("lock file '{}'", path.display()))?;

    // Truncate only once the lock is held, readers never see a partial file
    file.file
        .set_len(0)
        .and_then(|_| file.file.seek(SeekFrom::Start(0)))
        .with_context(|| format!("truncate file '{}'", path.display()))?;
    file.file
        .write_all(data)
        .with_context(|| format!("write file '{}'", path.display()))?;
    Ok(())
}
