use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::filelock::{read_file_lock, write_file_lock};

use super::Storage;

/// Storage scope persisted as a JSON object in a single file.
///
/// Each operation reads the whole scope under the file lock, so concurrent
/// processes sharing the same file observe each other's writes.
pub struct FileStorage {
    path: PathBuf,
}

type Items = BTreeMap<String, String>;

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Items> {
        let data = match read_file_lock(&self.path)? {
            Some(data) => data,
            None => return Ok(Items::new()),
        };
        if data.is_empty() {
            return Ok(Items::new());
        }

        match serde_json::from_slice(&data) {
            Ok(items) => Ok(items),
            Err(_) => {
                warn!(
                    "Storage file '{}' has invalid data, we will ignore it",
                    self.path.display()
                );
                Ok(Items::new())
            }
        }
    }

    fn write(&self, items: &Items) -> Result<()> {
        let data = serde_json::to_vec(items).context("encode storage items")?;
        write_file_lock(&self.path, &data)
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let mut items = self.read()?;
        Ok(items.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read()?;
        items.insert(key.to_string(), value.to_string());
        self.write(&items)
    }

    fn clear(&self) -> Result<()> {
        debug!("Clear storage file '{}'", self.path.display());
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("remove storage file '{}'", self.path.display()))
            }
        }
    }
}
