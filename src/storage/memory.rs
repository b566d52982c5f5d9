use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{bail, Result};

use super::Storage;

/// In-process storage. Nothing survives the process; used where the session
/// must be substituted, such as tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_items<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut HashMap<String, String>) -> T,
    {
        match self.items.lock() {
            Ok(mut items) => Ok(f(&mut items)),
            Err(_) => bail!("memory storage lock poisoned"),
        }
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.with_items(|items| items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.with_items(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn clear(&self) -> Result<()> {
        self.with_items(|items| items.clear())
    }
}
