mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use anyhow::Result;

/// A durable key/value scope, the client-side analog of browser local storage.
///
/// Every key written by this client lives in one scope; [`Storage::clear`]
/// wipes the whole scope, not just a single key.
pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}
