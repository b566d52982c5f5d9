use std::sync::Arc;

use anyhow::Result;
use log::debug;

use crate::storage::Storage;

/// Holds the login token of the current employee.
///
/// The session is handed to the HTTP client and the route guard when they are
/// built; both read the token through it at the moment they need it. Cloning
/// is cheap and every clone observes the same storage scope.
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn Storage>,
}

impl Session {
    pub const TOKEN_KEY: &'static str = "employeeToken";

    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Replaces the held token. At most one token is kept.
    pub fn set(&self, token: &str) -> Result<()> {
        debug!("Save session token");
        self.storage.set_item(Self::TOKEN_KEY, token)
    }

    /// Returns the held token. An empty stored value counts as no token.
    pub fn get(&self) -> Result<Option<String>> {
        let token = self.storage.get_item(Self::TOKEN_KEY)?;
        Ok(token.filter(|token| !token.is_empty()))
    }

    /// Drops the token by clearing the whole storage scope, which also removes
    /// any other key stored next to it.
    pub fn clear(&self) -> Result<()> {
        debug!("Clear session storage");
        self.storage.clear()
    }

    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.get()?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::MemoryStorage;

    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let storage = Arc::new(MemoryStorage::new());
        let session = Session::new(storage.clone());

        assert_eq!(session.get().unwrap(), None);
        assert!(!session.is_authenticated().unwrap());

        session.set("first").unwrap();
        assert_eq!(session.get().unwrap().as_deref(), Some("first"));
        assert!(session.is_authenticated().unwrap());

        session.set("second").unwrap();
        assert_eq!(session.get().unwrap().as_deref(), Some("second"));

        // Clones share the same scope
        let other = session.clone();
        assert_eq!(other.get().unwrap().as_deref(), Some("second"));

        storage.set_item("unrelated", "value").unwrap();
        session.clear().unwrap();
        assert_eq!(other.get().unwrap(), None);
        assert_eq!(storage.get_item("unrelated").unwrap(), None);
    }

    #[test]
    fn test_empty_token_is_absent() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(Session::TOKEN_KEY, "").unwrap();

        let session = Session::new(storage);
        assert_eq!(session.get().unwrap(), None);
        assert!(!session.is_authenticated().unwrap());
    }
}
