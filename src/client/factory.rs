use std::sync::Arc;

use anyhow::Result;
use log::debug;

use crate::api::Api;
use crate::config::{CommonConfig, PathSet};
use crate::guard::RouteGuard;
use crate::session::Session;
use crate::storage::FileStorage;

use super::config::ClientConfig;
use super::Client;

/// Wires the session, the HTTP client, the facade and the route guard from
/// one client configuration.
pub struct ClientFactory {
    cfg: ClientConfig,
}

impl ClientFactory {
    pub fn new(cfg: ClientConfig) -> Self {
        Self { cfg }
    }

    pub fn load(ps: &PathSet) -> Result<Self> {
        let cfg = ps.load_config("client", ClientConfig::default)?;
        Ok(Self { cfg })
    }

    pub fn build_session(&self) -> Session {
        let path = self.cfg.session_path();
        debug!("Use session file '{}'", path.display());
        Session::new(Arc::new(FileStorage::new(path)))
    }

    pub fn build_client(&self, session: Session) -> Result<Client> {
        Client::new(&self.cfg.server, session, self.cfg.accept_invalid_certs)
    }

    /// Builds the facade together with a guard watching the same session.
    pub fn build(&self) -> Result<(Api, RouteGuard)> {
        let session = self.build_session();
        let guard = RouteGuard::new(session.clone());
        let client = self.build_client(session)?;
        Ok((Api::new(client), guard))
    }

    pub fn build_api(&self) -> Result<Api> {
        let client = self.build_client(self.build_session())?;
        Ok(Api::new(client))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.cfg
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use crate::guard::{Navigation, Route};

    use super::*;

    #[test]
    fn test_factory_load() {
        let base = PathBuf::from("_test_emdir_factory_load");
        let _ = fs::remove_dir_all(&base);
        let ps = PathSet::new(Some(base.join("config")), Some(base.join("data"))).unwrap();

        // No config file, defaults apply
        let factory = ClientFactory::load(&ps).unwrap();
        assert_eq!(
            factory.config().session_path(),
            ps.data_path.join("session.json")
        );

        fs::write(
            ps.config_path.join("client.toml"),
            "server = \"http://127.0.0.1:9000\"\n",
        )
        .unwrap();
        let factory = ClientFactory::load(&ps).unwrap();
        let (api, guard) = factory.build().unwrap();

        api.session().set("token").unwrap();
        assert_eq!(
            guard.check(Route::Profile).unwrap(),
            Navigation::Render(Route::Profile)
        );

        api.logout().unwrap();
        assert_eq!(
            guard.check(Route::Profile).unwrap(),
            Navigation::Redirect(Route::List)
        );

        fs::remove_dir_all(&base).unwrap();
    }
}
