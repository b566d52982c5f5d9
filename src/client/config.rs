use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::config::{expandenv, CommonConfig, PathSet};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClientConfig {
    /// Root url of the employee server, without the `/api` suffix.
    #[serde(default = "ClientConfig::default_server")]
    pub server: String,

    /// File keeping the session scope. Empty means `<data_path>/session.json`.
    #[serde(default = "ClientConfig::default_session_path")]
    pub session_path: String,

    #[serde(default = "ClientConfig::default_accept_invalid_certs")]
    pub accept_invalid_certs: bool,
}

impl CommonConfig for ClientConfig {
    fn default() -> Self {
        Self {
            server: Self::default_server(),
            session_path: Self::default_session_path(),
            accept_invalid_certs: Self::default_accept_invalid_certs(),
        }
    }

    fn complete(&mut self, ps: &PathSet) -> Result<()> {
        // The url itself is checked by Client::new.
        self.server = expandenv("server", &self.server)?;
        if self.server.is_empty() {
            bail!("server cannot be empty");
        }

        self.session_path = expandenv("session_path", &self.session_path)?;
        if self.session_path.is_empty() {
            let path = ps.data_path.join("session.json");
            self.session_path = format!("{}", path.display());
        }

        Ok(())
    }
}

impl ClientConfig {
    pub fn default_server() -> String {
        String::from("${EMDIR_SERVER:-http://localhost:8000}")
    }

    pub fn default_session_path() -> String {
        String::new()
    }

    pub fn default_accept_invalid_certs() -> bool {
        false
    }

    pub fn session_path(&self) -> PathBuf {
        PathBuf::from(&self.session_path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_client_config() {
        let base = PathBuf::from("_test_emdir_client_config");
        let _ = fs::remove_dir_all(&base);
        let ps = PathSet::new(Some(base.join("config")), Some(base.join("data"))).unwrap();

        let cfg: ClientConfig = ps.load_config("client", ClientConfig::default).unwrap();
        assert!(!cfg.server.contains("${"));
        assert!(!cfg.accept_invalid_certs);
        assert_eq!(cfg.session_path(), ps.data_path.join("session.json"));

        fs::write(
            ps.config_path.join("client.toml"),
            "server = \"https://hr.example.com\"\nsession_path = \"/tmp/emdir-session.json\"\naccept_invalid_certs = true\n",
        )
        .unwrap();
        let cfg: ClientConfig = ps.load_config("client", ClientConfig::default).unwrap();
        assert_eq!(cfg.server, "https://hr.example.com");
        assert_eq!(cfg.session_path, "/tmp/emdir-session.json");
        assert!(cfg.accept_invalid_certs);

        fs::write(ps.config_path.join("client.toml"), "server = \"\"\n").unwrap();
        assert!(ps
            .load_config::<ClientConfig, _>("client", ClientConfig::default)
            .is_err());

        fs::remove_dir_all(&base).unwrap();
    }
}
