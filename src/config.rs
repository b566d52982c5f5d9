use std::path::PathBuf;
use std::{env, fs, io};

use anyhow::{Context, Result};
use clap::Args;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::dirs::{self, ensure_dir_exists};

/// Directories used by the client: configuration files are read from
/// `config_path`, durable state (the session scope) lives under `data_path`.
#[derive(Debug, Clone)]
pub struct PathSet {
    pub config_path: PathBuf,
    pub data_path: PathBuf,
}

impl PathSet {
    pub const CONFIG_ENV: &'static str = "EMDIR_CONFIG";
    pub const DATA_ENV: &'static str = "EMDIR_DATA";

    pub fn new(config_path: Option<PathBuf>, data_path: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => match env::var(Self::CONFIG_ENV) {
                Ok(path) if !path.is_empty() => PathBuf::from(path),
                _ => dirs::config_dir()?,
            },
        };

        let data_path = match data_path {
            Some(path) => path,
            None => match env::var(Self::DATA_ENV) {
                Ok(path) if !path.is_empty() => PathBuf::from(path),
                _ => dirs::data_dir()?,
            },
        };

        ensure_dir_exists(&config_path)
            .with_context(|| format!("ensure config directory: {}", config_path.display()))?;
        ensure_dir_exists(&data_path)
            .with_context(|| format!("ensure data directory: {}", data_path.display()))?;

        Ok(Self {
            config_path,
            data_path,
        })
    }

    pub fn load_config<T, F>(&self, name: &str, default_func: F) -> Result<T>
    where
        T: CommonConfig + DeserializeOwned,
        F: FnOnce() -> T,
    {
        let path = self.config_path.join(format!("{name}.toml"));
        let mut cfg: T = match fs::read_to_string(&path) {
            Ok(s) => toml::from_str(&s)
                .with_context(|| format!("parse config toml: {}", path.display()))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!("Config file for {name} not found, using defaults");
                default_func()
            }
            Err(err) => {
                return Err(err).context(format!("read config file: {}", path.display()));
            }
        };

        cfg.complete(self).context("validate config")?;
        Ok(cfg)
    }
}

pub trait CommonConfig {
    fn default() -> Self;
    fn complete(&mut self, ps: &PathSet) -> Result<()>;
}

/// See: [`shellexpand::full`].
pub fn expandenv(name: &str, s: impl AsRef<str>) -> Result<String> {
    let s =
        shellexpand::full(s.as_ref()).with_context(|| format!("expand env value for '{name}'"))?;
    Ok(s.to_string())
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Directory holding configuration files. Defaults to `$EMDIR_CONFIG`, or
    /// `~/.config/emdir` (`/etc/emdir` for root).
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory holding the session file. Defaults to `$EMDIR_DATA`, or
    /// `~/.local/share/emdir` (`/var/lib/emdir` for root).
    #[arg(long)]
    pub data_path: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn build_path_set(&self) -> Result<PathSet> {
        let ps = PathSet::new(self.config_path.clone(), self.data_path.clone())?;
        debug!("Use path set: {ps:?}");
        Ok(ps)
    }

    pub fn load<T>(&self, name: &str) -> Result<T>
    where
        T: CommonConfig + DeserializeOwned,
    {
        let ps = self.build_path_set()?;
        ps.load_config(name, T::default)
    }
}
