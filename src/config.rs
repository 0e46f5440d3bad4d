use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Remote collection the reconciliation loop reads from and new quotes
    /// are posted to.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    #[serde(default = "default_sync_interval")]
    pub sync_interval_secs: u64,

    #[serde(default = "default_auto_sync")]
    pub auto_sync: bool,
}

fn default_server_url() -> String {
    "https://jsonplaceholder.typicode.com/posts".to_string()
}

fn default_sync_interval() -> u64 {
    30
}

fn default_auto_sync() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            sync_interval_secs: default_sync_interval(),
            auto_sync: default_auto_sync(),
        }
    }
}

impl Config {
    pub fn data_dir() -> Result<PathBuf> {
        let dir = dirs::home_dir()
            .context("Could not determine home directory")?
            .join(".quotedeck");
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("config.toml"))
    }

    pub fn db_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("quotes.db"))
    }

    pub fn pid_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("quotedeck.pid"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config at {}", path.display()))?;
            toml::from_str(&contents).context("Failed to parse config.toml")
        } else {
            Ok(Self::default())
        }
    }
}
