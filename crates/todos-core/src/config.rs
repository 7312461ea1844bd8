//! Optional YAML configuration, read from `todos.yaml` in the working
//! directory. Every field has a default; a missing file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::paths;

fn default_port() -> u16 {
    4664
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database file path. Defaults to `~/.todos/todos.db` when unset.
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shared token gating non-local requests. Unset disables the gate.
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: None,
            port: default_port(),
            auth_token: None,
        }
    }
}

impl Config {
    /// Load `todos.yaml` from `dir`; a missing file yields defaults.
    pub fn load(dir: &Path) -> Result<Config> {
        let path = dir.join(paths::CONFIG_FILE);
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// The effective database path: the configured one, or the home-dir
    /// default.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => paths::default_db_path(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
