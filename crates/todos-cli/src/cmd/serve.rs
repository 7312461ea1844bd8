use std::path::Path;

use anyhow::Result;
use todos_core::config::Config;

/// `todos serve` — start the HTTP API with config from todos.yaml, flags
/// taking precedence.
pub fn run(db: Option<&Path>, port: Option<u16>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let mut config = Config::load(&cwd)?;
    if let Some(db) = db {
        config.database = Some(db.to_path_buf());
    }
    if let Some(port) = port {
        config.port = port;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(todos_server::serve(&config))
}
