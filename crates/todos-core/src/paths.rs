use std::path::PathBuf;

use crate::error::{Result, TodoError};

/// Data directory under the user's home: `~/.todos`.
pub const DATA_DIR: &str = ".todos";

/// Database filename inside the data directory.
pub const DB_FILE: &str = "todos.db";

/// Config filename, looked up in the working directory.
pub const CONFIG_FILE: &str = "todos.yaml";

/// Default database location: `~/.todos/todos.db`.
pub fn default_db_path() -> Result<PathBuf> {
    let home = home::home_dir().ok_or(TodoError::HomeNotFound)?;
    Ok(home.join(DATA_DIR).join(DB_FILE))
}
