use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("title must not be empty")]
    TitleEmpty,

    #[error("title must be at most {max} characters, got {len}")]
    TitleTooLong { len: usize, max: usize },

    #[error("invalid todo id: {0}")]
    InvalidId(i64),

    #[error("todo not found: {0}")]
    TodoNotFound(i64),

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Db(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, TodoError>;
