use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitLogError {
    #[error("Git binary does not exist or cannot be executed: {bin}")]
    BinaryNotFound { bin: String },

    #[error("Cannot enter working directory {path}: {source}")]
    InvalidWorkingDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a git repository: {path}")]
    NotARepository { path: PathBuf },

    #[error("Git command failed: {command}\n{output}")]
    CommandFailed { command: String, output: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GitLogError>;
