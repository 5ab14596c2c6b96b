use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundlerError {
    #[error("failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list directory: {path}")]
    DirList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("agent '{id}' not found in any tier")]
    AgentNotFound { id: String },

    #[error("team '{id}' not found in any tier")]
    TeamNotFound { id: String },

    #[error("path {path} is outside the source root {root}")]
    PathOutsideRoot { path: PathBuf, root: PathBuf },
}
