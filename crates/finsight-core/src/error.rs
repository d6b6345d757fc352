use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FinsightError {
    #[error("failed to parse input bundle: {0}")]
    BundleParse(String),

    #[error("failed to load benchmark profile from {path}: {reason}")]
    ProfileLoad { path: PathBuf, reason: String },

    #[error("invalid benchmark profile: {0}")]
    ProfileInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
