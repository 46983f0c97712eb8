//! Application error types.

use std::path::PathBuf;

use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal error")]
    Internal(#[from] anyhow::Error),

    #[error("duplicate route path: {0}")]
    DuplicateRoute(String),

    #[error("default route {0} does not exist in the route table")]
    UnknownDefaultRoute(String),

    #[error("route table is empty")]
    EmptyRouteTable,

    #[error("failed to parse site file")]
    SiteParse(#[from] toml::de::Error),

    #[error("template error")]
    Template(#[from] tera::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl AppError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
