//! Static endpoint catalog served at `GET /api`.
//!
//! The catalog is a JSON document describing every public endpoint. It is
//! read from disk on each request, so edits to the file show up without a
//! restart.

use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Location of the endpoint catalog file.
#[derive(Debug, Clone)]
pub struct EndpointCatalog {
    path: PathBuf,
}

impl EndpointCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the file cannot be read or is not valid JSON.
    pub async fn load(&self) -> Result<Value, AppError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::internal(format!(
                "Failed to read endpoint catalog {}: {e}",
                self.path.display()
            ))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            AppError::internal(format!(
                "Endpoint catalog {} is not valid JSON: {e}",
                self.path.display()
            ))
        })
    }
}
