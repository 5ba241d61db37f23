use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::proknow::renaming::error::{Result, SyncError};

/// API key pair downloaded from the ProKnow user profile page.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub id: String,
    pub secret: String,
}

impl Credentials {
    /// Loads credentials from a JSON file of the form
    /// `{"id": "...", "secret": "..."}`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SyncError::MissingInput(path.to_path_buf()));
        }
        let data = fs::read_to_string(path)?;
        let credentials: Credentials =
            serde_json::from_str(&data).map_err(|error| SyncError::InvalidCredentials {
                path: path.to_path_buf(),
                reason: error.to_string(),
            })?;

        let missing = |field: &str| SyncError::InvalidCredentials {
            path: path.to_path_buf(),
            reason: format!("'{field}' must not be empty"),
        };
        if credentials.id.trim().is_empty() {
            return Err(missing("id"));
        }
        if credentials.secret.trim().is_empty() {
            return Err(missing("secret"));
        }
        Ok(credentials)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("id", &self.id)
            .field("secret", &"<redacted>")
            .finish()
    }
}
