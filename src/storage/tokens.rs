// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed storage for the session token pair.
//!
//! The pair of opaque bearer tokens is the only state the client
//! persists. Every operation touches the file synchronously, so the
//! store survives restarts without any in-memory session to rebuild.
//! There is no expiry validation and no refresh flow; a stale access
//! token stays "authenticated" until the server rejects it.
//!
//! # File Format
//!
//! ```toml
//! access_token = "eyJhbGciOiJIUzI1NiIs..."
//! refresh_token = "eyJhbGciOiJIUzI1NiIs..."
//! ```

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of the token file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TokenFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
}

/// Persistent store for the access/refresh token pair.
///
/// Cloning is cheap; all clones read and write the same file.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite both tokens.
    pub fn set_tokens(&self, access: &str, refresh: &str) -> Result<()> {
        let file = TokenFile {
            access_token: Some(access.to_string()),
            refresh_token: Some(refresh.to_string()),
        };
        self.write_file(&file)
    }

    /// Current access token, or None when logged out.
    pub fn access_token(&self) -> Option<String> {
        self.read_file().ok().and_then(|f| f.access_token)
    }

    /// Current refresh token, or None when logged out.
    pub fn refresh_token(&self) -> Option<String> {
        self.read_file().ok().and_then(|f| f.refresh_token)
    }

    /// Remove both tokens. A missing file is not an error.
    pub fn clear_tokens(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to remove token file '{}': {}",
                self.path.display(),
                e
            ))),
        }
    }

    /// True iff an access token is present. No expiry check.
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    fn read_file(&self) -> Result<TokenFile> {
        if !self.path.exists() {
            return Ok(TokenFile::default());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            AppError::Storage(format!(
                "Failed to read token file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        toml::from_str(&contents).map_err(|e| {
            AppError::Storage(format!(
                "Corrupt token file '{}': {}",
                self.path.display(),
                e
            ))
        })
    }

    fn write_file(&self, file: &TokenFile) -> Result<()> {
        let contents = toml::to_string_pretty(file)
            .map_err(|e| AppError::Storage(format!("Failed to serialize tokens: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Storage(format!(
                    "Failed to create token directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        fs::write(&self.path, contents).map_err(|e| {
            AppError::Storage(format!(
                "Failed to write token file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        // Tokens are credentials: owner read/write only on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&self.path, permissions).map_err(|e| {
                AppError::Storage(format!(
                    "Failed to set permissions on '{}': {}",
                    self.path.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }
}
