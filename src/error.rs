// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with user-facing messages.
//!
//! Each failed backend operation maps to its own variant carrying the
//! message the UI shows: the server-supplied `detail` when the error body
//! parses, otherwise a per-operation fallback. 4xx and 5xx responses are
//! treated identically.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Registration(String),

    #[error("{0}")]
    Login(String),

    #[error("{0}")]
    FetchActivities(String),

    #[error("{0}")]
    CreateActivity(String),

    #[error("{0}")]
    UpdateActivity(String),

    #[error("{0}")]
    DeleteActivity(String),

    #[error("Token storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Fallback shown when registration fails without a server detail.
    pub const REGISTRATION_FAILED: &'static str = "Registration failed";
    /// Fallback shown when login fails without a server detail.
    pub const LOGIN_FAILED: &'static str = "Login failed";
    /// Fallback for a failed activity list fetch (never carries a detail).
    pub const FETCH_FAILED: &'static str = "Failed to fetch activities";
    /// Fallback shown when an activity create fails without a server detail.
    pub const CREATE_FAILED: &'static str = "Failed to create activity";
    /// Fallback shown when an activity update fails without a server detail.
    pub const UPDATE_FAILED: &'static str = "Failed to update activity";
    /// Fallback for a failed activity delete (never carries a detail).
    pub const DELETE_FAILED: &'static str = "Failed to delete activity";

    /// The message the UI surfaces for this error.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// True if this error came from an authentication operation.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AppError::Registration(_) | AppError::Login(_))
    }
}

/// Result type alias for client and controller code.
pub type Result<T> = std::result::Result<T, AppError>;
