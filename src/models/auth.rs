// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Authentication request and response models.

use serde::{Deserialize, Serialize};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    /// Password confirmation, checked server-side
    pub password2: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

/// Token pair returned by a successful login.
///
/// Both tokens are opaque bearer strings; the client never inspects them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access: String,
    pub refresh: String,
}

/// Generic `{ "detail": ... }` acknowledgment the backend sends for
/// registration, updates, and error bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub detail: String,
}
