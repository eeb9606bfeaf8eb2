// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Auth client for the fitness backend.
//!
//! Handles:
//! - User registration
//! - Login (persists the returned token pair as a side effect)
//! - Logout (clears the token store)

use crate::error::{AppError, Result};
use crate::models::{ApiMessage, AuthResponse, LoginPayload, RegisterPayload};
use crate::storage::TokenStore;

/// Client for the `/auth/` endpoints.
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

impl AuthClient {
    /// Create a new auth client against the given base URL.
    pub fn new(base_url: impl Into<String>, tokens: TokenStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            tokens,
        }
    }

    /// Register a new account.
    ///
    /// Returns the server acknowledgment on success. A rejection carries
    /// the server's `detail` message when present.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<ApiMessage> {
        let url = format!("{}/auth/register/", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::Registration(e.to_string()))?;

        if !response.status().is_success() {
            let detail = error_detail(response).await;
            return Err(AppError::Registration(
                detail.unwrap_or_else(|| AppError::REGISTRATION_FAILED.to_string()),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Registration(format!("JSON parse error: {}", e)))
    }

    /// Log in and persist the returned token pair.
    pub async fn login(&self, payload: &LoginPayload) -> Result<AuthResponse> {
        let url = format!("{}/auth/login/", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::Login(e.to_string()))?;

        if !response.status().is_success() {
            let detail = error_detail(response).await;
            return Err(AppError::Login(
                detail.unwrap_or_else(|| AppError::LOGIN_FAILED.to_string()),
            ));
        }

        let auth: AuthResponse = response
            .json()
            .await
            .map_err(|e| AppError::Login(format!("JSON parse error: {}", e)))?;

        self.tokens.set_tokens(&auth.access, &auth.refresh)?;
        tracing::info!(username = %payload.username, "Login succeeded, tokens persisted");

        Ok(auth)
    }

    /// Clear the stored token pair.
    pub fn logout(&self) -> Result<()> {
        self.tokens.clear_tokens()?;
        tracing::info!("Logged out, tokens cleared");
        Ok(())
    }

    /// True iff an access token is stored. No expiry check is made; a
    /// stale token is only discovered when the server rejects a request.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_authenticated()
    }

    /// The token store backing this client.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }
}

/// Extract the `detail` message from an error body, if the body parses.
pub(crate) async fn error_detail(response: reqwest::Response) -> Option<String> {
    response
        .json::<ApiMessage>()
        .await
        .ok()
        .map(|m| m.detail)
}
