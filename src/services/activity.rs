// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity client for the fitness backend.
//!
//! All four operations attach `Authorization: Bearer <access_token>` built
//! from whatever the token store currently holds. There is deliberately no
//! preflight check: with no stored token the header carries an empty
//! credential and the server's rejection is surfaced like any other
//! failure.

use crate::error::{AppError, Result};
use crate::models::{Activity, ApiMessage, CreateActivityPayload, UpdateActivityPayload};
use crate::services::auth::error_detail;
use crate::storage::TokenStore;

/// Client for the `/activities/` endpoints.
#[derive(Clone)]
pub struct ActivityClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

impl ActivityClient {
    /// Create a new activity client against the given base URL.
    pub fn new(base_url: impl Into<String>, tokens: TokenStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            tokens,
        }
    }

    /// List all activities for the authenticated user.
    pub async fn list(&self) -> Result<Vec<Activity>> {
        let url = format!("{}/activities/", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.bearer_token())
            .send()
            .await
            .map_err(|e| AppError::FetchActivities(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::FetchActivities(
                AppError::FETCH_FAILED.to_string(),
            ));
        }

        let activities: Vec<Activity> = response
            .json()
            .await
            .map_err(|e| AppError::FetchActivities(format!("JSON parse error: {}", e)))?;

        tracing::debug!(count = activities.len(), "Fetched activities");
        Ok(activities)
    }

    /// Create a new activity, returning the server-assigned record.
    pub async fn create(&self, payload: &CreateActivityPayload) -> Result<Activity> {
        let url = format!("{}/activities/", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.bearer_token())
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::CreateActivity(e.to_string()))?;

        if !response.status().is_success() {
            let detail = error_detail(response).await;
            return Err(AppError::CreateActivity(
                detail.unwrap_or_else(|| AppError::CREATE_FAILED.to_string()),
            ));
        }

        let activity: Activity = response
            .json()
            .await
            .map_err(|e| AppError::CreateActivity(format!("JSON parse error: {}", e)))?;

        tracing::info!(activity_id = activity.id, "Activity created");
        Ok(activity)
    }

    /// Replace an activity with the full payload (no partial update).
    pub async fn update(&self, id: i64, payload: &UpdateActivityPayload) -> Result<ApiMessage> {
        let url = format!("{}/activities/{}/", self.base_url, id);

        let response = self
            .http
            .put(&url)
            .bearer_auth(self.bearer_token())
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::UpdateActivity(e.to_string()))?;

        if !response.status().is_success() {
            let detail = error_detail(response).await;
            return Err(AppError::UpdateActivity(
                detail.unwrap_or_else(|| AppError::UPDATE_FAILED.to_string()),
            ));
        }

        let ack = response
            .json()
            .await
            .map_err(|e| AppError::UpdateActivity(format!("JSON parse error: {}", e)))?;

        tracing::info!(activity_id = id, "Activity updated");
        Ok(ack)
    }

    /// Delete an activity. Success returns nothing (empty body).
    pub async fn delete(&self, id: i64) -> Result<()> {
        let url = format!("{}/activities/{}/", self.base_url, id);

        let response = self
            .http
            .delete(&url)
            .bearer_auth(self.bearer_token())
            .send()
            .await
            .map_err(|e| AppError::DeleteActivity(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::DeleteActivity(
                AppError::DELETE_FAILED.to_string(),
            ));
        }

        tracing::info!(activity_id = id, "Activity deleted");
        Ok(())
    }

    /// Bearer credential from the store; empty when no token is stored.
    fn bearer_token(&self) -> String {
        self.tokens.access_token().unwrap_or_default()
    }
}
