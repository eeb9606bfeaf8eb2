// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity models for the fitness backend API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Kind of logged activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Workout,
    Meal,
    Steps,
}

impl ActivityType {
    /// Label shown in the type selector.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Workout => "Workout",
            ActivityType::Meal => "Meal",
            ActivityType::Steps => "Steps",
        }
    }
}

/// Progress status of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Planned,
    InProgress,
    Completed,
}

impl ActivityStatus {
    /// Badge label, with the underscore replaced by a space.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityStatus::Planned => "planned",
            ActivityStatus::InProgress => "in progress",
            ActivityStatus::Completed => "completed",
        }
    }
}

/// Activity record as returned by the backend.
///
/// `id`, `created_at`, `updated_at` and `user` are server-owned and never
/// appear in write payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Server-assigned activity ID
    pub id: i64,
    /// Kind of activity (workout, meal, steps)
    pub activity_type: ActivityType,
    /// Activity title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Calendar date of the activity ("YYYY-MM-DD" on the wire)
    pub date: NaiveDate,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Step count, meaningful only when `activity_type` is steps
    pub steps: Option<u32>,
    /// Progress status
    pub status: ActivityStatus,
    /// Server creation timestamp (RFC 3339)
    pub created_at: String,
    /// Server update timestamp (RFC 3339)
    pub updated_at: String,
    /// Owning user ID
    pub user: i64,
}

/// Client-writable fields of an activity.
///
/// The entry form validates these before a submission is allowed to
/// fire; the backend re-validates on its side.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateActivityPayload {
    pub activity_type: ActivityType,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub date: NaiveDate,
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    pub status: ActivityStatus,
}

/// Updates send the full payload (replace, not patch).
pub type UpdateActivityPayload = CreateActivityPayload;
