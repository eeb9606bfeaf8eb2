// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only view model for one activity card.

use crate::models::{Activity, ActivityStatus, ActivityType};
use crate::time_utils::{format_card_date, format_thousands};

/// Icon shown next to the activity title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityIcon {
    Dumbbell,
    Utensils,
    Footprints,
}

/// Color tone of the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Primary,
}

/// Everything the card renders, precomputed from one activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub id: i64,
    pub icon: ActivityIcon,
    pub title: String,
    /// e.g. "Wed, Jan 15"
    pub date_label: String,
    pub status_label: String,
    pub status_tone: StatusTone,
    pub description: String,
    /// e.g. "45 minutes"
    pub duration_label: String,
    /// e.g. "12,000 steps"; absent when no (or zero) steps are stored
    pub steps_label: Option<String>,
}

impl ActivityCard {
    pub fn from_activity(activity: &Activity) -> Self {
        let icon = match activity.activity_type {
            ActivityType::Workout => ActivityIcon::Dumbbell,
            ActivityType::Meal => ActivityIcon::Utensils,
            ActivityType::Steps => ActivityIcon::Footprints,
        };

        let status_tone = match activity.status {
            ActivityStatus::Completed => StatusTone::Success,
            ActivityStatus::InProgress => StatusTone::Warning,
            ActivityStatus::Planned => StatusTone::Primary,
        };

        Self {
            id: activity.id,
            icon,
            title: activity.title.clone(),
            date_label: format_card_date(activity.date),
            status_label: activity.status.label().to_string(),
            status_tone,
            description: activity.description.clone(),
            duration_label: format!("{} minutes", activity.duration_minutes),
            steps_label: activity
                .steps
                .filter(|s| *s > 0)
                .map(|s| format!("{} steps", format_thousands(s))),
        }
    }
}
