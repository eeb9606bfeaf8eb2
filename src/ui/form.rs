// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity form dialog state.
//!
//! The form has two modes driven by an optional subject activity:
//! create mode seeds defaults, edit mode seeds from the activity. A
//! fresh form is built every time the dialog opens or its subject
//! changes. The form itself performs no network I/O.

use crate::error::Result;
use crate::models::{Activity, ActivityStatus, ActivityType, CreateActivityPayload};
use chrono::{NaiveDate, Utc};
use validator::Validate;

/// In-progress field values of the activity dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityForm {
    pub activity_type: ActivityType,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub duration_minutes: u32,
    pub steps: Option<u32>,
    pub status: ActivityStatus,
    /// True when seeded from an existing activity
    editing: bool,
}

impl ActivityForm {
    /// Build the form for the dialog: create defaults when no activity is
    /// supplied, otherwise seeded from the activity being edited.
    pub fn new(activity: Option<&Activity>) -> Self {
        match activity {
            Some(a) => Self {
                activity_type: a.activity_type,
                title: a.title.clone(),
                description: a.description.clone(),
                date: a.date,
                duration_minutes: a.duration_minutes,
                steps: a.steps,
                status: a.status,
                editing: true,
            },
            None => Self {
                activity_type: ActivityType::Workout,
                title: String::new(),
                description: String::new(),
                date: Utc::now().date_naive(),
                duration_minutes: 0,
                steps: None,
                status: ActivityStatus::Planned,
                editing: false,
            },
        }
    }

    /// Whether the step-count input is rendered. Only the steps type
    /// carries a count.
    pub fn shows_steps_field(&self) -> bool {
        self.activity_type == ActivityType::Steps
    }

    /// Set the step count. Zero normalizes to empty, matching the
    /// behavior of the numeric input it models.
    pub fn set_steps(&mut self, steps: Option<u32>) {
        self.steps = steps.filter(|s| *s > 0);
    }

    /// Package the current field values for submission.
    ///
    /// Fails when a required field is empty; a submission never fires
    /// with an incomplete form.
    pub fn payload(&self) -> Result<CreateActivityPayload> {
        let payload = CreateActivityPayload {
            activity_type: self.activity_type,
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date,
            duration_minutes: self.duration_minutes,
            steps: self.steps,
            status: self.status,
        };
        payload
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid form: {}", e))?;
        Ok(payload)
    }

    /// True when the form was seeded from an existing activity.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Dialog heading.
    pub fn dialog_title(&self) -> &'static str {
        if self.editing {
            "Edit Activity"
        } else {
            "Create New Activity"
        }
    }

    /// Dialog sub-heading.
    pub fn dialog_description(&self) -> &'static str {
        if self.editing {
            "Update your activity details"
        } else {
            "Add a new activity to your fitness journey"
        }
    }

    /// Submit button label, accounting for an in-flight submission.
    pub fn submit_label(&self, submitting: bool) -> &'static str {
        if submitting {
            "Saving..."
        } else if self.editing {
            "Update"
        } else {
            "Create"
        }
    }
}
