// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard controller.
//!
//! Owns the core workflow:
//! 1. Guard the route on stored-token presence
//! 2. Load the activity list
//! 3. Wire create/update/delete to a full list reload
//! 4. Queue notifications and redirects for the shell
//!
//! Mutations never patch the in-memory list; every successful write is
//! followed by a fresh fetch.

use crate::models::{Activity, ActivityStatus, CreateActivityPayload, UpdateActivityPayload};
use crate::services::{ActivityClient, AuthClient};
use crate::ui::card::ActivityCard;
use crate::ui::form::ActivityForm;
use crate::ui::notify::Notifications;
use crate::ui::Route;

/// Counts shown in the stat tiles, recomputed from the in-memory list on
/// every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
}

/// State and actions of the dashboard page.
pub struct Dashboard {
    auth: AuthClient,
    client: ActivityClient,
    /// Last fetched activity list
    pub activities: Vec<Activity>,
    /// True until the first fetch settles
    pub loading: bool,
    /// Whether the activity dialog is open
    pub dialog_open: bool,
    /// Activity being edited; None means the dialog creates
    pub selected: Option<Activity>,
    /// True while a create/update call is in flight
    pub submitting: bool,
    /// Activity armed for deletion by the confirm modal
    pub pending_delete: Option<i64>,
    /// Queued toasts for the shell to drain
    pub notifications: Notifications,
    redirect: Option<Route>,
}

impl Dashboard {
    pub fn new(auth: AuthClient, client: ActivityClient) -> Self {
        Self {
            auth,
            client,
            activities: Vec::new(),
            loading: true,
            dialog_open: false,
            selected: None,
            submitting: false,
            pending_delete: None,
            notifications: Notifications::default(),
            redirect: None,
        }
    }

    /// Entry point: redirect to login when no token is stored, otherwise
    /// fetch the activity list.
    pub async fn mount(&mut self) {
        if !self.auth.is_authenticated() {
            self.redirect = Some(Route::Login);
            return;
        }
        self.reload().await;
    }

    /// Fetch the full activity list. The loading flag clears whether the
    /// fetch succeeds or fails.
    pub async fn reload(&mut self) {
        match self.client.list().await {
            Ok(activities) => self.activities = activities,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load activities");
                self.notifications.error("Failed to load activities");
            }
        }
        self.loading = false;
    }

    /// Submit the dialog: update when an activity is selected, create
    /// otherwise.
    pub async fn submit(&mut self, payload: CreateActivityPayload) {
        match self.selected.as_ref().map(|a| a.id) {
            Some(id) => self.update_activity(id, payload).await,
            None => self.create_activity(payload).await,
        }
    }

    async fn create_activity(&mut self, payload: CreateActivityPayload) {
        self.submitting = true;
        match self.client.create(&payload).await {
            Ok(_) => {
                self.notifications.success("Activity created successfully");
                self.dialog_open = false;
                self.reload().await;
            }
            Err(e) => self.notifications.error(e.user_message()),
        }
        self.submitting = false;
    }

    async fn update_activity(&mut self, id: i64, payload: UpdateActivityPayload) {
        self.submitting = true;
        match self.client.update(id, &payload).await {
            Ok(_) => {
                self.notifications.success("Activity updated successfully");
                self.dialog_open = false;
                self.selected = None;
                self.reload().await;
            }
            Err(e) => self.notifications.error(e.user_message()),
        }
        self.submitting = false;
    }

    /// Arm the delete confirmation modal.
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    /// Dismiss the delete confirmation modal.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Fire the armed delete. The pending id clears in both paths; the
    /// list reloads only on success.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete else {
            return;
        };
        match self.client.delete(id).await {
            Ok(()) => {
                self.notifications.success("Activity deleted successfully");
                self.pending_delete = None;
                self.reload().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, activity_id = id, "Delete failed");
                self.notifications.error("Failed to delete activity");
                self.pending_delete = None;
            }
        }
    }

    /// Clear the stored tokens and send the user back to login.
    pub fn logout(&mut self) {
        if let Err(e) = self.auth.logout() {
            tracing::warn!(error = %e, "Failed to clear tokens, continuing anyway");
        }
        self.notifications.success("Logged out successfully");
        self.redirect = Some(Route::Login);
    }

    /// Open the dialog in create mode.
    pub fn open_create(&mut self) {
        self.selected = None;
        self.dialog_open = true;
    }

    /// Open the dialog in edit mode for the given activity.
    pub fn open_edit(&mut self, activity: Activity) {
        self.selected = Some(activity);
        self.dialog_open = true;
    }

    /// Close the dialog and drop any selection.
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.selected = None;
    }

    /// A fresh form for the dialog's current subject. Rebuilt on every
    /// call so mode changes always reseed the fields.
    pub fn current_form(&self) -> ActivityForm {
        ActivityForm::new(self.selected.as_ref())
    }

    /// Card view models for the current list.
    pub fn cards(&self) -> Vec<ActivityCard> {
        self.activities.iter().map(ActivityCard::from_activity).collect()
    }

    /// Stat tile counts, derived from the in-memory list.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total: self.activities.len(),
            completed: self
                .activities
                .iter()
                .filter(|a| a.status == ActivityStatus::Completed)
                .count(),
            in_progress: self
                .activities
                .iter()
                .filter(|a| a.status == ActivityStatus::InProgress)
                .count(),
        }
    }

    /// Take the queued navigation, if any.
    pub fn take_redirect(&mut self) -> Option<Route> {
        self.redirect.take()
    }
}
