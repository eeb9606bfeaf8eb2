// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login page controller.

use crate::models::LoginPayload;
use crate::services::AuthClient;
use crate::ui::notify::Notifications;
use crate::ui::Route;

/// State and actions of the login page.
pub struct LoginPage {
    auth: AuthClient,
    pub username: String,
    pub password: String,
    /// True while the login call is in flight
    pub submitting: bool,
    pub notifications: Notifications,
    redirect: Option<Route>,
}

impl LoginPage {
    pub fn new(auth: AuthClient) -> Self {
        Self {
            auth,
            username: String::new(),
            password: String::new(),
            submitting: false,
            notifications: Notifications::default(),
            redirect: None,
        }
    }

    /// Submit the entered credentials.
    ///
    /// Success persists the token pair (inside the auth client) and
    /// queues navigation to the dashboard; rejection queues the server's
    /// message and leaves the session untouched.
    pub async fn submit(&mut self) {
        self.submitting = true;

        let payload = LoginPayload {
            username: self.username.clone(),
            password: self.password.clone(),
        };

        match self.auth.login(&payload).await {
            Ok(_) => {
                self.notifications.success("Login successful!");
                self.redirect = Some(Route::Dashboard);
            }
            Err(e) => {
                tracing::warn!(username = %payload.username, "Login rejected");
                self.notifications.error(e.user_message());
            }
        }

        self.submitting = false;
    }

    /// Submit button label, accounting for an in-flight login.
    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Signing in..."
        } else {
            "Sign In"
        }
    }

    /// Take the queued navigation, if any.
    pub fn take_redirect(&mut self) -> Option<Route> {
        self.redirect.take()
    }
}
