// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Headless view layer: controllers and view models the rendering shell
//! drives. Nothing here performs rendering or owns a main loop.

pub mod card;
pub mod dashboard;
pub mod form;
pub mod login;
pub mod notify;

pub use card::{ActivityCard, ActivityIcon, StatusTone};
pub use dashboard::{Dashboard, DashboardStats};
pub use form::ActivityForm;
pub use login::LoginPage;
pub use notify::{Notification, NotificationKind, Notifications};

/// Application routes the controllers can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    /// Path as the shell's router knows it.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
        }
    }
}
