// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod auth;

pub use activity::{
    Activity, ActivityStatus, ActivityType, CreateActivityPayload, UpdateActivityPayload,
};
pub use auth::{ApiMessage, AuthResponse, LoginPayload, RegisterPayload};
