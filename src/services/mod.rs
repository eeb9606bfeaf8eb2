// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - stateless HTTP clients for the fitness backend.

pub mod activity;
pub mod auth;

pub use activity::ActivityClient;
pub use auth::AuthClient;
