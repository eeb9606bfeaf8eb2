// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fitness-Tracker client: log workouts, meals, and step counts against
//! the fitness REST backend.
//!
//! This crate is the complete non-rendering surface of the application:
//! typed models, the token store, two stateless HTTP clients, and the
//! headless page controllers a UI shell drives.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod time_utils;
pub mod ui;

use config::Config;
use services::{ActivityClient, AuthClient};
use storage::TokenStore;

/// Composition root: config, token store, and the two backend clients.
///
/// A rendering shell builds one of these and hands its clients to the
/// page controllers.
pub struct App {
    pub config: Config,
    pub tokens: TokenStore,
    pub auth: AuthClient,
    pub activities: ActivityClient,
}

impl App {
    /// Wire up the application from a loaded configuration.
    pub fn new(config: Config) -> Self {
        let tokens = TokenStore::new(config.credentials_path.clone());
        let auth = AuthClient::new(config.api_base_url.clone(), tokens.clone());
        let activities = ActivityClient::new(config.api_base_url.clone(), tokens.clone());

        Self {
            config,
            tokens,
            auth,
            activities,
        }
    }

    /// Wire up the application from the environment.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Ok(Self::new(Config::from_env()?))
    }
}

/// Initialize structured JSON logging.
///
/// Call once from the embedding shell before building an [`App`].
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fitness_tracker=debug".parse().expect("valid directive"))
                .add_directive("info".parse().expect("valid directive")),
        )
        .with(format)
        .init();
}
