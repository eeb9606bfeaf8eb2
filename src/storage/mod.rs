//! Durable client-side storage (token file).

pub mod tokens;

pub use tokens::TokenStore;
