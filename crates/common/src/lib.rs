//! Shared building blocks for the recipe keeper workspace.
//! - `utils::logging`: tracing subscriber setup
//! - `env`: environment variable helpers used during startup
//! - `types`: small wire types shared across crates

pub mod env;
pub mod types;
pub mod utils;
