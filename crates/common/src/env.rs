//! Environment helpers
//!
//! Thin wrappers over `std::env` used while loading configuration.

/// Read an optional variable; blank values count as missing.
pub fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
