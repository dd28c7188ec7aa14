//! Utility modules.

/// Serde helper storing a `Duration` as whole seconds.
pub mod duration_secs;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
