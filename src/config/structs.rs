//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Listener configuration (address, threads, timeouts).
pub mod server_config;

/// Mutual TLS configuration (paths, allowed CNs, debounce).
pub mod tls_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
