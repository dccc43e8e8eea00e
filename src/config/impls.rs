//! Implementation blocks for configuration types.

pub mod configuration;
pub mod configuration_error;
pub mod sentry_config;
pub mod tls_config;
