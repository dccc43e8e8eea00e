//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the server
//! configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml` by default) contains sections for:
//! - **log_level**: Logging verbosity
//! - **server**: Listener address, worker threads and timeouts
//! - **tls**: Mutual TLS switch, certificate/key/CA paths, allowed client CNs
//!   and the reload debounce window
//! - **sentry_config**: Error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use certwatch::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let paths = config.tls.certificate_paths();
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
