//! # certwatch
//!
//! A mutual-TLS front server whose server certificate, private key and client
//! CA bundle can be rotated on disk without restarting the process.
//!
//! ## Overview
//!
//! The [`ssl`] module owns the credentials. A `CertificateManager` loads the
//! three PEM files once at startup, keeps the parsed result as an immutable
//! snapshot and watches the files' directories. Bursts of filesystem activity
//! are coalesced by a debounce window, after which the files are reloaded as a
//! unit. A reload that fails leaves the previous snapshot in place, so a
//! half-written rotation never interrupts service.
//!
//! Every TLS handshake asks the manager for the current certificate and for
//! the current client CA pool, so new connections pick up a rotation as soon
//! as the reload completes while established connections are untouched.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use certwatch::ssl::structs::certificate_manager::CertificateManager;
//! use certwatch::ssl::structs::certificate_paths::CertificatePaths;
//! use certwatch::ssl::ssl::create_server_config;
//!
//! let paths = CertificatePaths::new("certs/server.pem", "certs/server.key", "certs/ca.pem");
//! let manager = CertificateManager::with_default_debounce(paths)?;
//! let server_config = create_server_config(&manager, vec!["dashboard-client".to_string()])?;
//! // ... serve ...
//! manager.close().await;
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Certificate status and reload endpoints
//! - [`common`] - Logging setup and the generic error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`ssl`] - Credential store, change watcher and rustls adapters
//! - [`structs`] - CLI argument parsing

/// REST API module for certificate monitoring.
pub mod api;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Loads `config.toml`, creates a default one on request and validates it.
pub mod config;

/// Live certificate management.
///
/// Holds the current certificate, key and client CA pool, reloads them when
/// the files change and exposes them to rustls per handshake.
pub mod ssl;

/// CLI argument structures.
pub mod structs;
