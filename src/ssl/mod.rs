//! Live TLS credential management.
//!
//! This module keeps the server certificate, its private key and the CA
//! bundle used to verify client certificates in memory, and swaps them
//! without restarting the process when the files on disk change.
//!
//! # Components
//!
//! - [`structs::credential_store::CredentialStore`] holds the current
//!   [`structs::credential_snapshot::CredentialSnapshot`]. A reload parses
//!   everything first and swaps the snapshot in one step, so readers see
//!   either the old or the new material, never a mix.
//! - [`structs::certificate_watcher::CertificateWatcher`] listens to file
//!   notifications for the three files and their directories, debounces
//!   bursts of events and triggers one reload per burst.
//! - [`structs::certificate_manager::CertificateManager`] ties both
//!   together and owns the background task.
//! - [`structs::dynamic_certificate_resolver::DynamicCertificateResolver`]
//!   and [`structs::dynamic_client_verifier::DynamicClientVerifier`] plug
//!   the store into a rustls `ServerConfig`.
//!
//! # Example
//!
//! ```rust,ignore
//! use certwatch::ssl::structs::certificate_manager::CertificateManager;
//! use certwatch::ssl::structs::certificate_paths::CertificatePaths;
//!
//! let paths = CertificatePaths::new("certs/server.pem", "certs/server.key", "certs/ca.pem");
//! let manager = CertificateManager::with_default_debounce(paths)?;
//! let tls_config = certwatch::ssl::ssl::create_server_config(&manager, vec!["client".into()])?;
//! // ... serve ...
//! manager.close().await;
//! ```

/// Error and state enumerations.
pub mod enums;

/// Certificate management data structures.
pub mod structs;

/// Implementation blocks for the data structures.
pub mod impls;

/// PEM loading helpers and rustls configuration builders.
#[allow(clippy::module_inception)]
pub mod ssl;
