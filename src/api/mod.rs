//! REST API module for certificate monitoring and manual rotation.
//!
//! # Endpoints Overview
//!
//! - `GET /api/certificate/status` - Current credential generation, file paths,
//!   trust anchors and watcher state
//! - `POST /api/certificate/reload` - Reload the certificate, key and CA
//!   bundle immediately, bypassing the debounce window
//!
//! Any other route answers with a JSON 404.
//!
//! When mutual TLS is enabled the listener only accepts clients presenting a
//! certificate issued by the current CA bundle whose Common Name is on the
//! configured allow-list.

/// Data structures for API service context and responses.
pub mod structs;

/// Core API service functions and route configuration.
#[allow(clippy::module_inception)]
pub mod api;

/// Certificate status and reload endpoints.
pub mod api_certificate;
