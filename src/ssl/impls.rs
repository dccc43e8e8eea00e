//! Implementation blocks for the certificate management types.

pub mod certificate_paths;
pub mod credential_snapshot;
pub mod credential_store;
pub mod certificate_watcher;
pub mod certificate_manager;
pub mod dynamic_certificate_resolver;
pub mod dynamic_client_verifier;
pub mod certificate_generator;
pub mod watcher_state;
