//! Data structures for the certificate management module.

/// The three file paths backing the credentials.
pub mod certificate_paths;

/// A watched file together with its parent directory.
pub mod watch_target;

/// Immutable certificate + trust pool bundle, replaced wholesale on reload.
pub mod credential_snapshot;

/// Thread-safe holder of the current snapshot.
pub mod credential_store;

/// Debounced file change watcher.
pub mod certificate_watcher;

/// Owner of the store and the watch loop.
pub mod certificate_manager;

/// rustls server certificate resolver backed by the store.
pub mod dynamic_certificate_resolver;

/// rustls client certificate verifier backed by the store.
pub mod dynamic_client_verifier;

/// Development CA, server and client certificate generator.
pub mod certificate_generator;
