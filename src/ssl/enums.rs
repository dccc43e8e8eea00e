//! Enumerations for the certificate management module.

/// Failure kinds of a single credential load.
pub mod certificate_error;

/// Construction-time failures of the certificate manager.
pub mod certificate_manager_error;

/// States of the change watcher's event loop.
pub mod watcher_state;
