use crate::ssl::enums::certificate_error::CertificateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateManagerError {
    #[error("Failed to load initial certificates: {0}")]
    InitialLoad(#[from] CertificateError),
    #[error("Failed to set up certificate file watcher: {0}")]
    WatchSetup(String),
}
