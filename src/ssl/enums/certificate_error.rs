use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("Failed to read {0}")]
    ReadError(String),
    #[error("Failed to parse {0}")]
    ParseError(String),
    #[error("No usable CA certificate found in {0}")]
    EmptyTrustPool(String),
}
