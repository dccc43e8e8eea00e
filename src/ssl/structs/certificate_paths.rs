use std::path::PathBuf;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CertificatePaths {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
    pub ca_path: PathBuf,
}
