use crate::ssl::enums::watcher_state::WatcherState;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CertificateStatus {
    pub status: String,
    pub generation: u64,
    pub loaded_at: String,
    pub cert_path: String,
    pub key_path: String,
    pub ca_path: String,
    pub trust_anchors: usize,
    pub debounce_ms: u64,
    pub watcher: WatcherState,
}

#[derive(Debug, Serialize)]
pub struct CertificateReloadResult {
    pub status: String,
    pub generation: u64,
    pub loaded_at: String,
}

#[derive(Debug, Serialize)]
pub struct CertificateReloadError {
    pub status: String,
    pub error: String,
}
