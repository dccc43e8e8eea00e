use std::time::Duration;
use crate::config::structs::tls_config::TlsConfig;
use crate::ssl::impls::certificate_watcher::DEFAULT_DEBOUNCE;
use crate::ssl::structs::certificate_paths::CertificatePaths;

impl TlsConfig {
    pub fn certificate_paths(&self) -> CertificatePaths {
        CertificatePaths::new(&self.cert_file, &self.key_file, &self.ca_file)
    }

    pub fn debounce(&self) -> Duration {
        self.debounce_ms.map(Duration::from_millis).unwrap_or(DEFAULT_DEBOUNCE)
    }
}
