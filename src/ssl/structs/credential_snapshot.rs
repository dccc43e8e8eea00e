use rustls::RootCertStore;
use rustls::pki_types::CertificateDer;
use rustls::server::danger::ClientCertVerifier;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

pub struct CredentialSnapshot {
    pub certified_key: Arc<CertifiedKey>,
    pub trust_pool: Arc<RootCertStore>,
    /// CA certificates as read from the bundle, in file order.
    pub ca_certificates: Vec<CertificateDer<'static>>,
    pub client_verifier: Arc<dyn ClientCertVerifier>,
    pub generation: u64,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}
