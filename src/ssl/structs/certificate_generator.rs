use rcgen::{Issuer, KeyPair};

#[derive(Debug, Clone)]
pub struct GeneratedCertificate {
    pub cert_pem: String,
    pub key_pem: String,
}

pub struct CertificateGenerator {
    pub(crate) authority: GeneratedCertificate,
    pub(crate) issuer: Issuer<'static, KeyPair>,
}
