use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::ssl::{
    build_certified_key,
    build_client_verifier,
    load_certificate_chain,
    load_private_key,
    load_trust_pool
};
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::credential_snapshot::CredentialSnapshot;

impl std::fmt::Debug for CredentialSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSnapshot")
            .field("generation", &self.generation)
            .field("chain_length", &self.certified_key.cert.len())
            .field("trust_anchors", &self.trust_pool.len())
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl CredentialSnapshot {
    /// Reads and parses all three files. Nothing is returned unless every
    /// part parsed.
    pub fn load(paths: &CertificatePaths, generation: u64) -> Result<Self, CertificateError> {
        let chain = load_certificate_chain(&paths.cert_path)?;
        let key = load_private_key(&paths.key_path)?;
        let certified_key = build_certified_key(chain, &key, &paths.key_path)?;
        let (trust_pool, ca_certificates) = load_trust_pool(&paths.ca_path)?;
        let client_verifier = build_client_verifier(trust_pool.clone(), &paths.ca_path)?;
        Ok(Self {
            certified_key,
            trust_pool,
            ca_certificates,
            client_verifier,
            generation,
            loaded_at: chrono::Utc::now(),
        })
    }
}
