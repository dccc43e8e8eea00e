use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::credential_snapshot::CredentialSnapshot;
use crate::ssl::structs::credential_store::CredentialStore;
use parking_lot::{Mutex, RwLock};
use rustls::RootCertStore;
use rustls::server::danger::ClientCertVerifier;
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("current", &*self.current.read())
            .finish()
    }
}

impl CredentialStore {
    /// Creates a store from an initial load, which must succeed.
    pub fn open(paths: &CertificatePaths) -> Result<Self, CertificateError> {
        let snapshot = CredentialSnapshot::load(paths, 1)?;
        Ok(Self {
            current: RwLock::new(Arc::new(snapshot)),
            load_lock: Mutex::new(()),
        })
    }

    /// Loads fresh material and swaps it in. On error the current snapshot
    /// stays installed.
    pub fn load(&self, paths: &CertificatePaths) -> Result<Arc<CredentialSnapshot>, CertificateError> {
        let _guard = self.load_lock.lock();
        let generation = self.current.read().generation + 1;
        let snapshot = Arc::new(CredentialSnapshot::load(paths, generation)?);
        *self.current.write() = Arc::clone(&snapshot);
        Ok(snapshot)
    }

    pub fn snapshot(&self) -> Arc<CredentialSnapshot> {
        Arc::clone(&self.current.read())
    }

    pub fn current_certificate(&self) -> Arc<CertifiedKey> {
        Arc::clone(&self.current.read().certified_key)
    }

    pub fn current_trust_pool(&self) -> Arc<RootCertStore> {
        Arc::clone(&self.current.read().trust_pool)
    }

    pub fn current_client_verifier(&self) -> Arc<dyn ClientCertVerifier> {
        Arc::clone(&self.current.read().client_verifier)
    }

    pub fn generation(&self) -> u64 {
        self.current.read().generation
    }
}
