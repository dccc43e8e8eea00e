use crate::ssl::ssl::common_name;
use crate::ssl::structs::credential_store::CredentialStore;
use crate::ssl::structs::dynamic_client_verifier::DynamicClientVerifier;
use log::{debug, warn};
use rustls::client::danger::HandshakeSignatureValid;
use rustls::pki_types::{CertificateDer, UnixTime};
use rustls::server::danger::{ClientCertVerified, ClientCertVerifier};
use rustls::{DigitallySignedStruct, DistinguishedName, SignatureScheme};
use std::sync::Arc;

impl std::fmt::Debug for DynamicClientVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicClientVerifier")
            .field("generation", &self.store.generation())
            .field("allowed_cns", &self.allowed_cns)
            .finish()
    }
}

impl DynamicClientVerifier {
    pub fn new(store: Arc<CredentialStore>, allowed_cns: Vec<String>) -> Self {
        if allowed_cns.is_empty() {
            warn!("[CERTIFICATE] No allowed client CNs configured, every client certificate will be rejected");
        }
        Self { store, allowed_cns }
    }

    pub fn is_allowed(&self, common_name: &str) -> bool {
        self.allowed_cns.iter().any(|allowed| allowed == common_name)
    }
}

impl ClientCertVerifier for DynamicClientVerifier {
    // Hints would have to borrow from the current snapshot; an empty list
    // only affects which certificate the client picks, not verification.
    fn root_hint_subjects(&self) -> &[DistinguishedName] {
        &[]
    }

    fn verify_client_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        now: UnixTime,
    ) -> Result<ClientCertVerified, rustls::Error> {
        let verified = self
            .store
            .current_client_verifier()
            .verify_client_cert(end_entity, intermediates, now)?;

        let Some(cn) = common_name(end_entity) else {
            debug!("[CERTIFICATE] Client certificate has no subject CN");
            return Err(rustls::Error::InvalidCertificate(
                rustls::CertificateError::ApplicationVerificationFailure,
            ));
        };
        if !self.is_allowed(&cn) {
            debug!("[CERTIFICATE] Client certificate CN '{}' not in allowed list: {:?}", cn, self.allowed_cns);
            return Err(rustls::Error::InvalidCertificate(
                rustls::CertificateError::ApplicationVerificationFailure,
            ));
        }
        debug!("[CERTIFICATE] Client authenticated with CN: {}", cn);
        Ok(verified)
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        self.store
            .current_client_verifier()
            .verify_tls12_signature(message, cert, dss)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        self.store
            .current_client_verifier()
            .verify_tls13_signature(message, cert, dss)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.store.current_client_verifier().supported_verify_schemes()
    }
}
