use crate::ssl::structs::credential_store::CredentialStore;
use std::sync::Arc;

pub struct DynamicCertificateResolver {
    pub(crate) store: Arc<CredentialStore>,
}
