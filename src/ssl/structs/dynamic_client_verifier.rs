use crate::ssl::structs::credential_store::CredentialStore;
use std::sync::Arc;

pub struct DynamicClientVerifier {
    pub(crate) store: Arc<CredentialStore>,
    pub(crate) allowed_cns: Vec<String>,
}
