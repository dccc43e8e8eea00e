use crate::ssl::structs::credential_snapshot::CredentialSnapshot;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

pub struct CredentialStore {
    pub(crate) current: RwLock<Arc<CredentialSnapshot>>,
    pub(crate) load_lock: Mutex<()>,
}
