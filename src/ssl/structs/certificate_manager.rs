use crate::ssl::enums::watcher_state::WatcherState;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::credential_store::CredentialStore;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub struct CertificateManager {
    pub(crate) paths: CertificatePaths,
    pub(crate) debounce: Duration,
    pub(crate) store: Arc<CredentialStore>,
    pub(crate) state: Arc<RwLock<WatcherState>>,
    pub(crate) shutdown: tokio::sync::watch::Sender<bool>,
    pub(crate) task: Mutex<Option<JoinHandle<()>>>,
}
