use crate::ssl::enums::watcher_state::WatcherState;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

pub struct CertificateWatcher {
    pub(crate) paths: CertificatePaths,
    pub(crate) debounce: Duration,
    pub(crate) state: Arc<RwLock<WatcherState>>,
}
