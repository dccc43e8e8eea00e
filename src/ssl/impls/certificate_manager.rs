use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::certificate_manager_error::CertificateManagerError;
use crate::ssl::enums::watcher_state::WatcherState;
use crate::ssl::impls::certificate_watcher::DEFAULT_DEBOUNCE;
use crate::ssl::structs::certificate_manager::CertificateManager;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::certificate_watcher::CertificateWatcher;
use crate::ssl::structs::credential_snapshot::CredentialSnapshot;
use crate::ssl::structs::credential_store::CredentialStore;
use log::info;
use parking_lot::{Mutex, RwLock};
use rustls::RootCertStore;
use rustls::sign::CertifiedKey;
use std::sync::Arc;
use std::time::Duration;

impl std::fmt::Debug for CertificateManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateManager")
            .field("paths", &self.paths)
            .field("debounce", &self.debounce)
            .field("generation", &self.store.generation())
            .field("watcher_state", &*self.state.read())
            .finish()
    }
}

impl CertificateManager {
    /// Loads the initial credentials and starts watching the three files.
    ///
    /// Must be called from within a Tokio runtime, the watch loop is spawned
    /// onto it.
    pub fn new(paths: CertificatePaths, debounce: Duration) -> Result<Self, CertificateManagerError> {
        let store = Arc::new(CredentialStore::open(&paths)?);
        info!("[CERTIFICATE] Certificates loaded successfully");

        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| CertificateManagerError::WatchSetup(e.to_string()))?;

        let state = Arc::new(RwLock::new(WatcherState::Idle));
        let watcher = CertificateWatcher::new(paths.clone(), debounce, Arc::clone(&state));
        let (notify_handle, events) = watcher.subscribe()?;
        let (shutdown, shutdown_rx) = tokio::sync::watch::channel(false);

        let reload_store = Arc::clone(&store);
        let reload_paths = paths.clone();
        let task = runtime.spawn(async move {
            watcher
                .run(events, shutdown_rx, move || {
                    reload_store
                        .load(&reload_paths)
                        .map(|snapshot| snapshot.generation)
                })
                .await;
            drop(notify_handle);
        });

        info!("[CERTIFICATE] Certificate manager initialized, watching: {}", paths);
        Ok(Self {
            paths,
            debounce,
            store,
            state,
            shutdown,
            task: Mutex::new(Some(task)),
        })
    }

    pub fn with_default_debounce(paths: CertificatePaths) -> Result<Self, CertificateManagerError> {
        Self::new(paths, DEFAULT_DEBOUNCE)
    }

    pub fn paths(&self) -> &CertificatePaths {
        &self.paths
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn store(&self) -> Arc<CredentialStore> {
        Arc::clone(&self.store)
    }

    pub fn snapshot(&self) -> Arc<CredentialSnapshot> {
        self.store.snapshot()
    }

    pub fn current_certificate(&self) -> Arc<CertifiedKey> {
        self.store.current_certificate()
    }

    pub fn current_trust_pool(&self) -> Arc<RootCertStore> {
        self.store.current_trust_pool()
    }

    pub fn watcher_state(&self) -> WatcherState {
        *self.state.read()
    }

    /// Reloads immediately, outside the debounce loop.
    pub fn reload(&self) -> Result<Arc<CredentialSnapshot>, CertificateError> {
        self.store.load(&self.paths)
    }

    /// Stops the watch loop and releases the file notification handle.
    /// Calling it again is a no-op.
    pub async fn close(&self) {
        let task = self.task.lock().take();
        let Some(task) = task else {
            return;
        };
        let _ = self.shutdown.send(true);
        let _ = task.await;
        *self.state.write() = WatcherState::Closed;
        info!("[CERTIFICATE] Certificate manager stopped");
    }
}
