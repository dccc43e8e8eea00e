use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::certificate_manager_error::CertificateManagerError;
use crate::ssl::enums::watcher_state::WatcherState;
use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::certificate_watcher::CertificateWatcher;
use log::{debug, error, info, warn};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};
use tokio::time::Instant;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

impl std::fmt::Debug for CertificateWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateWatcher")
            .field("paths", &self.paths)
            .field("debounce", &self.debounce)
            .field("state", &*self.state.read())
            .finish()
    }
}

impl CertificateWatcher {
    pub fn new(paths: CertificatePaths, debounce: Duration, state: Arc<RwLock<WatcherState>>) -> Self {
        Self {
            paths,
            debounce,
            state,
        }
    }

    pub fn state(&self) -> WatcherState {
        *self.state.read()
    }

    fn set_state(&self, state: WatcherState) {
        *self.state.write() = state;
    }

    /// Creates the OS notification handle and registers every target's
    /// directory and file. A target fails registration only when neither
    /// could be watched.
    pub fn subscribe(
        &self,
    ) -> Result<(RecommendedWatcher, UnboundedReceiver<notify::Result<Event>>), CertificateManagerError> {
        let (tx, rx) = unbounded_channel();
        let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
            let _ = tx.send(result);
        })
        .map_err(|e| CertificateManagerError::WatchSetup(e.to_string()))?;

        let mut watched_directories: HashSet<PathBuf> = HashSet::new();
        for target in self.paths.watch_targets() {
            let directory_watched = watched_directories.contains(&target.directory)
                || match watcher.watch(&target.directory, RecursiveMode::NonRecursive) {
                    Ok(()) => {
                        watched_directories.insert(target.directory.clone());
                        true
                    }
                    Err(error) => {
                        warn!(
                            "[WATCHER] Failed to watch directory {}: {}",
                            target.directory.display(),
                            error
                        );
                        false
                    }
                };
            let file_watched = match watcher.watch(&target.file, RecursiveMode::NonRecursive) {
                Ok(()) => true,
                Err(error) => {
                    warn!(
                        "[WATCHER] Failed to watch file {} directly: {}",
                        target.file.display(),
                        error
                    );
                    false
                }
            };
            if !directory_watched && !file_watched {
                return Err(CertificateManagerError::WatchSetup(format!(
                    "neither {} nor {} could be watched",
                    target.directory.display(),
                    target.file.display()
                )));
            }
        }
        Ok((watcher, rx))
    }

    /// Event loop: relevant events (re)arm the debounce timer, expiry runs
    /// `reload` once. Exits on close, on a dropped shutdown sender, or when the
    /// notification channel closes.
    pub async fn run<F>(
        self,
        mut events: UnboundedReceiver<notify::Result<Event>>,
        mut shutdown: tokio::sync::watch::Receiver<bool>,
        mut reload: F,
    ) where
        F: FnMut() -> Result<u64, CertificateError>,
    {
        let debounce_timer = tokio::time::sleep(self.debounce);
        tokio::pin!(debounce_timer);
        let mut armed = false;
        self.set_state(WatcherState::Idle);

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    info!("[WATCHER] Stopping certificate watcher");
                    break;
                }
                received = events.recv() => {
                    match received {
                        Some(Ok(event)) => {
                            if event.paths.iter().any(|path| self.paths.is_relevant(path)) {
                                debug!("[WATCHER] File system event: {:?} {:?}", event.kind, event.paths);
                                debounce_timer.as_mut().reset(Instant::now() + self.debounce);
                                armed = true;
                                self.set_state(WatcherState::Pending);
                            }
                        }
                        Some(Err(error)) => {
                            error!("[WATCHER] Watcher error: {}", error);
                        }
                        None => {
                            error!("[WATCHER] File notification channel closed, certificate rotation is frozen until restart");
                            sentry::capture_message(
                                "certificate watcher notification channel closed, rotation frozen",
                                sentry::Level::Error,
                            );
                            break;
                        }
                    }
                }
                () = &mut debounce_timer, if armed => {
                    armed = false;
                    self.set_state(WatcherState::Reloading);
                    info!("[WATCHER] Certificate files changed, reloading...");
                    match reload() {
                        Ok(generation) => {
                            info!("[WATCHER] Certificates reloaded successfully (generation {})", generation);
                        }
                        Err(error) => {
                            error!("[WATCHER] Failed to reload certificates, keeping current ones: {}", error);
                        }
                    }
                    self.set_state(WatcherState::Idle);
                }
            }
        }

        self.set_state(WatcherState::Closed);
    }
}
