use crate::ssl::enums::watcher_state::WatcherState;

impl WatcherState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatcherState::Idle => "idle",
            WatcherState::Pending => "pending",
            WatcherState::Reloading => "reloading",
            WatcherState::Closed => "closed",
        }
    }
}

impl std::fmt::Display for WatcherState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
