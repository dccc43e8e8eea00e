use std::path::PathBuf;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WatchTarget {
    pub file: PathBuf,
    pub directory: PathBuf,
}
