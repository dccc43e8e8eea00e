use crate::ssl::structs::certificate_paths::CertificatePaths;
use crate::ssl::structs::watch_target::WatchTarget;
use std::path::{Path, PathBuf};

impl CertificatePaths {
    pub fn new(
        cert_path: impl Into<PathBuf>,
        key_path: impl Into<PathBuf>,
        ca_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cert_path: cert_path.into(),
            key_path: key_path.into(),
            ca_path: ca_path.into(),
        }
    }

    pub fn files(&self) -> [&Path; 3] {
        [self.cert_path.as_path(), self.key_path.as_path(), self.ca_path.as_path()]
    }

    pub fn watch_targets(&self) -> Vec<WatchTarget> {
        self.files()
            .into_iter()
            .map(|file| WatchTarget {
                file: file.to_path_buf(),
                directory: match file.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                    _ => PathBuf::from("."),
                },
            })
            .collect()
    }

    /// Whether a path reported by the file watcher refers to one of the three
    /// files, by full path or by file name alone.
    ///
    /// The file name fallback is coarse: an unrelated file sharing a name with
    /// a target inside any watched directory also matches and causes a
    /// harmless extra reload.
    pub fn is_relevant(&self, path: &Path) -> bool {
        self.files().iter().any(|file| {
            *file == path || (file.file_name().is_some() && file.file_name() == path.file_name())
        })
    }
}

impl std::fmt::Display for CertificatePaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.cert_path.display(),
            self.key_path.display(),
            self.ca_path.display()
        )
    }
}
