use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading an extension manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest does not exist, cannot be opened, or is not valid UTF-8.
    #[error("Failed to read manifest from {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
