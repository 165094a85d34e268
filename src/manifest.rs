use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

use crate::error::ManifestError;

pub const DEFAULT_MANIFEST_NAME: &str = "blender_manifest.toml";

static ID_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*id\s*=\s*"([^"]*)""#).expect("valid id pattern"));
static VERSION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*version\s*=\s*"([^"]*)""#).expect("valid version pattern"));

/// The two manifest fields the build glue cares about.
///
/// Fields stay `None` when the manifest has no matching line. Accessors hand
/// back an empty string in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestRecord {
    pub id: Option<String>,
    pub version: Option<String>,
}

impl ManifestRecord {
    /// Scans manifest text line by line. A later matching line replaces an
    /// earlier one.
    pub fn scan(text: &str) -> Self {
        let mut record = Self::default();

        for (index, line) in text.lines().enumerate() {
            if let Some(caps) = ID_LINE.captures(line) {
                let value = caps[1].to_string();
                if let Some(previous) = record.id.replace(value.clone()) {
                    debug!(line = index + 1, %previous, %value, "id redefined, keeping later value");
                } else {
                    debug!(line = index + 1, %value, "matched id");
                }
            } else if let Some(caps) = VERSION_LINE.captures(line) {
                let value = caps[1].to_string();
                if let Some(previous) = record.version.replace(value.clone()) {
                    debug!(line = index + 1, %previous, %value, "version redefined, keeping later value");
                } else {
                    debug!(line = index + 1, %value, "matched version");
                }
            }
        }

        record
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or("")
    }

    /// Exact file name the extension builder produces: `<id>-<version>.zip`.
    pub fn archive_name(&self) -> String {
        format!("{}-{}.zip", self.id(), self.version())
    }

    /// Glob matching every archive version of this extension: `<id>-*.zip`.
    pub fn archive_glob(&self) -> String {
        format!("{}-*.zip", self.id())
    }
}

/// Locates and reads the manifest inside an extension source directory.
pub struct ManifestReader {
    manifest_name: String,
}

impl ManifestReader {
    pub fn new() -> Self {
        Self {
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
        }
    }

    pub fn manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = name.into();
        self
    }

    pub fn manifest_path(&self, source_dir: &Path) -> PathBuf {
        source_dir.join(&self.manifest_name)
    }

    pub fn read_manifest(&self, source_dir: &Path) -> Result<ManifestRecord, ManifestError> {
        let manifest_path = self.manifest_path(source_dir);
        debug!(path = %manifest_path.display(), "reading manifest");

        let content = fs::read_to_string(&manifest_path).map_err(|source| ManifestError::Unreadable {
            path: manifest_path.clone(),
            source,
        })?;

        Ok(ManifestRecord::scan(&content))
    }
}

impl Default for ManifestReader {
    fn default() -> Self {
        Self::new()
    }
}
