use crate::fsio_settings::domain::SettingsManifest;
use crate::ports::outbound::SettingsManifestReader;
use crate::shared::error::FsioError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_MANIFEST_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Manifest encodings, picked by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManifestFormat {
    Yaml,
    Json,
}

impl ManifestFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ManifestFormat::Json,
            _ => ManifestFormat::Yaml,
        }
    }
}

/// FileSystemReader adapter for reading settings manifests from disk
///
/// `.json` manifests are read as JSON; anything else is read as YAML.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a file after rejecting symlinks, non-regular files and oversized files
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        validate_regular_file(path, "settings manifest")?;

        let metadata = fs::metadata(path).map_err(|e| FsioError::ManifestReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        validate_file_size(metadata.len(), path, MAX_MANIFEST_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            FsioError::ManifestReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsManifestReader for FileSystemReader {
    fn read_manifest(&self, path: &Path) -> Result<SettingsManifest> {
        if !path.exists() {
            return Err(FsioError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: "Pass the settings manifest with --manifest <FILE>".to_string(),
            }
            .into());
        }

        let content = self.safe_read_file(path)?;
        if content.trim().is_empty() {
            return Ok(SettingsManifest::default());
        }

        let parsed = match ManifestFormat::from_path(path) {
            ManifestFormat::Json => {
                serde_json::from_str::<SettingsManifest>(&content).map_err(|e| e.to_string())
            }
            ManifestFormat::Yaml => {
                serde_yaml_ng::from_str::<SettingsManifest>(&content).map_err(|e| e.to_string())
            }
        };

        parsed.map_err(|details| {
            FsioError::ManifestParseError {
                path: path.to_path_buf(),
                details,
            }
            .into()
        })
    }
}
