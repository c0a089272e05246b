use crate::fsio_settings::domain::SettingsManifest;
use crate::shared::Result;
use std::path::Path;

/// SettingsManifestReader port for loading declared setting fields
pub trait SettingsManifestReader {
    /// Reads and deserializes the manifest at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist or cannot be read
    /// - The content is not a valid manifest
    fn read_manifest(&self, path: &Path) -> Result<SettingsManifest>;
}
