use std::path::Path;
use fsio_gen::prelude::*;

/// Mock SettingsManifestReader for testing
pub struct MockManifestReader {
    pub settings: Vec<SettingField>,
    pub should_fail: bool,
}

impl MockManifestReader {
    pub fn new(settings: Vec<SettingField>) -> Self {
        Self {
            settings,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            settings: Vec::new(),
            should_fail: true,
        }
    }
}

impl SettingsManifestReader for MockManifestReader {
    fn read_manifest(&self, _path: &Path) -> Result<SettingsManifest> {
        if self.should_fail {
            anyhow::bail!("Mock manifest read failure");
        }
        Ok(SettingsManifest {
            settings: self.settings.clone(),
        })
    }
}
