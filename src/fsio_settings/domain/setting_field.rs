use serde::Deserialize;

/// One configuration field that may be exposed to FSIO expressions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SettingField {
    /// Field name as it appears on `engineConfiguration`
    pub name: String,
    /// Hidden fields are declared but get no constant or getter
    #[serde(default = "default_fsio_visible")]
    pub fsio_visible: bool,
}

fn default_fsio_visible() -> bool {
    true
}

impl SettingField {
    pub fn new(name: impl Into<String>, fsio_visible: bool) -> Self {
        Self {
            name: name.into(),
            fsio_visible,
        }
    }

    pub fn visible(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// Name of the enum constant generated for this field
    pub fn constant_name(&self) -> String {
        format!("FSIO_SETTING_{}", self.name.to_uppercase())
    }
}

/// Top-level shape of a settings manifest file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsManifest {
    #[serde(default)]
    pub settings: Vec<SettingField>,
}
