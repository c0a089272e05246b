use crate::fsio_settings::domain::{
    EnumerationDescription, FsioSettingsModel, GettersContent, SettingField,
};

/// First value assigned to a generated FSIO setting constant
pub const FIRST_SETTING_INDEX: u32 = 1000;

/// FsioSettingsBuilder turns declared setting fields into the enum and getter text
///
/// Names are not validated; duplicates are emitted as declared.
pub struct FsioSettingsBuilder;

impl FsioSettingsBuilder {
    /// Builds the model for `fields` in declaration order
    ///
    /// Hidden fields are skipped without consuming an index.
    pub fn build(fields: &[SettingField], eol: &str) -> FsioSettingsModel {
        let mut enumeration = EnumerationDescription::new();
        let mut getters = GettersContent::new();

        for (index, field) in (FIRST_SETTING_INDEX..).zip(fields.iter().filter(|f| f.fsio_visible)) {
            let constant = field.constant_name();
            enumeration.push_constant(&constant, index, eol);
            getters.push_case(&constant, &field.name, eol);
        }

        FsioSettingsModel::new(enumeration, getters)
    }
}
