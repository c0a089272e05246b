use super::{EnumerationDescription, GettersContent};

/// Everything an emitter needs at finalize time for one settings group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FsioSettingsModel {
    pub enumeration: EnumerationDescription,
    pub getters: GettersContent,
}

impl FsioSettingsModel {
    pub fn new(enumeration: EnumerationDescription, getters: GettersContent) -> Self {
        Self {
            enumeration,
            getters,
        }
    }
}
