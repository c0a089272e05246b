/// Domain services
mod settings_builder;

pub use settings_builder::{FsioSettingsBuilder, FIRST_SETTING_INDEX};
