/// Domain model for generated FSIO settings files
mod emitter_config;
mod enumeration_description;
mod getters_content;
mod header;
mod output_state;
mod setting_field;
mod settings_model;

pub use emitter_config::{EmitterConfig, LineEnding, DEFAULT_GENERATION_MESSAGE};
pub use enumeration_description::EnumerationDescription;
pub use getters_content::GettersContent;
pub use header::render_header;
pub use output_state::OutputState;
pub use setting_field::{SettingField, SettingsManifest};
pub use settings_model::FsioSettingsModel;
