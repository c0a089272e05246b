use crate::fsio_settings::domain::{render_header, EmitterConfig, FsioSettingsModel, OutputState};
use crate::ports::outbound::SettingsConsumer;
use crate::shared::Result;

const TARGET_NAME: &str = "in-memory output";

/// InMemorySettingsEmitter keeps both generated artifacts as strings
///
/// Follows the same lifecycle rules as the file emitter, so code driving a
/// `SettingsConsumer` can be exercised without touching the disk.
pub struct InMemorySettingsEmitter {
    config: EmitterConfig,
    state: OutputState,
    enum_output: String,
    getters_output: String,
}

impl InMemorySettingsEmitter {
    pub fn new(config: EmitterConfig) -> Self {
        Self {
            config,
            state: OutputState::Created,
            enum_output: String::new(),
            getters_output: String::new(),
        }
    }

    pub fn emitter_id() -> &'static str {
        std::any::type_name::<Self>()
    }

    pub fn state(&self) -> OutputState {
        self.state
    }

    pub fn enum_output(&self) -> &str {
        &self.enum_output
    }

    pub fn getters_output(&self) -> &str {
        &self.getters_output
    }
}

impl Default for InMemorySettingsEmitter {
    fn default() -> Self {
        Self::new(EmitterConfig::default())
    }
}

impl SettingsConsumer for InMemorySettingsEmitter {
    fn start_file(&mut self) -> Result<()> {
        self.state
            .require(OutputState::Created, TARGET_NAME, "write header to")?;

        let header = render_header(&self.config, Self::emitter_id());
        self.enum_output.push_str(&header);
        self.getters_output.push_str(&header);
        self.state = OutputState::HeaderWritten;
        Ok(())
    }

    fn line_terminator(&self) -> &str {
        self.config.line_terminator()
    }

    fn end_file(&mut self, model: &FsioSettingsModel) -> Result<()> {
        self.state
            .require(OutputState::HeaderWritten, TARGET_NAME, "write body to")?;

        self.enum_output.push_str(model.enumeration.as_str());
        self.getters_output.push_str(model.getters.as_str());
        self.state = OutputState::Closed;
        Ok(())
    }
}
