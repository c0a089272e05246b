use super::output_target::OutputTarget;
use crate::fsio_settings::domain::{render_header, EmitterConfig, FsioSettingsModel, OutputState};
use crate::ports::outbound::SettingsConsumer;
use crate::shared::security::validate_distinct_outputs;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// FileSettingsEmitter adapter writing the FSIO enum and getters files
///
/// Construction performs no I/O. `start_file` creates both files and writes
/// the header; `end_file` writes the bodies and closes both files. Writes
/// are not staged, so a failure halfway leaves whatever was written on disk.
pub struct FileSettingsEmitter {
    config: EmitterConfig,
    enum_target: OutputTarget,
    getters_target: OutputTarget,
}

impl FileSettingsEmitter {
    pub fn new(
        enum_path: impl Into<PathBuf>,
        getters_path: impl Into<PathBuf>,
        config: EmitterConfig,
    ) -> Self {
        Self {
            config,
            enum_target: OutputTarget::new(enum_path.into()),
            getters_target: OutputTarget::new(getters_path.into()),
        }
    }

    pub fn enum_path(&self) -> &Path {
        self.enum_target.path()
    }

    pub fn getters_path(&self) -> &Path {
        self.getters_target.path()
    }

    pub fn enum_state(&self) -> OutputState {
        self.enum_target.state()
    }

    pub fn getters_state(&self) -> OutputState {
        self.getters_target.state()
    }

    /// Name written on the `// by` line of the header
    pub fn emitter_id() -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl SettingsConsumer for FileSettingsEmitter {
    fn start_file(&mut self) -> Result<()> {
        self.enum_target.require(OutputState::Created, "write header to")?;
        self.getters_target
            .require(OutputState::Created, "write header to")?;
        validate_distinct_outputs(self.enum_path(), self.getters_path())?;

        let header = render_header(&self.config, Self::emitter_id());
        self.enum_target.write_header(&header)?;
        self.getters_target.write_header(&header)?;
        Ok(())
    }

    fn line_terminator(&self) -> &str {
        self.config.line_terminator()
    }

    fn end_file(&mut self, model: &FsioSettingsModel) -> Result<()> {
        self.enum_target
            .require(OutputState::HeaderWritten, "write body to")?;
        self.getters_target
            .require(OutputState::HeaderWritten, "write body to")?;

        self.enum_target.write_body(model.enumeration.as_str())?;
        self.enum_target.close()?;

        self.getters_target.write_body(model.getters.as_str())?;
        self.getters_target.close()?;
        Ok(())
    }
}
