/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_settings_emitter;
mod output_target;

pub use file_reader::FileSystemReader;
pub use file_settings_emitter::FileSettingsEmitter;
pub use output_target::OutputTarget;
