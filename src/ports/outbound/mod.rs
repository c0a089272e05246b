/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console).
pub mod manifest_reader;
pub mod progress_reporter;
pub mod settings_consumer;

pub use manifest_reader::SettingsManifestReader;
pub use progress_reporter::ProgressReporter;
pub use settings_consumer::SettingsConsumer;
