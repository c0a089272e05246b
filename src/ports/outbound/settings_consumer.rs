use crate::fsio_settings::domain::FsioSettingsModel;
use crate::shared::Result;

/// SettingsConsumer port for emitters of generated settings artifacts
///
/// A consumer is driven through exactly one `start_file` followed by exactly
/// one `end_file`. Implementations report any other order as an
/// `FsioError::OutOfSequence` error.
pub trait SettingsConsumer {
    /// Writes the boilerplate header to every output of this consumer
    ///
    /// # Errors
    /// Returns an error if an output cannot be created or written, or if
    /// the header was already written.
    fn start_file(&mut self) -> Result<()>;

    /// End-of-line sequence this consumer writes its header with
    ///
    /// Generated body text must be built with the same sequence.
    fn line_terminator(&self) -> &str;

    /// Writes the finalized model and closes every output
    ///
    /// # Arguments
    /// * `model` - Enumeration description and getters content to emit
    ///
    /// # Errors
    /// Returns an error if a write or close fails, or if `start_file` has
    /// not been called. Outputs already written before the failure stay on
    /// disk as they are.
    fn end_file(&mut self, model: &FsioSettingsModel) -> Result<()>;
}
