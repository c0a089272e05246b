use crate::application::dto::{GenerateRequest, GenerateResponse};
use crate::fsio_settings::services::FsioSettingsBuilder;
use crate::ports::outbound::{ProgressReporter, SettingsConsumer, SettingsManifestReader};
use crate::shared::Result;

const TOTAL_STEPS: usize = 3;

/// GenerateFsioFilesUseCase - Drives one settings consumer through a generation run
///
/// The consumer sees the same sequence the config generator uses:
/// `start_file`, then model population, then `end_file`.
///
/// # Type Parameters
/// * `MR` - SettingsManifestReader implementation
/// * `SC` - SettingsConsumer implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateFsioFilesUseCase<MR, SC, PR> {
    manifest_reader: MR,
    consumer: SC,
    progress_reporter: PR,
}

impl<MR, SC, PR> GenerateFsioFilesUseCase<MR, SC, PR>
where
    MR: SettingsManifestReader,
    SC: SettingsConsumer,
    PR: ProgressReporter,
{
    pub fn new(manifest_reader: MR, consumer: SC, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            consumer,
            progress_reporter,
        }
    }

    pub fn consumer(&self) -> &SC {
        &self.consumer
    }

    /// Executes the generation run
    ///
    /// Body text uses the consumer's line terminator, matching its header.
    /// A failing step aborts the run; outputs already written are left as they are.
    pub fn execute(&mut self, request: GenerateRequest) -> Result<GenerateResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading settings manifest from: {}",
            request.manifest_path.display()
        ));
        let manifest = self.manifest_reader.read_manifest(&request.manifest_path)?;

        if let Err(e) = self.consumer.start_file() {
            self.progress_reporter
                .report_error("❌ Failed to write generated file headers");
            return Err(e);
        }
        self.progress_reporter
            .report_progress(1, TOTAL_STEPS, Some("headers written"));

        let model = FsioSettingsBuilder::build(&manifest.settings, self.consumer.line_terminator());
        let constant_count = model.enumeration.constant_count();
        let skipped_count = manifest.settings.len() - constant_count;
        self.progress_reporter
            .report_progress(2, TOTAL_STEPS, Some("settings collected"));

        if let Err(e) = self.consumer.end_file(&model) {
            self.progress_reporter
                .report_error("❌ Failed to finalize generated files");
            return Err(e);
        }
        self.progress_reporter
            .report_progress(3, TOTAL_STEPS, Some("files closed"));

        if skipped_count > 0 {
            self.progress_reporter.report(&format!(
                "   - Skipped {} setting(s) not visible to FSIO",
                skipped_count
            ));
        }
        self.progress_reporter.report_completion(&format!(
            "✅ Generated {} FSIO setting(s)",
            constant_count
        ));

        Ok(GenerateResponse::new(constant_count, skipped_count))
    }
}
