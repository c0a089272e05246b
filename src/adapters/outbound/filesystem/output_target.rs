use crate::fsio_settings::domain::OutputState;
use crate::shared::error::FsioError;
use crate::shared::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// OutputTarget is a text sink that creates its file on the first write
///
/// Each target accepts one header, then one body, then is closed. Any I/O
/// failure drops the handle and leaves the target closed; whatever reached
/// the disk before the failure stays there.
pub struct OutputTarget {
    path: PathBuf,
    state: OutputState,
    writer: Option<BufWriter<File>>,
}

impl OutputTarget {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: OutputState::Created,
            writer: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> OutputState {
        self.state
    }

    /// Fails without touching the disk unless the target is in `expected`
    pub fn require(&self, expected: OutputState, operation: &str) -> Result<()> {
        self.state
            .require(expected, &self.path.display().to_string(), operation)
    }

    /// Creates (or truncates) the file and writes the header
    pub fn write_header(&mut self, header: &str) -> Result<()> {
        self.require(OutputState::Created, "write header to")?;

        let file = File::create(&self.path).map_err(|e| self.fail(e))?;
        self.writer = Some(BufWriter::new(file));
        self.write_all(header)?;

        self.state = OutputState::HeaderWritten;
        Ok(())
    }

    pub fn write_body(&mut self, body: &str) -> Result<()> {
        self.require(OutputState::HeaderWritten, "write body to")?;
        self.write_all(body)?;
        self.state = OutputState::BodyWritten;
        Ok(())
    }

    /// Flushes buffered text and releases the file handle
    pub fn close(&mut self) -> Result<()> {
        self.require(OutputState::BodyWritten, "close")?;

        let writer = self.writer.take();
        self.state = OutputState::Closed;

        if let Some(writer) = writer {
            let file = writer
                .into_inner()
                .map_err(|e| self.fail(e.into_error()))?;
            file.sync_all().map_err(|e| self.fail(e))?;
        }
        Ok(())
    }

    fn write_all(&mut self, text: &str) -> Result<()> {
        let result = match self.writer.as_mut() {
            Some(writer) => writer.write_all(text.as_bytes()),
            None => Ok(()),
        };
        result.map_err(|e| self.fail(e))
    }

    fn fail(&mut self, error: std::io::Error) -> anyhow::Error {
        self.writer = None;
        self.state = OutputState::Closed;
        FsioError::FileWriteError {
            path: self.path.clone(),
            details: error.to_string(),
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_does_not_create_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fsio_enums.h");

        let target = OutputTarget::new(path.clone());

        assert_eq!(target.state(), OutputState::Created);
        assert!(!path.exists());
    }

    #[test]
    fn test_full_lifecycle() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fsio_enums.h");
        let mut target = OutputTarget::new(path.clone());

        target.write_header("// header\n").unwrap();
        assert!(path.exists());
        assert_eq!(target.state(), OutputState::HeaderWritten);

        target.write_body("\tA = 1000,\n").unwrap();
        assert_eq!(target.state(), OutputState::BodyWritten);

        target.close().unwrap();
        assert_eq!(target.state(), OutputState::Closed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "// header\n\tA = 1000,\n");
    }

    #[test]
    fn test_write_header_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fsio_enums.h");
        fs::write(&path, "stale content from a previous run").unwrap();

        let mut target = OutputTarget::new(path.clone());
        target.write_header("// h\n").unwrap();
        target.write_body("").unwrap();
        target.close().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "// h\n");
    }

    #[test]
    fn test_body_before_header_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fsio_enums.h");
        let mut target = OutputTarget::new(path.clone());

        let err = target.write_body("body").unwrap_err().to_string();

        assert!(err.contains("Cannot write body to"));
        assert!(err.contains("'created'"));
        assert!(!path.exists());
    }

    #[test]
    fn test_second_header_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut target = OutputTarget::new(temp_dir.path().join("fsio_enums.h"));

        target.write_header("// h\n").unwrap();
        let err = target.write_header("// h\n").unwrap_err().to_string();

        assert!(err.contains("'header written'"));
        assert_eq!(target.state(), OutputState::HeaderWritten);
    }

    #[test]
    fn test_no_reuse_after_close() {
        let temp_dir = TempDir::new().unwrap();
        let mut target = OutputTarget::new(temp_dir.path().join("fsio_enums.h"));
        target.write_header("// h\n").unwrap();
        target.write_body("").unwrap();
        target.close().unwrap();

        assert!(target.write_header("// h\n").is_err());
        assert!(target.write_body("x").is_err());
        assert!(target.close().is_err());
    }

    #[test]
    fn test_unwritable_path_reports_write_error() {
        let mut target = OutputTarget::new(PathBuf::from("/nonexistent/directory/fsio_enums.h"));

        let err = target.write_header("// h\n").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<FsioError>(),
            Some(FsioError::FileWriteError { .. })
        ));
        assert_eq!(target.state(), OutputState::Closed);
    }
}
