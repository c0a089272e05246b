use std::path::PathBuf;

/// GenerateRequest - Input of the FSIO file generation use case
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Settings manifest declaring the FSIO-visible fields
    pub manifest_path: PathBuf,
}

impl GenerateRequest {
    pub fn new(manifest_path: PathBuf) -> Self {
        Self { manifest_path }
    }
}
