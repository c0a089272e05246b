/// GenerateResponse - Summary of one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateResponse {
    /// Number of enum constants (and matching getters) emitted
    pub constant_count: usize,
    /// Declared fields left out because they are not FSIO-visible
    pub skipped_count: usize,
}

impl GenerateResponse {
    pub fn new(constant_count: usize, skipped_count: usize) -> Self {
        Self {
            constant_count,
            skipped_count,
        }
    }
}
