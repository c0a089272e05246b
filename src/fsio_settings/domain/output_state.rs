use crate::shared::error::FsioError;
use crate::shared::Result;
use std::fmt;

/// Lifecycle of one generated output
///
/// Outputs only move forward: `Created -> HeaderWritten -> BodyWritten -> Closed`.
/// A closed output is never reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputState {
    #[default]
    Created,
    HeaderWritten,
    BodyWritten,
    Closed,
}

impl OutputState {
    /// Fails with `FsioError::OutOfSequence` unless the output is in `expected`
    pub fn require(self, expected: OutputState, target: &str, operation: &str) -> Result<()> {
        if self != expected {
            return Err(FsioError::OutOfSequence {
                target: target.to_string(),
                operation: operation.to_string(),
                state: self.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl fmt::Display for OutputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputState::Created => write!(f, "created"),
            OutputState::HeaderWritten => write!(f, "header written"),
            OutputState::BodyWritten => write!(f, "body written"),
            OutputState::Closed => write!(f, "closed"),
        }
    }
}
